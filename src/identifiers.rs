//! Cursor-to-identifier lookup and identifier grouping.
//!
//! These two primitives underpin every navigation request: find the
//! occurrence the cursor touches, then find every occurrence that names the
//! same identifier.
use tower_lsp::lsp_types::Position;

use crate::types::IdentifierOccurrence;

/// Find the occurrence touched by a 1-based `(line, column)` position.
///
/// A column one past the last character still counts as touching the
/// occurrence, so a cursor resting at either edge of an identifier finds it.
/// Occurrences are scanned in document order and the first match wins.
pub fn locate(
    occurrences: &[IdentifierOccurrence],
    line: u32,
    column: u32,
) -> Option<&IdentifierOccurrence> {
    occurrences.iter().find(|occurrence| {
        occurrence.line == line
            && occurrence.from_column <= column
            && column <= occurrence.to_column.saturating_add(1)
    })
}

/// Find the occurrence touched by a 0-based LSP cursor position.
pub fn locate_at_position(
    occurrences: &[IdentifierOccurrence],
    position: Position,
) -> Option<&IdentifierOccurrence> {
    locate(
        occurrences,
        position.line.saturating_add(1),
        position.character.saturating_add(1),
    )
}

/// Every occurrence naming the same identifier as `target`, in document
/// order (including `target` itself).
pub fn group_of<'a>(
    occurrences: &'a [IdentifierOccurrence],
    target: &IdentifierOccurrence,
) -> Vec<&'a IdentifierOccurrence> {
    occurrences
        .iter()
        .filter(|occurrence| occurrence.is_same_identifier(target))
        .collect()
}
