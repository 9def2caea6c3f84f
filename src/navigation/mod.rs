//! Navigation requests: rename, find references, go to definition and
//! document highlight.
//!
//! Each request follows the same shape: parse the current text, locate the
//! occurrence under the cursor, gather its group, then filter and order the
//! group according to the request.  A document that fails to parse, or a
//! cursor that touches no identifier, yields `None`.
//!
//! - [`rename`]: prepare-rename placeholder and the rename edit set.
//! - [`references`]: the find-references ordering policy.
//! - [`definition`]: declaration precedence for go to definition.
//! - [`highlight`]: read/write highlights for every occurrence in the group.
use tower_lsp::lsp_types::{Location, Position, Url};

use crate::Backend;
use crate::identifiers::{group_of, locate_at_position};
use crate::types::IdentifierOccurrence;

mod definition;
mod highlight;
mod references;
mod rename;

impl Backend {
    /// Parse `content` and return the group of the occurrence at `position`.
    pub(crate) async fn group_at_position(
        &self,
        content: &str,
        position: Position,
    ) -> Option<Vec<IdentifierOccurrence>> {
        let parsed = self.parse_document(content).await?;
        let occurrences = parsed.occurrences()?;
        let target = locate_at_position(occurrences, position)?;
        Some(group_of(occurrences, target).into_iter().cloned().collect())
    }
}

pub(crate) fn occurrence_location(uri: &Url, occurrence: &IdentifierOccurrence) -> Location {
    Location::new(uri.clone(), occurrence.span().to_range())
}
