//! Rename support.
//!
//! Renaming replaces every occurrence in the group of the identifier under
//! the cursor.  The edits are returned to the editor, which applies them
//! atomically; the stored document is never touched here.
use std::collections::HashMap;

use tower_lsp::lsp_types::*;

use crate::Backend;
use crate::identifiers::locate_at_position;

impl Backend {
    /// Handle a "prepare rename" request: the range of the identifier under
    /// the cursor and its text as written, to seed the rename input box.
    pub async fn prepare_rename_at(
        &self,
        content: &str,
        position: Position,
    ) -> Option<PrepareRenameResponse> {
        let parsed = self.parse_document(content).await?;
        let target = locate_at_position(parsed.occurrences()?, position)?;

        Some(PrepareRenameResponse::RangeWithPlaceholder {
            range: target.span().to_range(),
            placeholder: target.verbatim.clone(),
        })
    }

    /// Handle a "rename" request.
    ///
    /// Returns `None` when the new name (after trimming surrounding
    /// whitespace) is not a valid identifier, when the document does not
    /// parse, or when the cursor is not on an identifier.
    pub async fn rename_edits(
        &self,
        uri: &Url,
        content: &str,
        position: Position,
        new_name: &str,
    ) -> Option<WorkspaceEdit> {
        let new_name = new_name.trim();

        match self.parser.identifier_is_valid(new_name).await {
            Ok(true) => {}
            Ok(false) => return None,
            Err(err) => {
                tracing::warn!("Could not validate rename target: {}", err);
                return None;
            }
        }

        let group = self.group_at_position(content, position).await?;

        let edits: Vec<TextEdit> = group
            .iter()
            .map(|occurrence| TextEdit::new(occurrence.span().to_range(), new_name.to_string()))
            .collect();

        let mut changes = HashMap::new();
        changes.insert(uri.clone(), edits);

        Some(WorkspaceEdit {
            changes: Some(changes),
            ..WorkspaceEdit::default()
        })
    }
}
