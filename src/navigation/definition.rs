//! Go to definition.
//!
//! Explicit declarations take precedence over implicit ones; within each
//! class the earliest in the document wins.  A group made only of plain
//! references has nowhere to jump to and yields `None`.
use tower_lsp::lsp_types::*;

use super::occurrence_location;
use crate::Backend;
use crate::types::OccurrenceRole;

impl Backend {
    pub async fn find_definition(&self, uri: &Url, content: &str, position: Position) -> Option<Location> {
        let group = self.group_at_position(content, position).await?;

        let declarations = group
            .iter()
            .filter(|occurrence| occurrence.role == OccurrenceRole::Declaration);
        let implicit_declarations = group
            .iter()
            .filter(|occurrence| occurrence.role == OccurrenceRole::ImplicitDeclaration);

        declarations
            .chain(implicit_declarations)
            .next()
            .map(|occurrence| occurrence_location(uri, occurrence))
    }
}
