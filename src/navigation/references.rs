//! Find references.
//!
//! With the declaration included, the whole group is returned in document
//! order.  Without it, the result is built from two buckets, concatenated
//! rather than merged:
//!
//!   1. every implicit declaration except the first (which is the binding),
//!   2. every plain reference.
//!
//! Explicit declarations never appear in the second form.  A later implicit
//! declaration can therefore be listed before an earlier reference.
use tower_lsp::lsp_types::*;

use super::occurrence_location;
use crate::Backend;
use crate::types::OccurrenceRole;

impl Backend {
    pub async fn find_references(
        &self,
        uri: &Url,
        content: &str,
        position: Position,
        include_declaration: bool,
    ) -> Option<Vec<Location>> {
        let group = self.group_at_position(content, position).await?;

        if include_declaration {
            return Some(
                group
                    .iter()
                    .map(|occurrence| occurrence_location(uri, occurrence))
                    .collect(),
            );
        }

        let later_implicit_declarations = group
            .iter()
            .filter(|occurrence| occurrence.role == OccurrenceRole::ImplicitDeclaration)
            .skip(1);
        let references = group
            .iter()
            .filter(|occurrence| occurrence.role == OccurrenceRole::Reference);

        Some(
            later_implicit_declarations
                .chain(references)
                .map(|occurrence| occurrence_location(uri, occurrence))
                .collect(),
        )
    }
}
