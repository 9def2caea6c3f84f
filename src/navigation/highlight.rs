//! Document highlight: every occurrence of the identifier under the cursor,
//! marked as a write at binding sites and a read elsewhere.
use tower_lsp::lsp_types::*;

use crate::Backend;
use crate::types::OccurrenceRole;

impl Backend {
    pub async fn document_highlights(
        &self,
        content: &str,
        position: Position,
    ) -> Option<Vec<DocumentHighlight>> {
        let group = self.group_at_position(content, position).await?;

        let mut seen_implicit_declaration = false;
        let highlights = group
            .iter()
            .map(|occurrence| {
                // Only the first implicit declaration binds the name.
                let binds = match occurrence.role {
                    OccurrenceRole::Declaration => true,
                    OccurrenceRole::ImplicitDeclaration => {
                        !std::mem::replace(&mut seen_implicit_declaration, true)
                    }
                    OccurrenceRole::Reference => false,
                };
                DocumentHighlight {
                    range: occurrence.span().to_range(),
                    kind: Some(if binds {
                        DocumentHighlightKind::WRITE
                    } else {
                        DocumentHighlightKind::READ
                    }),
                }
            })
            .collect();

        Some(highlights)
    }
}
