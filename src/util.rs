//! Helpers shared by the request handlers: parsing with failure logging,
//! open-document lookup, client logging and per-document diagnostics.
use tower_lsp::lsp_types::*;

use crate::Backend;
use crate::diagnostics::translate_all;
use crate::types::ParseResult;

impl Backend {
    /// Parse `content`, logging and swallowing parser failures.
    pub(crate) async fn parse_document(&self, content: &str) -> Option<ParseResult> {
        match self.parser.parse(content).await {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                tracing::warn!("Parser failed: {}", err);
                None
            }
        }
    }

    /// The stored text of an open document.
    pub(crate) fn document_text(&self, uri: &Url) -> Option<String> {
        self.open_files.lock().get(uri.as_str()).cloned()
    }

    /// Public helper for tests: whether a document is tracked as open.
    pub fn is_document_open(&self, uri: &str) -> bool {
        self.open_files.lock().contains_key(uri)
    }

    /// Only on-disk files in the configured language are served.
    pub(crate) fn is_served_document(&self, uri: &Url, language_id: &str) -> bool {
        uri.scheme() == "file" && language_id == self.language_id
    }

    /// Diagnostics for one document snapshot.
    ///
    /// A parser failure yields no diagnostics rather than stale ones.
    pub async fn diagnostics_for(&self, content: &str) -> Vec<Diagnostic> {
        self.parse_document(content)
            .await
            .map(|parsed| {
                translate_all(&parsed)
                    .iter()
                    .map(|record| record.to_lsp_diagnostic())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) async fn log(&self, typ: MessageType, message: String) {
        if let Some(client) = &self.client {
            client.log_message(typ, message).await;
        }
    }
}
