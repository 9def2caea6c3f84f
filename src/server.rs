//! LSP server trait implementation.
//!
//! This module contains the `impl LanguageServer for Backend` block, which
//! handles the protocol messages: initialize, the document lifecycle
//! (didOpen, didChange, didClose) and the navigation requests.
//!
//! Every open, change or close of a document refreshes its published
//! diagnostics.  Documents in another language, or not backed by a file,
//! have theirs cleared.
use tower_lsp::LanguageServer;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;

use crate::Backend;

impl Backend {
    /// Re-translate and publish diagnostics for `uri`.
    async fn refresh_diagnostics(&self, uri: Url, content: &str) {
        let diagnostics = self.diagnostics_for(content).await;
        if let Some(client) = &self.client {
            client.publish_diagnostics(uri, diagnostics, None).await;
        }
    }

    async fn clear_diagnostics(&self, uri: Url) {
        if let Some(client) = &self.client {
            client.publish_diagnostics(uri, Vec::new(), None).await;
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                rename_provider: Some(OneOf::Right(RenameOptions {
                    prepare_provider: Some(true),
                    work_done_progress_options: WorkDoneProgressOptions::default(),
                })),
                references_provider: Some(OneOf::Left(true)),
                definition_provider: Some(OneOf::Left(true)),
                document_highlight_provider: Some(OneOf::Left(true)),
                ..ServerCapabilities::default()
            },
            server_info: Some(ServerInfo {
                name: self.name.clone(),
                version: Some(self.version.clone()),
            }),
            offset_encoding: None,
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.log(MessageType::INFO, format!("{} initialized!", self.name))
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;

        if !self.is_served_document(&doc.uri, &doc.language_id) {
            self.open_files.lock().remove(doc.uri.as_str());
            self.clear_diagnostics(doc.uri).await;
            return;
        }

        self.open_files
            .lock()
            .insert(doc.uri.to_string(), doc.text.clone());

        self.log(MessageType::INFO, format!("Opened file: {}", doc.uri))
            .await;
        self.refresh_diagnostics(doc.uri, &doc.text).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;

        // Full sync: the last change carries the whole text.
        let Some(change) = params.content_changes.into_iter().last() else {
            return;
        };

        let tracked = {
            let mut files = self.open_files.lock();
            match files.get_mut(uri.as_str()) {
                Some(text) => {
                    *text = change.text.clone();
                    true
                }
                None => false,
            }
        };

        if tracked {
            self.refresh_diagnostics(uri, &change.text).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;

        self.open_files.lock().remove(uri.as_str());

        self.log(MessageType::INFO, format!("Closed file: {}", uri))
            .await;
        self.clear_diagnostics(uri).await;
    }

    async fn prepare_rename(
        &self,
        params: TextDocumentPositionParams,
    ) -> Result<Option<PrepareRenameResponse>> {
        let Some(content) = self.document_text(&params.text_document.uri) else {
            return Ok(None);
        };
        Ok(self.prepare_rename_at(&content, params.position).await)
    }

    async fn rename(&self, params: RenameParams) -> Result<Option<WorkspaceEdit>> {
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        let Some(content) = self.document_text(&uri) else {
            return Ok(None);
        };
        Ok(self
            .rename_edits(&uri, &content, position, &params.new_name)
            .await)
    }

    async fn references(&self, params: ReferenceParams) -> Result<Option<Vec<Location>>> {
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        let Some(content) = self.document_text(&uri) else {
            return Ok(None);
        };
        Ok(self
            .find_references(&uri, &content, position, params.context.include_declaration)
            .await)
    }

    async fn goto_definition(
        &self,
        params: GotoDefinitionParams,
    ) -> Result<Option<GotoDefinitionResponse>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let Some(content) = self.document_text(&uri) else {
            return Ok(None);
        };
        Ok(self
            .find_definition(&uri, &content, position)
            .await
            .map(GotoDefinitionResponse::Scalar))
    }

    async fn document_highlight(
        &self,
        params: DocumentHighlightParams,
    ) -> Result<Option<Vec<DocumentHighlight>>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let Some(content) = self.document_text(&uri) else {
            return Ok(None);
        };
        Ok(self.document_highlights(&content, position).await)
    }
}
