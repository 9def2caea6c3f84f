//! SkitScript language server.
//!
//! The server answers four questions an editor asks about a SkitScript
//! document: which identifier is under the cursor, where else it occurs,
//! where it is declared, and what problems the document currently has.
//!
//! Parsing is delegated to a [`ScriptParser`]; every request re-parses the
//! current document text and derives its answer from scratch.
//!
//! - [`types`]: parser output model and diagnostic records.
//! - [`parser`]: the parser boundary and the external-process implementation.
//! - [`identifiers`]: cursor lookup and identifier grouping.
//! - [`diagnostics`]: raw parser diagnostics to editor diagnostics.
//! - `navigation`: rename, references, definition and highlight requests.
//! - `server`: the `LanguageServer` implementation and document lifecycle.
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tower_lsp::Client;

pub mod config;
pub mod diagnostics;
pub mod identifiers;
mod navigation;
pub mod parser;
mod server;
pub mod types;
mod util;

pub use config::{Config, ParserConfig};
pub use parser::{ExternalParser, ParserError, ScriptParser};

pub struct Backend {
    name: String,
    version: String,
    /// Documents opened with any other language id are not ours.
    language_id: String,
    parser: Arc<dyn ScriptParser>,
    /// Latest full text of every open SkitScript document, keyed by URI.
    open_files: Arc<Mutex<HashMap<String, String>>>,
    client: Option<Client>,
}

impl Backend {
    pub fn new(client: Client, config: &Config) -> Self {
        Self::with_parser(
            Some(client),
            &config.language_id,
            Arc::new(ExternalParser::from_config(&config.parser)),
        )
    }

    pub fn with_parser(
        client: Option<Client>,
        language_id: &str,
        parser: Arc<dyn ScriptParser>,
    ) -> Self {
        Self {
            name: "SkitScript LSP".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            language_id: language_id.to_string(),
            parser,
            open_files: Arc::new(Mutex::new(HashMap::new())),
            client,
        }
    }

    /// A backend with no client attached, for tests.
    pub fn new_test(parser: Arc<dyn ScriptParser>) -> Self {
        Self::with_parser(None, &Config::default().language_id, parser)
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
