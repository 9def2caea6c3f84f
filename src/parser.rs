//! The boundary to the SkitScript parser.
//!
//! The language server never tokenizes source text itself.  Everything it
//! knows about a document comes from a [`ScriptParser`]: a pure function from
//! document text to a [`ParseResult`], plus the identifier-validity predicate
//! used to vet rename targets.
//!
//! [`ExternalParser`] is the implementation used by the binary.  It runs a
//! parser executable once per request and speaks a tiny JSON protocol:
//!
//!   - `<command> <args...> parse` reads the document text on stdin and
//!     writes a JSON `ParseResult` to stdout.
//!   - `<command> <args...> identifier-is-valid` reads a candidate
//!     identifier on stdin and writes JSON `true` or `false` to stdout.
//!
//! The executable runs on the tokio runtime and is killed if it does not
//! finish within the configured timeout.
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::config::ParserConfig;
use crate::types::ParseResult;

/// Errors raised while talking to the parser.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("failed to start parser `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("i/o error while running parser: {0}")]
    Io(#[from] std::io::Error),
    #[error("parser `{command}` did not finish within {timeout:?}")]
    Timeout { command: String, timeout: Duration },
    #[error("parser exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
    #[error("parser produced malformed output: {0}")]
    MalformedOutput(#[from] serde_json::Error),
}

/// Source of parse results for SkitScript documents.
#[tower_lsp::async_trait]
pub trait ScriptParser: Send + Sync {
    /// Parse a complete document snapshot.
    async fn parse(&self, text: &str) -> Result<ParseResult, ParserError>;

    /// Whether `candidate` is acceptable as identifier text.
    async fn identifier_is_valid(&self, candidate: &str) -> Result<bool, ParserError>;
}

/// A [`ScriptParser`] backed by an external parser executable.
#[derive(Debug, Clone)]
pub struct ExternalParser {
    command: String,
    args: Vec<String>,
    timeout: Duration,
}

impl ExternalParser {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
            timeout: Duration::from_millis(ParserConfig::default().timeout_ms),
        }
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new(config.command.clone(), config.args.clone())
            .with_timeout(Duration::from_millis(config.timeout_ms))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Run the parser with `subcommand`, feeding `input` on stdin, and
    /// return its stdout.
    async fn run(&self, subcommand: &str, input: &str) -> Result<Vec<u8>, ParserError> {
        let mut child = Command::new(&self.command)
            .args(&self.args)
            .arg(subcommand)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ParserError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        // Stdin is written while stdout is drained, so a large result cannot
        // stall the write.  Dropping stdin signals EOF.
        let stdin = child.stdin.take();
        let write_input = async move {
            if let Some(mut stdin) = stdin {
                // An early exit closes the pipe; the exit status reports it.
                let _ = stdin.write_all(input.as_bytes()).await;
            }
        };
        let run = async move {
            let (_, output) = tokio::join!(write_input, child.wait_with_output());
            output
        };

        // On timeout `run` is dropped together with the child, which kills it.
        let output = tokio::time::timeout(self.timeout, run)
            .await
            .map_err(|_| ParserError::Timeout {
                command: self.command.clone(),
                timeout: self.timeout,
            })??;

        if !output.status.success() {
            return Err(ParserError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}

#[tower_lsp::async_trait]
impl ScriptParser for ExternalParser {
    async fn parse(&self, text: &str) -> Result<ParseResult, ParserError> {
        let stdout = self.run("parse", text).await?;
        Ok(serde_json::from_slice(&stdout)?)
    }

    async fn identifier_is_valid(&self, candidate: &str) -> Result<bool, ParserError> {
        let stdout = self.run("identifier-is-valid", candidate).await?;
        Ok(serde_json::from_slice(&stdout)?)
    }
}
