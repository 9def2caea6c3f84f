#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use skitscript_lsp::types::{IdentifierKind, IdentifierOccurrence, OccurrenceRole, ParseResult};
use skitscript_lsp::{Backend, ParserError, ScriptParser};
use tower_lsp::lsp_types::Url;

/// A parser that returns a canned result regardless of the text, and
/// records what it was asked.
pub struct FixtureParser {
    result: ParseResult,
    pub parsed_texts: Mutex<Vec<String>>,
    pub validated_candidates: Mutex<Vec<String>>,
}

impl FixtureParser {
    pub fn new(result: ParseResult) -> Self {
        Self {
            result,
            parsed_texts: Mutex::new(Vec::new()),
            validated_candidates: Mutex::new(Vec::new()),
        }
    }
}

#[tower_lsp::async_trait]
impl ScriptParser for FixtureParser {
    async fn parse(&self, text: &str) -> Result<ParseResult, ParserError> {
        self.parsed_texts.lock().unwrap().push(text.to_string());
        Ok(self.result.clone())
    }

    async fn identifier_is_valid(&self, candidate: &str) -> Result<bool, ParserError> {
        self.validated_candidates
            .lock()
            .unwrap()
            .push(candidate.to_string());
        Ok(identifier_is_valid(candidate))
    }
}

/// A parser whose every call fails.
pub struct BrokenParser;

#[tower_lsp::async_trait]
impl ScriptParser for BrokenParser {
    async fn parse(&self, _: &str) -> Result<ParseResult, ParserError> {
        Err(ParserError::Io(std::io::Error::other("parser unavailable")))
    }

    async fn identifier_is_valid(&self, _: &str) -> Result<bool, ParserError> {
        Err(ParserError::Io(std::io::Error::other("parser unavailable")))
    }
}

/// Letters, digits and single inner spaces.
pub fn identifier_is_valid(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate.trim() == candidate
        && !candidate.contains("  ")
        && candidate
            .chars()
            .all(|c| c.is_alphanumeric() || c == ' ')
}

pub fn create_test_backend(result: ParseResult) -> Backend {
    Backend::new_test(Arc::new(FixtureParser::new(result)))
}

pub fn create_backend_with_parser(parser: Arc<FixtureParser>) -> Backend {
    Backend::new_test(parser)
}

pub fn test_uri() -> Url {
    Url::parse("file:///example.skitscript").unwrap()
}

pub fn occurrence(
    kind: &str,
    verbatim: &str,
    line: u32,
    from_column: u32,
    role: OccurrenceRole,
) -> IdentifierOccurrence {
    IdentifierOccurrence {
        kind: IdentifierKind::new(kind),
        normalized: verbatim.to_lowercase(),
        verbatim: verbatim.to_string(),
        line,
        from_column,
        to_column: from_column + verbatim.chars().count() as u32 - 1,
        role,
    }
}

pub fn valid(occurrences: Vec<IdentifierOccurrence>) -> ParseResult {
    ParseResult::Valid {
        identifier_instances: occurrences,
        warnings: Vec::new(),
    }
}

/// Occurrences for:
///
/// ```text
/// Location: Example Identifier A.
/// Location: Example Identifier B.
/// Location: Example Identifier A.
/// Example Identifier B is Example Identifier A.
/// Location: Example Identifier B.
/// Location: Example Identifier A.
/// Location: Example Identifier B.
/// Location: Example Identifier A.
/// ```
pub const LOCATIONS_TEXT: &str = "Location: Example Identifier A.
Location: Example Identifier B.
Location: Example Identifier A.
Example Identifier B is Example Identifier A.
Location: Example Identifier B.
Location: Example Identifier A.
Location: Example Identifier B.
Location: Example Identifier A.";

pub fn locations_parse() -> ParseResult {
    use OccurrenceRole::*;
    valid(vec![
        occurrence("background", "Example Identifier A", 1, 11, ImplicitDeclaration),
        occurrence("background", "Example Identifier B", 2, 11, ImplicitDeclaration),
        occurrence("background", "Example Identifier A", 3, 11, ImplicitDeclaration),
        occurrence("character", "Example Identifier B", 4, 1, ImplicitDeclaration),
        occurrence("emote", "Example Identifier A", 4, 25, ImplicitDeclaration),
        occurrence("background", "Example Identifier B", 5, 11, ImplicitDeclaration),
        occurrence("background", "Example Identifier A", 6, 11, ImplicitDeclaration),
        occurrence("background", "Example Identifier B", 7, 11, ImplicitDeclaration),
        occurrence("background", "Example Identifier A", 8, 11, ImplicitDeclaration),
    ])
}

/// Occurrences of one label in every role, interleaved:
///
/// ```text
/// Jump to Example Label.          reference            line 1
/// Example Label:                  implicit declaration line 2
/// Jump to Example Label.          reference            line 3
/// Example Label:                  implicit declaration line 4
/// # Example Label                 declaration          line 5
/// Example Label:                  implicit declaration line 6
/// # Example Label                 declaration          line 7
/// ```
pub fn mixed_roles_occurrences() -> Vec<IdentifierOccurrence> {
    use OccurrenceRole::*;
    vec![
        occurrence("label", "Example Label", 1, 9, Reference),
        occurrence("label", "Example Label", 2, 1, ImplicitDeclaration),
        occurrence("label", "Example Label", 3, 9, Reference),
        occurrence("label", "Example Label", 4, 1, ImplicitDeclaration),
        occurrence("label", "Example Label", 5, 3, Declaration),
        occurrence("label", "Example Label", 6, 1, ImplicitDeclaration),
        occurrence("label", "Example Label", 7, 3, Declaration),
        occurrence("flag", "Example Label", 8, 5, Reference),
    ]
}
