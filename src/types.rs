//! Data types used throughout the SkitScript language server.
//!
//! This module contains the "model" structs and enums handed to us by the
//! parser (identifier occurrences, raw warnings and errors, the parse result
//! itself) as well as the diagnostic records produced from them.
//!
//! All line and column numbers in this module are **1-based** and column
//! spans are **inclusive**, matching what the parser reports.  Conversion to
//! the 0-based, half-open LSP convention happens in [`LineSpan::to_range`].
use serde::{Deserialize, Serialize};
use tower_lsp::lsp_types::{Position, Range};

/// The namespace an identifier lives in (character, flag, label, ...).
///
/// Opaque to the language server: two occurrences are only ever compared
/// for equality on this value, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentifierKind(String);

impl IdentifierKind {
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The role an identifier occurrence plays in its document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OccurrenceRole {
    /// An explicit, unambiguous binding site (e.g. a label declaration).
    Declaration,
    /// A binding inferred from use.  Only the first implicit declaration of
    /// a name in a document actually introduces it; later ones behave like
    /// references.
    ImplicitDeclaration,
    /// Any other use.
    Reference,
}

/// A 1-based, inclusive column span on a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSpan {
    pub line: u32,
    pub from_column: u32,
    pub to_column: u32,
}

impl LineSpan {
    pub fn new(line: u32, from_column: u32, to_column: u32) -> Self {
        Self {
            line,
            from_column,
            to_column,
        }
    }

    /// Convert to an LSP range.
    ///
    /// The line and the start column shift down by one; the inclusive end
    /// column becomes the exclusive 0-based end character unchanged.
    pub fn to_range(&self) -> Range {
        let line = self.line.saturating_sub(1);
        Range::new(
            Position::new(line, self.from_column.saturating_sub(1)),
            Position::new(line, self.to_column),
        )
    }
}

/// A single 1-based character position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPosition {
    pub line: u32,
    pub column: u32,
}

impl CharacterPosition {
    pub fn span(&self) -> LineSpan {
        LineSpan::new(self.line, self.column, self.column)
    }
}

/// One textual appearance of an identifier in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierOccurrence {
    #[serde(rename = "type")]
    pub kind: IdentifierKind,
    /// Canonical form used for equality (e.g. case and whitespace folded).
    pub normalized: String,
    /// The text exactly as written in the source.
    pub verbatim: String,
    pub line: u32,
    pub from_column: u32,
    pub to_column: u32,
    #[serde(rename = "context")]
    pub role: OccurrenceRole,
}

impl IdentifierOccurrence {
    pub fn span(&self) -> LineSpan {
        LineSpan::new(self.line, self.from_column, self.to_column)
    }

    /// Whether `other` denotes the same logical identifier as `self`.
    pub fn is_same_identifier(&self, other: &IdentifierOccurrence) -> bool {
        self.kind == other.kind && self.normalized == other.normalized
    }
}

/// A structured warning or error as reported by the parser.
///
/// The set of variants is fixed by the parser's output format; every
/// consumer matches on it exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RawDiagnostic {
    // ─── Warnings ───────────────────────────────────────────────────────
    DuplicateIdentifierInList {
        first: IdentifierOccurrence,
        second: IdentifierOccurrence,
    },
    /// A label whose first statement jumps straight to another label.
    EmptyLabel { label: IdentifierOccurrence },
    FlagNeverReferenced { flag: IdentifierOccurrence },
    FlagNeverSet { flag: IdentifierOccurrence },
    InconsistentIdentifier {
        first: IdentifierOccurrence,
        second: IdentifierOccurrence,
    },
    Unreachable(LineSpan),
    UnreferencedLabel { label: IdentifierOccurrence },

    // ─── Errors ─────────────────────────────────────────────────────────
    DuplicateLabel {
        first: IdentifierOccurrence,
        second: IdentifierOccurrence,
    },
    IncompleteEscapeSequence(CharacterPosition),
    /// Spans the backslash and the character following it.
    InvalidEscapeSequence(LineSpan),
    UndefinedLabel { label: IdentifierOccurrence },
    Unparsable(LineSpan),
    /// Spans the opening `**`.
    UnterminatedBold(LineSpan),
    /// Spans the opening backtick.
    UnterminatedCode(LineSpan),
    /// Spans the opening `*`.
    UnterminatedItalic(LineSpan),
}

/// The outcome of parsing one document snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ParseResult {
    #[serde(rename_all = "camelCase")]
    Valid {
        /// Every identifier occurrence, in document order.
        identifier_instances: Vec<IdentifierOccurrence>,
        #[serde(default)]
        warnings: Vec<RawDiagnostic>,
    },
    Invalid { errors: Vec<RawDiagnostic> },
}

impl ParseResult {
    /// The identifier occurrences of a valid parse, or `None` when the
    /// document failed to parse.
    pub fn occurrences(&self) -> Option<&[IdentifierOccurrence]> {
        match self {
            ParseResult::Valid {
                identifier_instances,
                ..
            } => Some(identifier_instances),
            ParseResult::Invalid { .. } => None,
        }
    }

    /// The warnings of a valid parse or the errors of an invalid one.
    pub fn raw_diagnostics(&self) -> &[RawDiagnostic] {
        match self {
            ParseResult::Valid { warnings, .. } => warnings,
            ParseResult::Invalid { errors } => errors,
        }
    }
}

/// Severity of a translated diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A positioned, human-readable diagnostic derived from a [`RawDiagnostic`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRecord {
    /// The parser's name for the diagnostic kind (e.g. `"undefinedLabel"`).
    pub code: &'static str,
    /// 1-based, inclusive span the diagnostic applies to.
    pub span: LineSpan,
    pub message: &'static str,
    pub severity: Severity,
}
