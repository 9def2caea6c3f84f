//! Translation of parser warnings and errors into editor diagnostics.
//!
//! Every raw diagnostic kind maps to a fixed message, a fixed severity and
//! the payload field whose position the diagnostic is reported at.  Messages
//! are never interpolated: two diagnostics of the same kind always read the
//! same.
use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity, NumberOrString};

use crate::types::{DiagnosticRecord, ParseResult, RawDiagnostic, Severity};

/// Value of the `source` field on every diagnostic we publish.
pub const DIAGNOSTIC_SOURCE: &str = "skitscript";

/// Translate one raw parser diagnostic.
pub fn translate(raw: &RawDiagnostic) -> DiagnosticRecord {
    use RawDiagnostic::*;
    use Severity::*;

    let (code, span, severity, message) = match raw {
        DuplicateIdentifierInList { second, .. } => (
            "duplicateIdentifierInList",
            second.span(),
            Warning,
            "This identifier appears more than once in the same list.",
        ),
        EmptyLabel { label } => (
            "emptyLabel",
            label.span(),
            Warning,
            "This label immediately leads to another; consider jumping to the destination directly.",
        ),
        FlagNeverReferenced { flag } => (
            "flagNeverReferenced",
            flag.span(),
            Warning,
            "This flag is set, but never referenced.",
        ),
        FlagNeverSet { flag } => (
            "flagNeverSet",
            flag.span(),
            Warning,
            "This flag is referenced, but never set.",
        ),
        InconsistentIdentifier { second, .. } => (
            "inconsistentIdentifier",
            second.span(),
            Warning,
            "This identifier is spelled differently to a previous occurrence.",
        ),
        Unreachable(span) => (
            "unreachable",
            *span,
            Warning,
            "This line will never be reached.",
        ),
        UnreferencedLabel { label } => (
            "unreferencedLabel",
            label.span(),
            Warning,
            "This label is never referenced.",
        ),
        DuplicateLabel { second, .. } => (
            "duplicateLabel",
            second.span(),
            Error,
            "This label has the same (normalized) name as another previously declared.",
        ),
        IncompleteEscapeSequence(position) => (
            "incompleteEscapeSequence",
            position.span(),
            Error,
            "This line ends with a backslash, which must be followed by the character to escape.",
        ),
        InvalidEscapeSequence(span) => (
            "invalidEscapeSequence",
            *span,
            Error,
            "This escape sequence is not recognized.",
        ),
        UndefinedLabel { label } => (
            "undefinedLabel",
            label.span(),
            Error,
            "This label has not been declared.",
        ),
        Unparsable(span) => (
            "unparsable",
            *span,
            Error,
            "This line could not be parsed.",
        ),
        UnterminatedBold(span) => (
            "unterminatedBold",
            *span,
            Error,
            "This bold run is never terminated.",
        ),
        UnterminatedCode(span) => (
            "unterminatedCode",
            *span,
            Error,
            "This code run is never terminated.",
        ),
        UnterminatedItalic(span) => (
            "unterminatedItalic",
            *span,
            Error,
            "This italic run is never terminated.",
        ),
    };

    DiagnosticRecord {
        code,
        span,
        message,
        severity,
    }
}

/// Translate every diagnostic of a parse: the warnings of a valid document,
/// or the errors of an invalid one.
pub fn translate_all(parsed: &ParseResult) -> Vec<DiagnosticRecord> {
    parsed.raw_diagnostics().iter().map(translate).collect()
}

impl DiagnosticRecord {
    /// Convert to the LSP representation, shifting to 0-based positions.
    pub fn to_lsp_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            range: self.span.to_range(),
            severity: Some(match self.severity {
                Severity::Warning => DiagnosticSeverity::WARNING,
                Severity::Error => DiagnosticSeverity::ERROR,
            }),
            code: Some(NumberOrString::String(self.code.to_string())),
            source: Some(DIAGNOSTIC_SOURCE.to_string()),
            message: self.message.to_string(),
            ..Diagnostic::default()
        }
    }
}
