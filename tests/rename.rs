mod common;

use std::sync::Arc;

use common::*;
use pretty_assertions::assert_eq;
use skitscript_lsp::types::ParseResult;
use tower_lsp::lsp_types::*;

const CANDIDATE: &str = " \n \r \t Example Identifier C \n \r \t ";

fn expected_edit(lines: &[u32]) -> WorkspaceEdit {
    let edits = lines
        .iter()
        .map(|&line| {
            TextEdit::new(
                Range::new(Position::new(line, 10), Position::new(line, 30)),
                "Example Identifier C".to_string(),
            )
        })
        .collect();
    WorkspaceEdit {
        changes: Some([(test_uri(), edits)].into_iter().collect()),
        ..WorkspaceEdit::default()
    }
}

async fn rename_at(position: Position, new_name: &str) -> Option<WorkspaceEdit> {
    let backend = create_test_backend(locations_parse());
    backend.rename_edits(&test_uri(), LOCATIONS_TEXT, position, new_name).await
}

// ─── Prepare Rename ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_prepare_rename_returns_range_and_verbatim_placeholder() {
    let backend = create_test_backend(locations_parse());
    let result = backend
        .prepare_rename_at(LOCATIONS_TEXT, Position::new(3, 2))
        .await;
    assert_eq!(
        result,
        Some(PrepareRenameResponse::RangeWithPlaceholder {
            range: Range::new(Position::new(3, 0), Position::new(3, 20)),
            placeholder: "Example Identifier B".to_string(),
        })
    );
}

#[tokio::test]
async fn test_prepare_rename_off_identifier_returns_none() {
    let backend = create_test_backend(locations_parse());
    assert_eq!(
        backend.prepare_rename_at(LOCATIONS_TEXT, Position::new(4, 3)).await,
        None
    );
}

#[tokio::test]
async fn test_prepare_rename_on_invalid_document_returns_none() {
    let backend = create_test_backend(ParseResult::Invalid { errors: vec![] });
    assert_eq!(
        backend.prepare_rename_at(LOCATIONS_TEXT, Position::new(4, 12)).await,
        None
    );
}

#[tokio::test]
async fn test_prepare_rename_with_broken_parser_returns_none() {
    let backend = skitscript_lsp::Backend::new_test(Arc::new(BrokenParser));
    assert_eq!(
        backend.prepare_rename_at(LOCATIONS_TEXT, Position::new(4, 12)).await,
        None
    );
}

// ─── Rename Edits ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_rename_cursor_before_identifier_returns_none() {
    assert_eq!(rename_at(Position::new(4, 9), CANDIDATE).await, None);
}

#[tokio::test]
async fn test_rename_cursor_on_first_character() {
    assert_eq!(
        rename_at(Position::new(4, 10), CANDIDATE).await,
        Some(expected_edit(&[1, 4, 6]))
    );
}

#[tokio::test]
async fn test_rename_cursor_in_middle() {
    assert_eq!(
        rename_at(Position::new(4, 24), CANDIDATE).await,
        Some(expected_edit(&[1, 4, 6]))
    );
}

#[tokio::test]
async fn test_rename_cursor_on_last_character() {
    assert_eq!(
        rename_at(Position::new(4, 29), CANDIDATE).await,
        Some(expected_edit(&[1, 4, 6]))
    );
}

#[tokio::test]
async fn test_rename_cursor_just_after_identifier_still_matches() {
    assert_eq!(
        rename_at(Position::new(4, 30), CANDIDATE).await,
        Some(expected_edit(&[1, 4, 6]))
    );
}

#[tokio::test]
async fn test_rename_cursor_two_past_identifier_returns_none() {
    assert_eq!(rename_at(Position::new(4, 31), CANDIDATE).await, None);
}

#[tokio::test]
async fn test_rename_does_not_cross_identifier_kinds() {
    // Line 4 holds a character and an emote spelled like the backgrounds.
    let result = rename_at(Position::new(3, 5), "Example Identifier C").await.unwrap();
    let edits = &result.changes.unwrap()[&test_uri()];
    assert_eq!(
        edits,
        &vec![TextEdit::new(
            Range::new(Position::new(3, 0), Position::new(3, 20)),
            "Example Identifier C".to_string(),
        )]
    );
}

#[tokio::test]
async fn test_rename_invalid_identifier_returns_none() {
    assert_eq!(
        rename_at(
            Position::new(4, 24),
            " \n \r \t Example (Invalid) Identifier \n \r \t "
        )
        .await,
        None
    );
}

#[tokio::test]
async fn test_rename_invalid_identifier_returns_none_off_identifier_too() {
    assert_eq!(rename_at(Position::new(4, 2), "Example (Invalid)").await, None);
}

#[tokio::test]
async fn test_rename_validates_trimmed_candidate() {
    let parser = Arc::new(FixtureParser::new(locations_parse()));
    let backend = create_backend_with_parser(parser.clone());
    backend
        .rename_edits(&test_uri(), LOCATIONS_TEXT, Position::new(4, 24), CANDIDATE)
        .await;
    assert_eq!(
        *parser.validated_candidates.lock().unwrap(),
        vec!["Example Identifier C".to_string()]
    );
}

#[tokio::test]
async fn test_rename_invalid_document_returns_none() {
    let backend = create_test_backend(ParseResult::Invalid { errors: vec![] });
    assert_eq!(
        backend
            .rename_edits(&test_uri(), LOCATIONS_TEXT, Position::new(4, 24), CANDIDATE)
            .await,
        None
    );
}

#[tokio::test]
async fn test_rename_with_broken_parser_returns_none() {
    let backend = skitscript_lsp::Backend::new_test(Arc::new(BrokenParser));
    assert_eq!(
        backend
            .rename_edits(&test_uri(), LOCATIONS_TEXT, Position::new(4, 24), CANDIDATE)
            .await,
        None
    );
}
