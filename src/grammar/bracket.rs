//! The three-way `[` disambiguator plus the productions it
//! dispatches to: `RecordExpression`, `FieldSelector`, `FieldProjection`, and
//! the unrelated (non-ambiguous) `FieldSpecificationList` a type expression
//! opens with the same token.

use crate::ast::kind::NodeKind;
use crate::ast::node::NodeId;
use crate::error::ParseResult;
use crate::grammar::identifier::{read_generalized_identifier, read_generalized_identifier_paired_expression};
use crate::grammar::literal::{read_constant, reject_trailing_csv_comma};
use crate::lexer::TokenKind;
use crate::state::ParseState;
use crate::strategy::ParserStrategy;

/// Which of the three candidates the bounded lookahead in
/// [`disambiguate_bracket`] settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketDisambiguation {
    Record,
    FieldSelection,
    FieldProjection,
}

/// Bounded lookahead over the bracketed span: scans from the current `[` to its matching `]`, tracking
/// nesting depth across all three delimiter pairs (not just `[`/`]`) so a
/// nested record or parenthesized expression's own `=`/`,` never gets
/// mistaken for one at the top level. A top-level `=` settles the question
/// in favor of `Record` outright; otherwise the top-level comma count
/// distinguishes `FieldProjection` (one or more) from `FieldSelection`
/// (none). Wrapped in a checkpoint so the scan never leaves a visible mark
/// on parse state regardless of which branch is chosen afterward.
pub fn disambiguate_bracket(state: &mut ParseState) -> ParseResult<BracketDisambiguation> {
    let checkpoint = state.checkpoint();

    debug_assert!(state.test_kind(TokenKind::LeftBracket));
    state.advance();

    let mut depth: i32 = 0;
    let mut top_level_commas = 0u32;
    let mut saw_top_level_equal = false;

    loop {
        match state.peek_kind() {
            TokenKind::LeftBracket | TokenKind::LeftParenthesis | TokenKind::LeftBrace => {
                depth += 1;
                state.advance();
            }
            TokenKind::RightBracket if depth == 0 => {
                state.advance();
                break;
            }
            TokenKind::RightBracket | TokenKind::RightParenthesis | TokenKind::RightBrace => {
                depth -= 1;
                state.advance();
            }
            TokenKind::Equal if depth == 0 => {
                saw_top_level_equal = true;
                state.advance();
            }
            TokenKind::Comma if depth == 0 => {
                top_level_commas += 1;
                state.advance();
            }
            TokenKind::Eof => break,
            _ => {
                state.advance();
            }
        }
    }

    state.restore(checkpoint);

    Ok(if saw_top_level_equal {
        BracketDisambiguation::Record
    } else if top_level_commas > 0 {
        BracketDisambiguation::FieldProjection
    } else {
        BracketDisambiguation::FieldSelection
    })
}

/// Entry point for a `[` encountered where `readPrimaryExpression` allows
/// all three candidates.
pub fn read_bracket_primary_expression(
    strategy: &dyn ParserStrategy,
    state: &mut ParseState,
) -> ParseResult<NodeId> {
    match disambiguate_bracket(state)? {
        BracketDisambiguation::Record => read_record_expression(strategy, state),
        BracketDisambiguation::FieldSelection => read_field_selector(state, true),
        BracketDisambiguation::FieldProjection => read_field_projection(state),
    }
}

/// Entry point for a `[` suffix of a recursive primary expression. A `Record` result here is a grammar error raised
/// by the caller trying to read a selector and failing on the first token
/// inside, the same way the naive parser would without a dedicated
/// "restricted" disambiguation path.
pub fn read_bracket_suffix(state: &mut ParseState) -> ParseResult<NodeId> {
    match disambiguate_bracket(state)? {
        BracketDisambiguation::FieldProjection => read_field_projection(state),
        BracketDisambiguation::Record | BracketDisambiguation::FieldSelection => {
            read_field_selector(state, true)
        }
    }
}

pub fn read_record_expression(
    strategy: &dyn ParserStrategy,
    state: &mut ParseState,
) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::RecordExpression);
    read_constant(state, TokenKind::LeftBracket)?;

    while !state.test_kind(TokenKind::RightBracket) {
        let csv_id = state.start_context(NodeKind::Csv);
        read_generalized_identifier_paired_expression(strategy, state)?;
        let had_comma = state.test_kind(TokenKind::Comma);
        if had_comma {
            read_constant(state, TokenKind::Comma)?;
        }
        state.end_context(csv_id, None);
        reject_trailing_csv_comma(state, had_comma, TokenKind::RightBracket)?;
    }

    read_constant(state, TokenKind::RightBracket)?;
    Ok(state.end_context(id, None).id)
}

/// `[field]['?']` — may also be read standalone (`allow_optional_marker`
/// true) or as the inner element of a [`read_field_projection`] list (where
/// the `?` belongs to the surrounding projection, not each selector).
fn read_field_selector(state: &mut ParseState, allow_optional_marker: bool) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::FieldSelector);
    read_constant(state, TokenKind::LeftBracket)?;
    read_generalized_identifier(state)?;
    read_constant(state, TokenKind::RightBracket)?;
    if allow_optional_marker && state.test_kind(TokenKind::QuestionMark) {
        read_constant(state, TokenKind::QuestionMark)?;
    }
    Ok(state.end_context(id, None).id)
}

/// `[a, b, c]['?']` — one or more bracketed field names, each read as an inner selector with its own
/// optional marker suppressed since the `?` only ever trails the whole
/// projection.
fn read_field_projection(state: &mut ParseState) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::FieldProjection);
    read_constant(state, TokenKind::LeftBracket)?;

    loop {
        let csv_id = state.start_context(NodeKind::Csv);
        read_field_selector(state, false)?;
        let had_comma = state.test_kind(TokenKind::Comma);
        if had_comma {
            read_constant(state, TokenKind::Comma)?;
        }
        state.end_context(csv_id, None);
        reject_trailing_csv_comma(state, had_comma, TokenKind::RightBracket)?;
        if !had_comma {
            break;
        }
    }

    read_constant(state, TokenKind::RightBracket)?;
    if state.test_kind(TokenKind::QuestionMark) {
        read_constant(state, TokenKind::QuestionMark)?;
    }
    Ok(state.end_context(id, None).id)
}

/// `[ (optional? GeneralizedIdentifier (= Type)?) ',' ... [, '...'] ]`. This `[` is never ambiguous the way
/// `read_bracket_primary_expression`'s is — a type expression's field list
/// can't be mistaken for a selector or projection, so no disambiguation
/// runs here.
pub fn read_field_specification_list(
    strategy: &dyn ParserStrategy,
    state: &mut ParseState,
    allow_open_marker: bool,
) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::FieldSpecificationList);
    read_constant(state, TokenKind::LeftBracket)?;

    loop {
        if state.test_kind(TokenKind::RightBracket) {
            break;
        }
        if state.test_kind(TokenKind::Ellipsis) {
            if !allow_open_marker {
                return Err(crate::error::ParseError::InvariantError {
                    message: "open record marker not permitted in this field specification list"
                        .into(),
                    location: Some(state.current_location()),
                });
            }
            read_constant(state, TokenKind::Ellipsis)?;
            break;
        }

        let csv_id = state.start_context(NodeKind::Csv);
        read_field_specification(strategy, state)?;
        let had_comma = state.test_kind(TokenKind::Comma);
        if had_comma {
            read_constant(state, TokenKind::Comma)?;
        }
        state.end_context(csv_id, None);

        if had_comma && state.test_kind(TokenKind::RightBracket) {
            // `, ]` with no further field and no `...`.
            return Err(crate::error::ParseError::ExpectedCsvContinuation {
                location: state.current_location(),
                locale: state.locale.clone(),
            });
        }
        if !had_comma {
            break;
        }
    }

    read_constant(state, TokenKind::RightBracket)?;
    Ok(state.end_context(id, None).id)
}

fn read_field_specification(
    strategy: &dyn ParserStrategy,
    state: &mut ParseState,
) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::FieldSpecification);

    if state.current_token().map(|t| t.text()) == Some("optional") {
        let optional_id = state.start_context(NodeKind::Constant);
        let text = state.advance();
        state.end_context(optional_id, Some(text));
    }

    read_generalized_identifier(state)?;

    if state.test_kind(TokenKind::Equal) {
        let paired_id = state.start_context(NodeKind::PairedConstant);
        read_constant(state, TokenKind::Equal)?;
        crate::grammar::type_::read_primary_type(strategy, state)?;
        state.end_context(paired_id, None);
    }

    Ok(state.end_context(id, None).id)
}
