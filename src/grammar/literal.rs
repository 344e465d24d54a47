//! `LiteralExpression` and the `Constant` helper every fixed-spelling token
//! (operators, keywords, punctuation) is wrapped in.

use crate::ast::kind::NodeKind;
use crate::ast::node::NodeId;
use crate::error::{Found, ParseError, ParseResult};
use crate::lexer::TokenKind;
use crate::state::ParseState;

const LITERAL_KINDS: &[TokenKind] = &[
    TokenKind::NumericLiteral,
    TokenKind::TextLiteral,
    TokenKind::True,
    TokenKind::False,
    TokenKind::Null,
    TokenKind::HashBinary,
    TokenKind::HashDate,
    TokenKind::HashDateTime,
    TokenKind::HashDateTimeZone,
    TokenKind::HashDuration,
    TokenKind::HashTime,
];

pub fn read_literal_expression(state: &mut ParseState) -> ParseResult<NodeId> {
    if !LITERAL_KINDS.contains(&state.peek_kind()) {
        return Err(ParseError::ExpectedAnyTokenKind {
            expected: crate::error::Expectation::AnyOf(LITERAL_KINDS.to_vec()),
            found: match state.current_token() {
                Some(t) => Found::Token {
                    kind: t.kind,
                    text: t.text.clone(),
                },
                None => Found::EndOfInput,
            },
            location: state.current_location(),
            locale: state.locale.clone(),
        });
    }
    let id = state.start_context(NodeKind::LiteralExpression);
    let text = state.advance();
    Ok(state.end_context(id, Some(text)).id)
}

/// Wraps the current token in a [`NodeKind::Constant`] node after confirming
/// it matches `kind` — used for every fixed-spelling operator, keyword, and
/// punctuation mark in the grammar.
pub fn read_constant(state: &mut ParseState, kind: TokenKind) -> ParseResult<NodeId> {
    if !state.test_kind(kind) {
        return Err(ParseError::ExpectedTokenKind {
            expected: kind,
            found: match state.current_token() {
                Some(t) => Found::Token {
                    kind: t.kind,
                    text: t.text.clone(),
                },
                None => Found::EndOfInput,
            },
            location: state.current_location(),
            locale: state.locale.clone(),
        });
    }
    let id = state.start_context(NodeKind::Constant);
    let text = state.advance();
    Ok(state.end_context(id, Some(text)).id)
}

/// Raises `ExpectedCsvContinuation` when a comma was just consumed but the
/// next token is the list's closer with no further item behind it. Shared by every comma-separated-value
/// reader except `readFieldSpecificationList`, which has its own
/// open-record-marker exception built into its own loop.
pub fn reject_trailing_csv_comma(
    state: &ParseState,
    had_comma: bool,
    closer: TokenKind,
) -> ParseResult<()> {
    if had_comma && state.test_kind(closer) {
        Err(ParseError::ExpectedCsvContinuation {
            location: state.current_location(),
            locale: state.locale.clone(),
        })
    } else {
        Ok(())
    }
}

pub fn read_constant_any(state: &mut ParseState, kinds: &[TokenKind]) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::Constant);
    let text = state.expect_any_kind(kinds).inspect_err(|_| {
        state.delete_context(id);
    })?;
    Ok(state.end_context(id, Some(text)).id)
}
