//! `ListExpression` and the
//! `NotImplementedExpression` placeholder for a bare `...` used where an
//! expression is expected.

use crate::ast::kind::NodeKind;
use crate::ast::node::NodeId;
use crate::error::{ParseError, ParseResult};
use crate::grammar::literal::{read_constant, reject_trailing_csv_comma};
use crate::lexer::TokenKind;
use crate::state::ParseState;
use crate::strategy::ParserStrategy;

pub fn read_list_expression(
    strategy: &dyn ParserStrategy,
    state: &mut ParseState,
) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::ListExpression);
    read_constant(state, TokenKind::LeftBrace)?;

    while !state.test_kind(TokenKind::RightBrace) {
        let csv_id = state.start_context(NodeKind::Csv);
        strategy.read_expression(state)?;
        let had_comma = state.test_kind(TokenKind::Comma);
        if had_comma {
            read_constant(state, TokenKind::Comma)?;
        }
        state.end_context(csv_id, None);
        reject_trailing_csv_comma(state, had_comma, TokenKind::RightBrace)?;
    }

    read_constant(state, TokenKind::RightBrace)?;
    Ok(state.end_context(id, None).id)
}

/// `...` consumed as a `NotImplementedExpression` wherever the grammar calls
/// for an expression but finds only the not-implemented placeholder (spec
/// §4.5 readPrimaryExpression: "`...` (not-implemented)").
pub fn read_not_implemented_expression(state: &mut ParseState) -> ParseResult<NodeId> {
    if !state.test_kind(TokenKind::Ellipsis) {
        return Err(ParseError::ExpectedTokenKind {
            expected: TokenKind::Ellipsis,
            found: match state.current_token() {
                Some(t) => crate::error::Found::Token {
                    kind: t.kind,
                    text: t.text.clone(),
                },
                None => crate::error::Found::EndOfInput,
            },
            location: state.current_location(),
            locale: state.locale.clone(),
        });
    }
    let id = state.start_context(NodeKind::NotImplementedExpression);
    let ellipsis_id = state.start_context(NodeKind::Constant);
    let text = state.advance();
    state.end_context(ellipsis_id, Some(text));
    Ok(state.end_context(id, None).id)
}
