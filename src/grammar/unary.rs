//! `UnaryExpression`: zero or more prefix
//! operators directly above a type expression
//! ([`crate::strategy::ParserStrategy::read_type_expression`]). [`crate::strategy::CombinatorialParser`]
//! overrides this production with an LL(1) fast path that skips straight to
//! the type expression when no prefix operator is present, rather than
//! opening and immediately closing an empty wrapper context.

use crate::ast::kind::NodeKind;
use crate::ast::node::NodeId;
use crate::error::ParseResult;
use crate::grammar::literal::read_constant;
use crate::lexer::TokenKind;
use crate::state::ParseState;
use crate::strategy::ParserStrategy;

const UNARY_OPERATORS: &[TokenKind] = &[TokenKind::Plus, TokenKind::Minus, TokenKind::Not];

pub fn read_unary_expression(
    strategy: &dyn ParserStrategy,
    state: &mut ParseState,
) -> ParseResult<NodeId> {
    if !UNARY_OPERATORS.contains(&state.peek_kind()) {
        return strategy.read_type_expression(state);
    }

    let id = state.start_context(NodeKind::UnaryExpression);
    while UNARY_OPERATORS.contains(&state.peek_kind()) {
        read_constant(state, state.peek_kind())?;
    }
    strategy.read_type_expression(state)?;
    Ok(state.end_context(id, None).id)
}
