//! Flow-control and function expressions.

use crate::ast::kind::NodeKind;
use crate::ast::node::NodeId;
use crate::error::ParseResult;
use crate::grammar::identifier::read_generalized_identifier_paired_expression;
use crate::grammar::literal::read_constant;
use crate::grammar::parameter::read_parameter_list;
use crate::grammar::type_::read_as_nullable_primitive_type;
use crate::lexer::TokenKind;
use crate::state::ParseState;
use crate::strategy::ParserStrategy;

pub fn read_if_expression(
    strategy: &dyn ParserStrategy,
    state: &mut ParseState,
) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::IfExpression);
    read_constant(state, TokenKind::If)?;
    strategy.read_expression(state)?;
    read_constant(state, TokenKind::Then)?;
    strategy.read_expression(state)?;
    read_constant(state, TokenKind::Else)?;
    strategy.read_expression(state)?;
    Ok(state.end_context(id, None).id)
}

pub fn read_let_expression(
    strategy: &dyn ParserStrategy,
    state: &mut ParseState,
) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::LetExpression);
    read_constant(state, TokenKind::Let)?;
    read_generalized_identifier_paired_expression(strategy, state)?;
    while state.test_kind(TokenKind::Comma) {
        read_constant(state, TokenKind::Comma)?;
        read_generalized_identifier_paired_expression(strategy, state)?;
    }
    read_constant(state, TokenKind::In)?;
    strategy.read_expression(state)?;
    Ok(state.end_context(id, None).id)
}

pub fn read_each_expression(
    strategy: &dyn ParserStrategy,
    state: &mut ParseState,
) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::EachExpression);
    read_constant(state, TokenKind::Each)?;
    strategy.read_expression(state)?;
    Ok(state.end_context(id, None).id)
}

pub fn read_error_raising_expression(
    strategy: &dyn ParserStrategy,
    state: &mut ParseState,
) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::ErrorRaisingExpression);
    read_constant(state, TokenKind::Error)?;
    strategy.read_expression(state)?;
    Ok(state.end_context(id, None).id)
}

/// `try <expr> [otherwise <expr>]`.
/// The trailing `otherwise` clause is optional; a bare `try <expr>` is still
/// a complete `ErrorHandlingExpression` with no `OtherwiseExpression` child.
pub fn read_error_handling_expression(
    strategy: &dyn ParserStrategy,
    state: &mut ParseState,
) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::ErrorHandlingExpression);
    read_constant(state, TokenKind::Try)?;
    strategy.read_expression(state)?;
    if state.test_kind(TokenKind::Otherwise) {
        let otherwise_id = state.start_context(NodeKind::OtherwiseExpression);
        read_constant(state, TokenKind::Otherwise)?;
        strategy.read_expression(state)?;
        state.end_context(otherwise_id, None);
    }
    Ok(state.end_context(id, None).id)
}

/// `(parameters) [as type] => expression`,
/// reached only after [`crate::grammar::parenthesis`]'s two-way
/// disambiguator has already committed to this shape.
pub fn read_function_expression(
    strategy: &dyn ParserStrategy,
    state: &mut ParseState,
) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::FunctionExpression);
    read_parameter_list(state)?;
    if state.test_kind(TokenKind::As) {
        read_as_nullable_primitive_type(state)?;
    }
    read_constant(state, TokenKind::FatArrow)?;
    strategy.read_expression(state)?;
    Ok(state.end_context(id, None).id)
}
