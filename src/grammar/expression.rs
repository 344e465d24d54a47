//! Top-level expression dispatch: keyword-led
//! flow-control expressions short-circuit straight to their own production;
//! everything else enters the BinOp ladder at its loosest level.

use crate::ast::node::NodeId;
use crate::error::ParseResult;
use crate::grammar::flow;
use crate::lexer::TokenKind;
use crate::state::ParseState;
use crate::strategy::ParserStrategy;

pub fn read_expression(strategy: &dyn ParserStrategy, state: &mut ParseState) -> ParseResult<NodeId> {
    state.with_recursion_guard(|state| match state.peek_kind() {
        TokenKind::If => flow::read_if_expression(strategy, state),
        TokenKind::Let => flow::read_let_expression(strategy, state),
        TokenKind::Each => flow::read_each_expression(strategy, state),
        TokenKind::Error => flow::read_error_raising_expression(strategy, state),
        TokenKind::Try => flow::read_error_handling_expression(strategy, state),
        _ => strategy.read_null_coalescing_expression(state),
    })
}
