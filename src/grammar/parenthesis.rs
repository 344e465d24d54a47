//! The two-way `(` disambiguator:
//! `ParenthesizedExpression` vs `FunctionExpression`, told apart by whether
//! the matching `)` is followed by `=>` (optionally via `as <type>` first).

use crate::ast::kind::NodeKind;
use crate::ast::node::NodeId;
use crate::error::ParseResult;
use crate::grammar::flow::read_function_expression;
use crate::grammar::literal::read_constant;
use crate::lexer::TokenKind;
use crate::state::ParseState;
use crate::strategy::ParserStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenthesisDisambiguation {
    ParenthesizedExpression,
    FunctionExpression,
}

/// Scans from the current `(` to its matching `)` (tracking nesting across
/// all three delimiter pairs, as [`crate::grammar::bracket::disambiguate_bracket`]
/// does) and inspects what follows it: `=>`, or `as <nullable-primitive-type>
/// =>`, commits to [`ParenthesisDisambiguation::FunctionExpression`];
/// anything else falls back to a plain parenthesized expression. The scan
/// runs under a checkpoint so it
/// never advances the real cursor.
pub fn disambiguate_parenthesis(state: &mut ParseState) -> ParseResult<ParenthesisDisambiguation> {
    let checkpoint = state.checkpoint();

    debug_assert!(state.test_kind(TokenKind::LeftParenthesis));
    state.advance();

    let mut depth: i32 = 0;
    loop {
        match state.peek_kind() {
            TokenKind::LeftBracket | TokenKind::LeftParenthesis | TokenKind::LeftBrace => {
                depth += 1;
                state.advance();
            }
            TokenKind::RightParenthesis if depth == 0 => {
                state.advance();
                break;
            }
            TokenKind::RightBracket | TokenKind::RightParenthesis | TokenKind::RightBrace => {
                depth -= 1;
                state.advance();
            }
            TokenKind::Eof => break,
            _ => {
                state.advance();
            }
        }
    }

    // Optionally skip `as <nullable-primitive-type>` before the `=>` check —
    // a parameter list's trailing return-type annotation is itself only
    // legal on the function-expression branch, but it still sits between
    // the closing `)` and the `=>` that settles the question.
    if state.test_kind(TokenKind::As) {
        state.advance();
        if state.current_token().map(|t| t.text()) == Some("nullable") {
            state.advance();
        }
        if matches!(state.peek_kind(), TokenKind::Identifier | TokenKind::Type | TokenKind::Null) {
            state.advance();
        }
    }

    let disambiguation = if state.test_kind(TokenKind::FatArrow) {
        ParenthesisDisambiguation::FunctionExpression
    } else {
        ParenthesisDisambiguation::ParenthesizedExpression
    };

    state.restore(checkpoint);
    Ok(disambiguation)
}

pub fn read_parenthesis_disambiguated_expression(
    strategy: &dyn ParserStrategy,
    state: &mut ParseState,
) -> ParseResult<NodeId> {
    match disambiguate_parenthesis(state)? {
        ParenthesisDisambiguation::FunctionExpression => read_function_expression(strategy, state),
        ParenthesisDisambiguation::ParenthesizedExpression => {
            read_parenthesized_expression(strategy, state)
        }
    }
}

pub fn read_parenthesized_expression(
    strategy: &dyn ParserStrategy,
    state: &mut ParseState,
) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::ParenthesizedExpression);
    read_constant(state, TokenKind::LeftParenthesis)?;
    strategy.read_expression(state)?;
    read_constant(state, TokenKind::RightParenthesis)?;
    Ok(state.end_context(id, None).id)
}
