//! The two document shapes: the only other documented checkpoint/restore site
//! besides [`crate::grammar::type_::try_read_primitive_type`].

use crate::ast::kind::NodeKind;
use crate::ast::node::NodeId;
use crate::error::ParseResult;
use crate::grammar::bracket::read_record_expression;
use crate::grammar::identifier::{read_identifier, read_identifier_paired_expression};
use crate::grammar::literal::read_constant;
use crate::lexer::TokenKind;
use crate::state::ParseState;
use crate::strategy::ParserStrategy;

/// Speculatively reads an expression document (a bare expression, then
/// nothing else); on failure, rewinds completely and tries a section
/// document instead. If both fail, the error from
/// whichever attempt consumed more tokens wins,
/// since that attempt got further into a genuine parse before it broke.
pub fn read_document(strategy: &dyn ParserStrategy, state: &mut ParseState) -> ParseResult<NodeId> {
    let checkpoint = state.checkpoint();

    match read_expression_document(strategy, state) {
        Ok(id) => return Ok(id),
        Err(expression_err) => {
            state.restore(checkpoint);
            match read_section_document(strategy, state) {
                Ok(id) => Ok(id),
                Err(section_err) => {
                    if expression_err.progress() >= section_err.progress() {
                        Err(expression_err)
                    } else {
                        Err(section_err)
                    }
                }
            }
        }
    }
}

/// An expression document has no wrapper node of its own — the document's
/// root AST node *is* the expression. `assert_done_parsing` is what distinguishes this branch from
/// a section document's leading expression-shaped section member: any
/// unconsumed token after the expression fails the whole branch via
/// `UnusedTokensRemain` rather than silently accepting a partial parse.
fn read_expression_document(
    strategy: &dyn ParserStrategy,
    state: &mut ParseState,
) -> ParseResult<NodeId> {
    let id = strategy.read_expression(state)?;
    state.assert_done_parsing()?;
    Ok(id)
}

/// `[literal attributes] 'section' [name] ';' section-member*`.
fn read_section_document(
    strategy: &dyn ParserStrategy,
    state: &mut ParseState,
) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::SectionDocument);

    if state.test_kind(TokenKind::LeftBracket) {
        read_record_expression(strategy, state)?;
    }

    read_section(strategy, state)?;

    Ok(state.end_context(id, None).id)
}

fn read_section(strategy: &dyn ParserStrategy, state: &mut ParseState) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::Section);
    read_constant(state, TokenKind::Section)?;

    if matches!(state.peek_kind(), TokenKind::Identifier | TokenKind::QuotedIdentifier) {
        read_identifier(state)?;
    }

    read_constant(state, TokenKind::Semicolon)?;

    while !state.is_done() {
        read_section_member(strategy, state)?;
    }

    Ok(state.end_context(id, None).id)
}

/// `[literal attributes] ['shared'] identifier-paired-expression ';'`.
fn read_section_member(strategy: &dyn ParserStrategy, state: &mut ParseState) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::SectionMember);

    if state.test_kind(TokenKind::LeftBracket) {
        read_record_expression(strategy, state)?;
    }

    if state.test_kind(TokenKind::Shared) {
        read_constant(state, TokenKind::Shared)?;
    }

    read_identifier_paired_expression(strategy, state)?;
    read_constant(state, TokenKind::Semicolon)?;

    Ok(state.end_context(id, None).id)
}
