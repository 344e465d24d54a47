//! `PrimaryExpression` and the recursive
//! primary reparenting it triggers once one or more `(`/`{`/`[` suffixes
//! follow the head.

use crate::ast::kind::NodeKind;
use crate::ast::node::NodeId;
use crate::error::ParseResult;
use crate::grammar::literal::{read_constant, reject_trailing_csv_comma};
use crate::grammar::{bracket, identifier, list, literal, parenthesis};
use crate::lexer::TokenKind;
use crate::state::ParseState;
use crate::strategy::ParserStrategy;

const HASH_KEYWORD_TOKENS: &[TokenKind] = &[
    TokenKind::HashSection,
    TokenKind::HashShared,
    TokenKind::HashBinary,
    TokenKind::HashDate,
    TokenKind::HashDateTime,
    TokenKind::HashDateTimeZone,
    TokenKind::HashDuration,
    TokenKind::HashTable,
    TokenKind::HashTime,
];

/// LL(1) over the leading token: `@`/
/// identifier, `(`, `[` (all three ambiguous candidates), `{`, `...`, the
/// nine `#`-prefixed keyword literals, otherwise a plain literal. After the
/// head is read, a trailing `(`/`{`/`[` hands the result to
/// [`read_recursive_primary_expression`] instead of returning it directly.
pub fn read_primary_expression(
    strategy: &dyn ParserStrategy,
    state: &mut ParseState,
) -> ParseResult<NodeId> {
    let head = match state.peek_kind() {
        TokenKind::At | TokenKind::Identifier | TokenKind::QuotedIdentifier => {
            identifier::read_identifier_expression(strategy, state)?
        }
        TokenKind::LeftParenthesis => {
            parenthesis::read_parenthesis_disambiguated_expression(strategy, state)?
        }
        TokenKind::LeftBracket => bracket::read_bracket_primary_expression(strategy, state)?,
        TokenKind::LeftBrace => list::read_list_expression(strategy, state)?,
        TokenKind::Ellipsis => list::read_not_implemented_expression(state)?,
        kind if HASH_KEYWORD_TOKENS.contains(&kind) => identifier::read_keyword_expression(state)?,
        _ => literal::read_literal_expression(state)?,
    };

    if matches!(
        state.peek_kind(),
        TokenKind::LeftParenthesis | TokenKind::LeftBrace | TokenKind::LeftBracket
    ) {
        read_recursive_primary_expression(strategy, state, head)
    } else {
        Ok(head)
    }
}

/// Reshapes `head` (already a completed node) into the sole child of a
/// freshly synthesized `RecursivePrimaryExpression`, then reads one or more
/// invoke/item-access/field-access suffixes under an `ArrayWrapper` child of
/// that same node. The five-step detach/attach/renumber contract
/// is spelled out there; each numbered comment below names the step it
/// implements.
fn read_recursive_primary_expression(
    strategy: &dyn ParserStrategy,
    state: &mut ParseState,
    head: NodeId,
) -> ParseResult<NodeId> {
    let head_start = state
        .id_map()
        .ast_node(head)
        .expect("read_primary_expression always returns a completed node")
        .token_range
        .start;

    // Step 1 + 2: `start_context` makes the wrapper a child of whatever
    // context `head` was just closed under; `reparent` then detaches `head`
    // from that same parent and makes it the wrapper's own first child.
    let wrapper = state.start_context(NodeKind::RecursivePrimaryExpression);
    state.id_map_mut().reparent(head, wrapper);

    // Step 3 + 4: the wrapper's span must cover `head`, and its attribute
    // counter must already reflect the one child it was just given.
    if let Some(ctx) = state.id_map_mut().context_node_mut(wrapper) {
        ctx.start_token_index = head_start;
        ctx.attribute_counter = 1;
    }

    // Step 5: `wrapper` was minted after `head` completed, so its id is
    // currently *larger* than `head`'s — inverted from the usual
    // parent-opened-before-child ordering. Renumbering the subtree rooted
    // at `wrapper` (just `wrapper` and `head` so far) restores that
    // ordering before any suffix reads extend it further.
    let wrapper = state.renumber_subtree(wrapper);

    // Step 6: suffixes live under their own `ArrayWrapper` context, not
    // directly under the `RecursivePrimaryExpression` itself.
    let array_wrapper = state.start_context(NodeKind::ArrayWrapper);
    loop {
        match state.peek_kind() {
            TokenKind::LeftParenthesis => {
                read_invoke_expression(strategy, state)?;
            }
            TokenKind::LeftBrace => {
                read_item_access_expression(strategy, state)?;
            }
            TokenKind::LeftBracket => {
                bracket::read_bracket_suffix(state)?;
            }
            _ => break,
        }
    }
    state.end_context(array_wrapper, None);

    Ok(state.end_context(wrapper, None).id)
}

fn read_invoke_expression(strategy: &dyn ParserStrategy, state: &mut ParseState) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::InvokeExpression);
    read_constant(state, TokenKind::LeftParenthesis)?;

    while !state.test_kind(TokenKind::RightParenthesis) {
        let csv_id = state.start_context(NodeKind::Csv);
        strategy.read_expression(state)?;
        let had_comma = state.test_kind(TokenKind::Comma);
        if had_comma {
            read_constant(state, TokenKind::Comma)?;
        }
        state.end_context(csv_id, None);
        reject_trailing_csv_comma(state, had_comma, TokenKind::RightParenthesis)?;
    }

    read_constant(state, TokenKind::RightParenthesis)?;
    Ok(state.end_context(id, None).id)
}

fn read_item_access_expression(
    strategy: &dyn ParserStrategy,
    state: &mut ParseState,
) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::ItemAccessExpression);
    read_constant(state, TokenKind::LeftBrace)?;
    strategy.read_expression(state)?;
    read_constant(state, TokenKind::RightBrace)?;
    if state.test_kind(TokenKind::QuestionMark) {
        read_constant(state, TokenKind::QuestionMark)?;
    }
    Ok(state.end_context(id, None).id)
}
