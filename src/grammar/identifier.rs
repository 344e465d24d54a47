//! Identifiers and identifier-paired productions.

use crate::ast::kind::NodeKind;
use crate::ast::node::NodeId;
use crate::error::{Found, ParseError, ParseResult};
use crate::lexer::{self, TokenKind};
use crate::state::ParseState;
use crate::strategy::ParserStrategy;

pub fn read_identifier(state: &mut ParseState) -> ParseResult<NodeId> {
    if !matches!(state.peek_kind(), TokenKind::Identifier | TokenKind::QuotedIdentifier) {
        return Err(ParseError::ExpectedAnyTokenKind {
            expected: crate::error::Expectation::AnyOf(vec![
                TokenKind::Identifier,
                TokenKind::QuotedIdentifier,
            ]),
            found: found(state),
            location: state.current_location(),
            locale: state.locale.clone(),
        });
    }
    let id = state.start_context(NodeKind::Identifier);
    let text = state.advance();
    Ok(state.end_context(id, Some(text)).id)
}

/// A generalized identifier spans one or more identifier/keyword tokens (and
/// the inter-token whitespace between them) rather than a single token, so
/// its text is recovered from the original source buffer by token-range
/// slicing instead of concatenating token texts.
pub fn read_generalized_identifier(state: &mut ParseState) -> ParseResult<NodeId> {
    let start_index = state.token_index();
    let start_location = state.current_location();
    if state.is_done() {
        return Err(ParseError::ExpectedGeneralizedIdentifier {
            found: found(state),
            location: start_location,
            locale: state.locale.clone(),
        });
    }

    let mut end_location = start_location;
    loop {
        match state.current_token() {
            Some(t) if is_generalized_identifier_member(t.kind) => {
                end_location = t.end;
                state.advance();
            }
            _ => break,
        }
    }

    if state.token_index() == start_index {
        return Err(ParseError::ExpectedGeneralizedIdentifier {
            found: found(state),
            location: start_location,
            locale: state.locale.clone(),
        });
    }

    let text = state.lexer().slice(start_location, end_location);
    if !lexer::looks_like_generalized_identifier(text) {
        return Err(ParseError::ExpectedGeneralizedIdentifier {
            found: found(state),
            location: start_location,
            locale: state.locale.clone(),
        });
    }

    let id = state.start_context(NodeKind::GeneralizedIdentifier);
    let owned: Box<str> = text.into();
    Ok(state.end_context(id, Some(owned)).id)
}

pub fn read_identifier_expression(
    strategy: &dyn ParserStrategy,
    state: &mut ParseState,
) -> ParseResult<NodeId> {
    let _ = strategy;
    let id = state.start_context(NodeKind::IdentifierExpression);
    if state.test_kind(TokenKind::At) {
        super::literal::read_constant(state, TokenKind::At)?;
    }
    read_identifier(state)?;
    Ok(state.end_context(id, None).id)
}

pub fn read_keyword_expression(state: &mut ParseState) -> ParseResult<NodeId> {
    const HASH_KEYWORDS: &[TokenKind] = &[
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
    let id = state.start_context(NodeKind::KeywordExpression);
    super::literal::read_constant_any(state, HASH_KEYWORDS)?;
    Ok(state.end_context(id, None).id)
}

pub fn read_identifier_paired_expression(
    strategy: &dyn ParserStrategy,
    state: &mut ParseState,
) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::IdentifierPairedExpression);
    read_identifier(state)?;
    super::literal::read_constant(state, TokenKind::Equal)?;
    strategy.read_expression(state)?;
    Ok(state.end_context(id, None).id)
}

pub fn read_generalized_identifier_paired_expression(
    strategy: &dyn ParserStrategy,
    state: &mut ParseState,
) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::GeneralizedIdentifierPairedExpression);
    read_generalized_identifier(state)?;
    super::literal::read_constant(state, TokenKind::Equal)?;
    strategy.read_expression(state)?;
    Ok(state.end_context(id, None).id)
}

/// Token kinds that can appear inside a generalized identifier's greedy run
///.
fn is_generalized_identifier_member(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Identifier | TokenKind::QuotedIdentifier)
        || keyword_or_reserved_word(kind)
}

fn keyword_or_reserved_word(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::And
            | TokenKind::As
            | TokenKind::Each
            | TokenKind::Else
            | TokenKind::Error
            | TokenKind::False
            | TokenKind::If
            | TokenKind::In
            | TokenKind::Is
            | TokenKind::Let
            | TokenKind::Meta
            | TokenKind::Not
            | TokenKind::Null
            | TokenKind::Or
            | TokenKind::Otherwise
            | TokenKind::Section
            | TokenKind::Shared
            | TokenKind::Then
            | TokenKind::True
            | TokenKind::Try
            | TokenKind::Type
    )
}

fn found(state: &ParseState) -> Found {
    match state.current_token() {
        Some(t) => Found::Token {
            kind: t.kind,
            text: t.text.clone(),
        },
        None => Found::EndOfInput,
    }
}
