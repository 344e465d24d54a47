//! Type expressions.
//! `try_read_primitive_type` is one of the two documented checkpoint/restore
//! sites: it optimistically opens a `PrimitiveType` context,
//! consumes the identifier, and restores if the text doesn't match the fixed
//! name set, instead of hand-unwinding the context it opened.

use crate::ast::kind::NodeKind;
use crate::ast::node::NodeId;
use crate::error::{Found, ParseError, ParseResult};
use crate::grammar::literal::read_constant;
use crate::grammar::parameter::read_parameter_list;
use crate::lexer::{self, TokenKind};
use crate::state::ParseState;
use crate::strategy::ParserStrategy;

/// `type-expression = primary-expression | 'type' primary-type`, the layer
/// [`crate::grammar::unary::read_unary_expression`] delegates to rather than
/// calling [`crate::strategy::ParserStrategy::read_primary_expression`]
/// directly. Without the leading `type` keyword this is a straight
/// pass-through to the primary expression, same as `UnaryExpression` only
/// wraps when a prefix operator is actually present.
pub fn read_type_expression(strategy: &dyn ParserStrategy, state: &mut ParseState) -> ParseResult<NodeId> {
    if state.peek_kind() != TokenKind::Type {
        return strategy.read_primary_expression(state);
    }

    let id = state.start_context(NodeKind::TypeExpression);
    let type_id = state.start_context(NodeKind::Constant);
    let text = state.advance();
    state.end_context(type_id, Some(text));
    read_primary_type(strategy, state)?;
    Ok(state.end_context(id, None).id)
}

/// The `PrimaryType` alternation: primitive, list, record,
/// table, function, or nullable. Chosen purely by the leading token, so no
/// backtracking is needed here even though [`try_read_primitive_type`] below
/// does backtrack internally for the primitive-name check.
pub fn read_primary_type(strategy: &dyn ParserStrategy, state: &mut ParseState) -> ParseResult<NodeId> {
    match state.peek_kind() {
        TokenKind::LeftBracket => read_record_type(strategy, state),
        TokenKind::LeftBrace => read_list_type(strategy, state),
        TokenKind::Identifier if state.current_token().map(|t| t.text()) == Some("nullable") => {
            read_nullable_type(strategy, state)
        }
        TokenKind::Identifier if state.current_token().map(|t| t.text()) == Some("table") => {
            read_table_type(strategy, state)
        }
        TokenKind::Identifier if state.current_token().map(|t| t.text()) == Some("function") => {
            read_function_type(strategy, state)
        }
        _ => try_read_primitive_type(state),
    }
}

/// `['nullable'] primitive-type`.
pub fn read_nullable_primitive_type(state: &mut ParseState) -> ParseResult<NodeId> {
    if state.current_token().map(|t| t.text()) == Some("nullable") {
        let id = state.start_context(NodeKind::NullablePrimitiveType);
        let nullable_id = state.start_context(NodeKind::Constant);
        let text = state.advance();
        state.end_context(nullable_id, Some(text));
        try_read_primitive_type(state)?;
        return Ok(state.end_context(id, None).id);
    }
    try_read_primitive_type(state)
}

/// `'as' nullable-primitive-type`, wrapped in a [`NodeKind::PairedConstant`]
///.
pub fn read_as_nullable_primitive_type(state: &mut ParseState) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::PairedConstant);
    read_constant(state, TokenKind::As)?;
    read_nullable_primitive_type(state)?;
    Ok(state.end_context(id, None).id)
}

/// The two documented checkpoint/restore sites are this function
/// and `readDocument`'s expression-vs-section race. A fixed name set is checked only after the identifier has already been
/// tentatively consumed into a freshly opened context; on mismatch the
/// checkpoint is restored rather than the context manually deleted, so this
/// function reads the same whether or not it happens to be nested inside
/// another speculative attempt.
pub fn try_read_primitive_type(state: &mut ParseState) -> ParseResult<NodeId> {
    let checkpoint = state.checkpoint();
    let id = state.start_context(NodeKind::PrimitiveType);

    let is_candidate = matches!(state.peek_kind(), TokenKind::Identifier | TokenKind::Type | TokenKind::Null);
    if !is_candidate {
        let found = found(state);
        let location = state.current_location();
        let locale = state.locale.clone();
        state.restore(checkpoint);
        return Err(ParseError::InvalidPrimitiveType {
            text: match found {
                Found::Token { text, .. } => text,
                Found::EndOfInput => "".into(),
            },
            location,
            locale,
        });
    }

    let text = state.advance();
    let is_valid = lexer::PRIMITIVE_TYPE_NAMES.contains(&&*text) || &*text == "type" || &*text == "null";
    if !is_valid {
        let location = state.current_location();
        let locale = state.locale.clone();
        state.restore(checkpoint);
        return Err(ParseError::InvalidPrimitiveType {
            text,
            location,
            locale,
        });
    }

    Ok(state.end_context(id, Some(text)).id)
}

pub fn read_list_type(strategy: &dyn ParserStrategy, state: &mut ParseState) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::ListType);
    read_constant(state, TokenKind::LeftBrace)?;
    read_primary_type(strategy, state)?;
    read_constant(state, TokenKind::RightBrace)?;
    Ok(state.end_context(id, None).id)
}

pub fn read_record_type(strategy: &dyn ParserStrategy, state: &mut ParseState) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::RecordType);
    crate::grammar::bracket::read_field_specification_list(strategy, state, true)?;
    Ok(state.end_context(id, None).id)
}

/// `'table' ['[' row-type ']']`.
pub fn read_table_type(strategy: &dyn ParserStrategy, state: &mut ParseState) -> ParseResult<NodeId> {
    if state.peek_kind_at(1) != TokenKind::LeftBracket {
        return try_read_primitive_type(state);
    }
    let id = state.start_context(NodeKind::TableType);
    let table_id = state.start_context(NodeKind::Constant);
    let text = state.advance();
    state.end_context(table_id, Some(text));
    read_record_type(strategy, state)?;
    Ok(state.end_context(id, None).id)
}

/// `'function' '(' parameters ')' 'as' nullable-primitive-type`.
pub fn read_function_type(strategy: &dyn ParserStrategy, state: &mut ParseState) -> ParseResult<NodeId> {
    if state.peek_kind_at(1) != TokenKind::LeftParenthesis {
        return try_read_primitive_type(state);
    }
    let id = state.start_context(NodeKind::FunctionType);
    let function_id = state.start_context(NodeKind::Constant);
    let text = state.advance();
    state.end_context(function_id, Some(text));
    read_parameter_list(state)?;
    read_as_nullable_primitive_type(state)?;
    Ok(state.end_context(id, None).id)
}

pub fn read_nullable_type(strategy: &dyn ParserStrategy, state: &mut ParseState) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::NullableType);
    let nullable_id = state.start_context(NodeKind::Constant);
    let text = state.advance();
    state.end_context(nullable_id, Some(text));
    read_primary_type(strategy, state)?;
    Ok(state.end_context(id, None).id)
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
