//! `ParameterList`/`Parameter`.
//! Enforces the rule that once one parameter is marked `optional`, every
//! parameter after it must be too.

use crate::ast::kind::NodeKind;
use crate::ast::node::NodeId;
use crate::error::{ParseError, ParseResult};
use crate::grammar::identifier::read_identifier;
use crate::grammar::literal::{read_constant, reject_trailing_csv_comma};
use crate::grammar::type_::read_as_nullable_primitive_type;
use crate::lexer::TokenKind;
use crate::state::ParseState;

pub fn read_parameter_list(state: &mut ParseState) -> ParseResult<NodeId> {
    let id = state.start_context(NodeKind::ParameterList);
    read_constant(state, TokenKind::LeftParenthesis)?;

    let mut seen_optional = false;
    while !state.test_kind(TokenKind::RightParenthesis) {
        let csv_id = state.start_context(NodeKind::Csv);
        let (_, is_optional) = read_parameter(state)?;

        if seen_optional && !is_optional {
            return Err(ParseError::RequiredParameterAfterOptional {
                location: state.current_location(),
                locale: state.locale.clone(),
            });
        }
        seen_optional |= is_optional;

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

/// Returns the new parameter's id alongside whether it carried an `optional`
/// marker, so [`read_parameter_list`] can enforce the ordering invariant
/// without re-reading the just-closed node back out of the id map.
fn read_parameter(state: &mut ParseState) -> ParseResult<(NodeId, bool)> {
    let id = state.start_context(NodeKind::Parameter);

    let is_optional = state.current_token().map(|t| t.text()) == Some("optional");
    if is_optional {
        let optional_id = state.start_context(NodeKind::Constant);
        let text = state.advance();
        state.end_context(optional_id, Some(text));
    }

    read_identifier(state)?;

    if state.test_kind(TokenKind::As) {
        read_as_nullable_primitive_type(state)?;
    }

    Ok((state.end_context(id, None).id, is_optional))
}
