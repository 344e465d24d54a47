//! The strategy seam. Realized here as a trait with
//! one method per production and vtable dispatch (`&dyn ParserStrategy`)
//! rather than a table of function pointers — the idiomatic Rust choice the
//! spec itself anticipates, and the one that lets [`CombinatorialParser`]
//! override exactly the eight methods its flat reader changes while every
//! other production falls through to [`NaiveParser`]'s defaults unchanged.

pub mod combinatorial;
pub mod naive;

use crate::ast::node::NodeId;
use crate::error::ParseResult;
use crate::grammar;
use crate::state::ParseState;

pub use combinatorial::CombinatorialParser;
pub use naive::NaiveParser;

/// One method per grammar production that recurses into another production.
/// Leaf-only productions (identifiers, literals, constants) are not part of
/// this trait: nothing ever needs to override how an identifier is read, so
/// `grammar::identifier::read_identifier` is called directly wherever it's
/// needed instead of being routed through a vtable call for no reason.
pub trait ParserStrategy {
    // --- BinOp ladder: naive's one true override point ----------

    fn read_null_coalescing_expression(&self, state: &mut ParseState) -> ParseResult<NodeId> {
        grammar::binop::read_null_coalescing_expression(self, state)
    }

    fn read_logical_expression(&self, state: &mut ParseState) -> ParseResult<NodeId> {
        grammar::binop::read_logical_expression(self, state)
    }

    fn read_is_expression(&self, state: &mut ParseState) -> ParseResult<NodeId> {
        grammar::binop::read_is_expression(self, state)
    }

    fn read_as_expression(&self, state: &mut ParseState) -> ParseResult<NodeId> {
        grammar::binop::read_as_expression(self, state)
    }

    fn read_equality_expression(&self, state: &mut ParseState) -> ParseResult<NodeId> {
        grammar::binop::read_equality_expression(self, state)
    }

    fn read_relational_expression(&self, state: &mut ParseState) -> ParseResult<NodeId> {
        grammar::binop::read_relational_expression(self, state)
    }

    fn read_arithmetic_expression(&self, state: &mut ParseState) -> ParseResult<NodeId> {
        grammar::binop::read_arithmetic_expression(self, state)
    }

    fn read_metadata_expression(&self, state: &mut ParseState) -> ParseResult<NodeId> {
        grammar::binop::read_metadata_expression(self, state)
    }

    fn read_unary_expression(&self, state: &mut ParseState) -> ParseResult<NodeId> {
        grammar::unary::read_unary_expression(self, state)
    }

    // --- Everything below this line is never overridden by either strategy
    // shipped in this crate, but still goes through `&dyn ParserStrategy` so
    // a third-party strategy could intervene anywhere the grammar recurses.

    fn read_expression(&self, state: &mut ParseState) -> ParseResult<NodeId> {
        grammar::expression::read_expression(self, state)
    }

    fn read_type_expression(&self, state: &mut ParseState) -> ParseResult<NodeId> {
        grammar::type_::read_type_expression(self, state)
    }

    fn read_primary_expression(&self, state: &mut ParseState) -> ParseResult<NodeId> {
        grammar::primary::read_primary_expression(self, state)
    }
}
