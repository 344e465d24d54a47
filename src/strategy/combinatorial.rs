//! The flat alternative to [`super::NaiveParser`]: the same eight
//! named BinOp productions plus unary, but climbed with one recursive
//! function over a precedence table instead of separate `grammar::*`
//! functions calling each other through the vtable. `Logical` and
//! `Arithmetic` each expand to two table rows (their `or`/`and` and
//! additive/multiplicative tiers — see `grammar::binop`'s module doc),
//! so the table has ten rows for eight named levels. Produces identical
//! trees to the naive ladder — same [`NodeKind`] wrappers, same
//! left-associativity, same `is`/`as` asymmetric right-hand side — just
//! with fewer stack frames between a `NullCoalescingExpression` and the
//! primary expression at its core.

use crate::ast::kind::NodeKind;
use crate::ast::node::NodeId;
use crate::error::ParseResult;
use crate::grammar::binop::{read_left_assoc_binop, read_left_assoc_binop_asym};
use crate::grammar::type_::read_nullable_primitive_type;
use crate::lexer::TokenKind;
use crate::state::ParseState;
use crate::strategy::ParserStrategy;

/// Whether a level's operator takes another expression on its right (every
/// level but two) or a type (`is`, `as`).
enum Rhs {
    Expression,
    Type,
}

struct Level {
    kind: NodeKind,
    operators: &'static [TokenKind],
    rhs: Rhs,
}

/// Loosest to tightest, matching [`crate::grammar::binop`]'s level order
/// exactly. `read_binop_level` walks this table by index instead of calling
/// a named function per level.
const LEVELS: &[Level] = &[
    Level {
        kind: NodeKind::NullCoalescingExpression,
        operators: &[TokenKind::NullCoalescingOperator],
        rhs: Rhs::Expression,
    },
    Level {
        kind: NodeKind::LogicalExpression,
        operators: &[TokenKind::Or],
        rhs: Rhs::Expression,
    },
    Level {
        kind: NodeKind::LogicalExpression,
        operators: &[TokenKind::And],
        rhs: Rhs::Expression,
    },
    Level {
        kind: NodeKind::IsExpression,
        operators: &[TokenKind::Is],
        rhs: Rhs::Type,
    },
    Level {
        kind: NodeKind::AsExpression,
        operators: &[TokenKind::As],
        rhs: Rhs::Type,
    },
    Level {
        kind: NodeKind::EqualityExpression,
        operators: &[TokenKind::Equal, TokenKind::NotEqual],
        rhs: Rhs::Expression,
    },
    Level {
        kind: NodeKind::RelationalExpression,
        operators: &[
            TokenKind::LessThan,
            TokenKind::LessThanEqualTo,
            TokenKind::GreaterThan,
            TokenKind::GreaterThanEqualTo,
        ],
        rhs: Rhs::Expression,
    },
    Level {
        kind: NodeKind::ArithmeticExpression,
        operators: &[TokenKind::Plus, TokenKind::Minus, TokenKind::Ampersand],
        rhs: Rhs::Expression,
    },
    Level {
        kind: NodeKind::ArithmeticExpression,
        operators: &[TokenKind::Asterisk, TokenKind::Division],
        rhs: Rhs::Expression,
    },
    Level {
        kind: NodeKind::MetadataExpression,
        operators: &[TokenKind::Meta],
        rhs: Rhs::Expression,
    },
];

const UNARY_OPERATORS: &[TokenKind] = &[TokenKind::Plus, TokenKind::Minus, TokenKind::Not];

#[derive(Debug, Default, Clone, Copy)]
pub struct CombinatorialParser;

impl CombinatorialParser {
    /// Reads `LEVELS[index..]` then, once the table runs out, the unary
    /// expression at the bottom of the ladder. Each level that recurses into
    /// "the next tighter level" does so by incrementing `index` rather than
    /// naming the next function, which is the whole point of flattening it.
    fn read_binop_level(&self, state: &mut ParseState, index: usize) -> ParseResult<NodeId> {
        let Some(level) = LEVELS.get(index) else {
            return self.read_unary_flat(state);
        };

        match level.rhs {
            Rhs::Expression => read_left_assoc_binop(state, level.kind, level.operators, |s| {
                self.read_binop_level(s, index + 1)
            }),
            Rhs::Type => read_left_assoc_binop_asym(
                state,
                level.kind,
                level.operators,
                |s| self.read_binop_level(s, index + 1),
                read_nullable_primitive_type,
            ),
        }
    }

    /// LL(1): no prefix operator means no `UnaryExpression` wrapper at all,
    /// straight through to the type expression.
    fn read_unary_flat(&self, state: &mut ParseState) -> ParseResult<NodeId> {
        if !UNARY_OPERATORS.contains(&state.peek_kind()) {
            return self.read_type_expression(state);
        }

        let id = state.start_context(NodeKind::UnaryExpression);
        while UNARY_OPERATORS.contains(&state.peek_kind()) {
            crate::grammar::literal::read_constant(state, state.peek_kind())?;
        }
        self.read_type_expression(state)?;
        Ok(state.end_context(id, None).id)
    }
}

impl ParserStrategy for CombinatorialParser {
    fn read_null_coalescing_expression(&self, state: &mut ParseState) -> ParseResult<NodeId> {
        self.read_binop_level(state, 0)
    }

    fn read_logical_expression(&self, state: &mut ParseState) -> ParseResult<NodeId> {
        self.read_binop_level(state, 1)
    }

    fn read_is_expression(&self, state: &mut ParseState) -> ParseResult<NodeId> {
        self.read_binop_level(state, 3)
    }

    fn read_as_expression(&self, state: &mut ParseState) -> ParseResult<NodeId> {
        self.read_binop_level(state, 4)
    }

    fn read_equality_expression(&self, state: &mut ParseState) -> ParseResult<NodeId> {
        self.read_binop_level(state, 5)
    }

    fn read_relational_expression(&self, state: &mut ParseState) -> ParseResult<NodeId> {
        self.read_binop_level(state, 6)
    }

    fn read_arithmetic_expression(&self, state: &mut ParseState) -> ParseResult<NodeId> {
        self.read_binop_level(state, 7)
    }

    fn read_metadata_expression(&self, state: &mut ParseState) -> ParseResult<NodeId> {
        self.read_binop_level(state, 9)
    }

    fn read_unary_expression(&self, state: &mut ParseState) -> ParseResult<NodeId> {
        self.read_unary_flat(state)
    }
}
