//! The generic node type every entry in [`crate::context::NodeIdMapCollection`]'s
//! `ast_node_by_id` map is stored as. Typed
//! wrapper structs in `crate::ast::nodes` borrow a [`crate::ast::view::NodeView`]
//! over one of these rather than holding their own fields.

use std::fmt;

use crate::ast::kind::NodeKind;

/// Identifies a single entry in the id map. Ids are assigned in increasing
/// order as contexts are opened and are never
/// reused, except for the controlled renumbering a completed recursive
/// primary expression undergoes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The half-open range `[token_index_start, token_index_end)` of tokens a
/// completed node spans. Used for the token-range-containment
/// invariant and for slicing leaf literal text out of the lexer's
/// text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenRange {
    pub start: u32,
    pub end: u32,
}

impl TokenRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn len(self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.end == self.start
    }

    pub fn contains(self, other: TokenRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// A completed parse-tree node. Every `AstNode` was once a
/// [`crate::context::ContextNode`] that `end_context` closed out; the
/// `attribute_index` mirrors the one the context accumulated so that
/// positional child lookups (`support::child`/`nth`) stay stable regardless
/// of how many of a multi-child production's optional slots were actually
/// taken.
#[derive(Debug, Clone)]
pub struct AstNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub token_range: TokenRange,
    /// This node's position among its parent's children in the order
    /// contexts were opened, *not* the order they closed — used to recover
    /// left-to-right child order even though a child can close after a
    /// later-opened sibling in speculative/backtracking reads.
    pub attribute_index: Option<u32>,
    /// Leaf nodes (literals, identifiers, constants) store their exact
    /// source text inline rather than requiring a second lookup into the
    /// lexer snapshot by token range, since constants often do not
    /// correspond to a single token (e.g. a multi-token keyword constant).
    pub leaf_text: Option<Box<str>>,
}

impl AstNode {
    pub fn is_leaf(&self) -> bool {
        self.leaf_text.is_some()
    }
}
