//! An in-progress node: the entry a context occupies in the id map while its
//! production is still being read.

use crate::ast::kind::NodeKind;
use crate::ast::node::NodeId;

/// Tracks one open, not-yet-completed production. `start_token_index` is the
/// token index at which the context was opened — needed to compute the
/// finished node's [`crate::ast::TokenRange`] once `end_context` closes it.
/// `attribute_counter` increments once per child a production attaches
///, independent of how many of those children actually
/// succeeded — a context abandoned by a checkpoint restore simply vanishes
/// along with whatever attribute count it had reached.
#[derive(Debug, Clone)]
pub struct ContextNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub parent_id: Option<NodeId>,
    pub start_token_index: u32,
    pub attribute_counter: u32,
}

impl ContextNode {
    pub fn new(id: NodeId, kind: NodeKind, parent_id: Option<NodeId>, start_token_index: u32) -> Self {
        Self {
            id,
            kind,
            parent_id,
            start_token_index,
            attribute_counter: 0,
        }
    }
}
