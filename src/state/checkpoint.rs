//! Speculative parsing support. Used at exactly two call sites: `readDocument`'s expression-vs-
//! section race and `tryReadPrimitiveType`'s bounded lookahead — both are
//! genuine backtracking, unlike the bracket/parenthesis disambiguators,
//! which only ever peek ahead by token kind and never open a context.

use crate::context::NodeIdMapCollection;

/// A snapshot cheap enough to take liberally and restore exactly.
/// Cloning the whole [`NodeIdMapCollection`] is O(tree size so far) rather
/// than O(1), which is acceptable given this parser's documented scale.
#[derive(Debug, Clone)]
pub struct Checkpoint {
    pub(crate) token_index: u32,
    pub(crate) id_counter: u32,
    pub(crate) current_context_id: Option<crate::ast::NodeId>,
    pub(crate) id_map: NodeIdMapCollection,
}

impl Checkpoint {
    pub(crate) fn capture(state: &super::ParseState) -> Self {
        Self {
            token_index: state.token_index,
            id_counter: state.id_counter,
            current_context_id: state.current_context_id,
            id_map: state.id_map_snapshot(),
        }
    }

    pub(crate) fn restore(self, state: &mut super::ParseState) {
        state.token_index = self.token_index;
        state.id_counter = self.id_counter;
        state.current_context_id = self.current_context_id;
        state.restore_id_map(self.id_map);
    }
}
