//! The parse-context graph.

pub mod context_node;
pub mod id_map;

pub use context_node::ContextNode;
pub use id_map::NodeIdMapCollection;
