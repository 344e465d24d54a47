//! The typed AST layer sitting on top of the untyped
//! [`crate::context::NodeIdMapCollection`] arena: an id-indexed graph
//! underneath, and typed wrapper structs (`crate::ast::nodes::*`) for
//! ergonomic access on top.

pub mod kind;
pub mod node;
pub mod nodes;
pub mod view;

pub use kind::NodeKind;
pub use node::{AstNode, NodeId, TokenRange};
pub use view::{support, AstChildren, AstNodeExt, NodeView};
