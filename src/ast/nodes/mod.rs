//! Typed wrappers over [`NodeView`], one per [`NodeKind`] family, hand-written
//! rather than codegen'd from a grammar file, since this crate has no
//! grammar-description source to generate them from. The `ast_node!` macro
//! below covers the boilerplate (struct + `AstNodeExt` impl); accessor
//! methods are still written out per type, one `support::child`/
//! `support::children` call per field.

use crate::ast::kind::NodeKind;
use crate::ast::view::{AstNodeExt, NodeView};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone)]
        pub struct $name {
            view: NodeView,
        }

        impl AstNodeExt for $name {
            fn can_cast(kind: NodeKind) -> bool {
                matches!(kind, NodeKind::$kind)
            }

            fn cast(view: NodeView) -> Option<Self> {
                if Self::can_cast(view.kind()) {
                    Some(Self { view })
                } else {
                    None
                }
            }

            fn view(&self) -> &NodeView {
                &self.view
            }
        }

        impl $name {
            pub fn id(&self) -> crate::ast::NodeId {
                self.view.id()
            }
        }
    };
}

pub(crate) use ast_node;

pub mod binop;
pub mod document;
pub mod flow;
pub mod literal;
pub mod primary;
pub mod structural;
pub mod type_;

pub use binop::*;
pub use document::*;
pub use flow::*;
pub use literal::*;
pub use primary::*;
pub use structural::*;
pub use type_::*;
