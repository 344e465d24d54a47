//! Typed, read-only access over the id map: a [`NodeView`] borrows a
//! [`crate::context::NodeIdMapCollection`] plus a [`NodeId`] and casts its
//! children by [`NodeKind`], the same way a typed CST wrapper would cast
//! over an untyped syntax tree.

use std::marker::PhantomData;
use std::rc::Rc;

use crate::ast::kind::NodeKind;
use crate::ast::node::{AstNode, NodeId};
use crate::context::NodeIdMapCollection;

/// A borrowed view of one completed node plus the id map it lives in. Cheap
/// to clone (an `Rc` bump plus a `u32` copy), the same way cloning a
/// `rowan::SyntaxNode` is cheap.
#[derive(Clone)]
pub struct NodeView {
    collection: Rc<NodeIdMapCollection>,
    id: NodeId,
}

impl NodeView {
    pub fn new(collection: Rc<NodeIdMapCollection>, id: NodeId) -> Self {
        Self { collection, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.node().kind
    }

    pub fn node(&self) -> &AstNode {
        self.collection
            .ast_node(self.id)
            .expect("NodeView must wrap a completed ast node")
    }

    pub fn collection(&self) -> &Rc<NodeIdMapCollection> {
        &self.collection
    }

    /// Direct children in left-to-right attribute order, each re-wrapped as a [`NodeView`].
    pub fn children(&self) -> impl Iterator<Item = NodeView> + '_ {
        self.collection
            .child_ids(self.id)
            .iter()
            .copied()
            .map(move |id| NodeView::new(Rc::clone(&self.collection), id))
    }

    pub fn leaf_text(&self) -> Option<&str> {
        self.node().leaf_text.as_deref()
    }
}

/// Implemented by every typed wrapper in `crate::ast::nodes` (e.g. `BinOp`,
/// `RecordExpression`, `IfExpression`).
pub trait AstNodeExt: Sized {
    fn can_cast(kind: NodeKind) -> bool;
    fn cast(view: NodeView) -> Option<Self>;
    fn view(&self) -> &NodeView;
}

/// Lazily filters a [`NodeView`]'s children down to those castable to `N`.
pub struct AstChildren<N> {
    inner: std::vec::IntoIter<NodeView>,
    _marker: PhantomData<N>,
}

impl<N: AstNodeExt> AstChildren<N> {
    fn new(parent: &NodeView) -> Self {
        Self {
            inner: parent.children().collect::<Vec<_>>().into_iter(),
            _marker: PhantomData,
        }
    }
}

impl<N: AstNodeExt> Iterator for AstChildren<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        for candidate in self.inner.by_ref() {
            if N::can_cast(candidate.kind()) {
                if let Some(cast) = N::cast(candidate) {
                    return Some(cast);
                }
            }
        }
        None
    }
}

/// Free helper functions for plucking typed children out of a [`NodeView`] —
/// kept as a module rather than inherent methods on `NodeView` so that
/// `crate::ast::nodes::*` reads as `support::child(&self.view)` wherever a
/// wrapper needs one named child.
pub mod support {
    use super::{AstChildren, AstNodeExt, NodeView};

    /// The first child castable to `N`, in left-to-right order.
    pub fn child<N: AstNodeExt>(parent: &NodeView) -> Option<N> {
        parent.children().find_map(|c| {
            if N::can_cast(c.kind()) {
                N::cast(c)
            } else {
                None
            }
        })
    }

    /// Every child castable to `N`, in left-to-right order.
    pub fn children<N: AstNodeExt>(parent: &NodeView) -> AstChildren<N> {
        AstChildren::new(parent)
    }

    /// The `n`th direct child, regardless of kind — used by BinOp wrappers
    /// to reach the fixed `(left, operator_constant, right)` layout
    /// positionally rather than by filtering.
    pub fn nth_child(parent: &NodeView, n: usize) -> Option<NodeView> {
        parent.children().nth(n)
    }

    /// The leaf text of the first child castable to `N`.
    pub fn child_text<N: AstNodeExt>(parent: &NodeView) -> Option<String> {
        child::<N>(parent).and_then(|c| c.view().leaf_text().map(str::to_owned))
    }
}
