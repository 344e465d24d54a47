//! The seven binary-operator precedence families and unary
//! expressions all share one wrapper shape:
//! `(left, operator_constant, right)`, positionally accessed the way a
//! `CombinatorialParser`-built tree and a `NaiveParser`-built tree must agree
//! on regardless of
//! which strategy constructed it.

use crate::ast::kind::NodeKind;
use crate::ast::view::{support, AstNodeExt, NodeView};
use crate::ast::nodes::ast_node;
use crate::ast::nodes::literal::Constant;

/// One of the seven `NodeKind::*Expression` BinOp families (NullCoalescing,
/// Logical, Is, As, Equality, Relational, Arithmetic, Metadata). A single
/// wrapper type for all seven keeps `ExpressionNode::cast` from needing
/// seven near-identical arms, and reflects that every `grammar::binop`
/// production builds the identical three-child shape regardless of which
/// precedence level it is.
#[derive(Debug, Clone)]
pub struct BinOpExpression {
    view: NodeView,
}

impl AstNodeExt for BinOpExpression {
    fn can_cast(kind: NodeKind) -> bool {
        kind.is_binop()
    }

    fn cast(view: NodeView) -> Option<Self> {
        Self::can_cast(view.kind()).then(|| Self { view })
    }

    fn view(&self) -> &NodeView {
        &self.view
    }
}

impl BinOpExpression {
    pub fn id(&self) -> crate::ast::NodeId {
        self.view.id()
    }

    pub fn left(&self) -> Option<super::ExpressionNode> {
        support::nth_child(&self.view, 0).and_then(super::ExpressionNode::cast)
    }

    pub fn operator_constant(&self) -> Option<Constant> {
        support::nth_child(&self.view, 1).and_then(Constant::cast)
    }

    pub fn right(&self) -> Option<super::ExpressionNode> {
        support::nth_child(&self.view, 2).and_then(super::ExpressionNode::cast)
    }
}

ast_node!(UnaryExpression, UnaryExpression);

impl UnaryExpression {
    /// One or more prefix operator constants (`+`/`-`/`not` ...) before the
    /// operand.
    pub fn operator_constants(&self) -> impl Iterator<Item = Constant> + '_ {
        support::children(&self.view)
    }

    pub fn operand(&self) -> Option<super::ExpressionNode> {
        self.view.children().find_map(super::ExpressionNode::cast)
    }
}
