//! Primary expressions and their recursive suffixes, plus the
//! polymorphic `ExpressionNode` enum other wrappers use whenever a slot can
//! hold any expression-shaped child.

use super::ast_node;
use crate::ast::kind::NodeKind;
use crate::ast::view::{support, AstNodeExt, NodeView};
use crate::ast::nodes::binop::{BinOpExpression, UnaryExpression};
use crate::ast::nodes::flow::{
    EachExpression, ErrorHandlingExpression, ErrorRaisingExpression, FunctionExpression,
    IfExpression, LetExpression,
};
use crate::ast::nodes::literal::{IdentifierExpression, KeywordExpression, LiteralExpression};
use crate::ast::nodes::structural::{ListExpression, ParenthesizedExpression, RecordExpression};
use crate::ast::nodes::type_::TypeExpression;

/// Any node kind that can appear wherever the grammar calls for an
/// expression: a flat enum with one variant per castable kind, `cast` trying
/// each in turn.
#[derive(Debug, Clone)]
pub enum ExpressionNode {
    BinOp(BinOpExpression),
    Unary(UnaryExpression),
    Literal(LiteralExpression),
    Identifier(IdentifierExpression),
    Keyword(KeywordExpression),
    Parenthesized(ParenthesizedExpression),
    List(ListExpression),
    Record(RecordExpression),
    If(IfExpression),
    Let(LetExpression),
    Each(EachExpression),
    ErrorRaising(ErrorRaisingExpression),
    ErrorHandling(ErrorHandlingExpression),
    Function(FunctionExpression),
    RecursivePrimary(RecursivePrimaryExpression),
    Type(TypeExpression),
}

impl ExpressionNode {
    pub fn view(&self) -> &NodeView {
        match self {
            ExpressionNode::BinOp(n) => n.view(),
            ExpressionNode::Unary(n) => n.view(),
            ExpressionNode::Literal(n) => n.view(),
            ExpressionNode::Identifier(n) => n.view(),
            ExpressionNode::Keyword(n) => n.view(),
            ExpressionNode::Parenthesized(n) => n.view(),
            ExpressionNode::List(n) => n.view(),
            ExpressionNode::Record(n) => n.view(),
            ExpressionNode::If(n) => n.view(),
            ExpressionNode::Let(n) => n.view(),
            ExpressionNode::Each(n) => n.view(),
            ExpressionNode::ErrorRaising(n) => n.view(),
            ExpressionNode::ErrorHandling(n) => n.view(),
            ExpressionNode::Function(n) => n.view(),
            ExpressionNode::RecursivePrimary(n) => n.view(),
            ExpressionNode::Type(n) => n.view(),
        }
    }

    pub fn cast(view: NodeView) -> Option<Self> {
        let kind = view.kind();
        if kind.is_binop() {
            return BinOpExpression::cast(view).map(ExpressionNode::BinOp);
        }
        match kind {
            NodeKind::UnaryExpression => UnaryExpression::cast(view).map(ExpressionNode::Unary),
            NodeKind::LiteralExpression => LiteralExpression::cast(view).map(ExpressionNode::Literal),
            NodeKind::IdentifierExpression => {
                IdentifierExpression::cast(view).map(ExpressionNode::Identifier)
            }
            NodeKind::KeywordExpression => KeywordExpression::cast(view).map(ExpressionNode::Keyword),
            NodeKind::ParenthesizedExpression => {
                ParenthesizedExpression::cast(view).map(ExpressionNode::Parenthesized)
            }
            NodeKind::ListExpression => ListExpression::cast(view).map(ExpressionNode::List),
            NodeKind::RecordExpression => RecordExpression::cast(view).map(ExpressionNode::Record),
            NodeKind::IfExpression => IfExpression::cast(view).map(ExpressionNode::If),
            NodeKind::LetExpression => LetExpression::cast(view).map(ExpressionNode::Let),
            NodeKind::EachExpression => EachExpression::cast(view).map(ExpressionNode::Each),
            NodeKind::ErrorRaisingExpression => {
                ErrorRaisingExpression::cast(view).map(ExpressionNode::ErrorRaising)
            }
            NodeKind::ErrorHandlingExpression => {
                ErrorHandlingExpression::cast(view).map(ExpressionNode::ErrorHandling)
            }
            NodeKind::FunctionExpression => {
                FunctionExpression::cast(view).map(ExpressionNode::Function)
            }
            NodeKind::RecursivePrimaryExpression => {
                RecursivePrimaryExpression::cast(view).map(ExpressionNode::RecursivePrimary)
            }
            NodeKind::TypeExpression => TypeExpression::cast(view).map(ExpressionNode::Type),
            _ => None,
        }
    }
}

/// The synthetic wrapper a completed primary expression is reparented under
/// once one or more recursive suffixes (`(...)`, `[...]`, `{...}`) follow it
///. Its first
/// child is always the original head; the rest are the suffix nodes in
/// source order.
ast_node!(RecursivePrimaryExpression, RecursivePrimaryExpression);

impl RecursivePrimaryExpression {
    pub fn head(&self) -> Option<ExpressionNode> {
        support::nth_child(&self.view, 0).and_then(ExpressionNode::cast)
    }

    /// The suffix nodes in source order, reached through the `ArrayWrapper`
    /// the parser opens under this node, not as direct
    /// children of `self`.
    pub fn recursive_expressions(&self) -> impl Iterator<Item = RecursiveSuffix> + '_ {
        support::nth_child(&self.view, 1)
            .and_then(ArrayWrapper::cast)
            .map(|wrapper| wrapper.suffixes().collect::<Vec<_>>())
            .unwrap_or_default()
            .into_iter()
    }
}

/// Holds the invoke/item-access/field-access suffixes of a
/// [`RecursivePrimaryExpression`].
ast_node!(ArrayWrapper, ArrayWrapper);

impl ArrayWrapper {
    pub fn suffixes(&self) -> impl Iterator<Item = RecursiveSuffix> + '_ {
        self.view.children().filter_map(RecursiveSuffix::cast)
    }
}

/// One suffix a recursive primary expression can carry. Mirrors
/// [`ExpressionNode`]/[`crate::ast::nodes::type_::PrimaryType`]'s
/// try-each-alternative `cast`, just over the narrower set of kinds that can
/// appear inside an [`ArrayWrapper`].
#[derive(Debug, Clone)]
pub enum RecursiveSuffix {
    Invoke(InvokeExpression),
    ItemAccess(ItemAccessExpression),
    FieldSelector(FieldSelector),
    FieldProjection(FieldProjection),
}

impl RecursiveSuffix {
    pub fn cast(view: NodeView) -> Option<Self> {
        match view.kind() {
            NodeKind::InvokeExpression => InvokeExpression::cast(view).map(RecursiveSuffix::Invoke),
            NodeKind::ItemAccessExpression => {
                ItemAccessExpression::cast(view).map(RecursiveSuffix::ItemAccess)
            }
            NodeKind::FieldSelector => FieldSelector::cast(view).map(RecursiveSuffix::FieldSelector),
            NodeKind::FieldProjection => {
                FieldProjection::cast(view).map(RecursiveSuffix::FieldProjection)
            }
            _ => None,
        }
    }
}

ast_node!(InvokeExpression, InvokeExpression);

impl InvokeExpression {
    pub fn arguments(&self) -> impl Iterator<Item = ExpressionNode> + '_ {
        self.view.children().filter_map(ExpressionNode::cast)
    }
}

ast_node!(ItemAccessExpression, ItemAccessExpression);

impl ItemAccessExpression {
    pub fn item_selector(&self) -> Option<ExpressionNode> {
        self.view.children().find_map(ExpressionNode::cast)
    }

    /// Whether the `{}` carried the `?` optional marker.
    pub fn is_optional(&self) -> bool {
        self.view
            .children()
            .any(|c| c.kind() == NodeKind::Constant && c.leaf_text() == Some("?"))
    }
}

ast_node!(FieldSelector, FieldSelector);

impl FieldSelector {
    pub fn field(&self) -> Option<super::GeneralizedIdentifier> {
        support::child(&self.view)
    }

    pub fn is_optional(&self) -> bool {
        self.view
            .children()
            .any(|c| c.kind() == NodeKind::Constant && c.leaf_text() == Some("?"))
    }
}

ast_node!(FieldProjection, FieldProjection);

impl FieldProjection {
    pub fn projected_fields(&self) -> impl Iterator<Item = FieldSelector> + '_ {
        support::children(&self.view)
    }

    pub fn is_optional(&self) -> bool {
        self.view
            .children()
            .any(|c| c.kind() == NodeKind::Constant && c.leaf_text() == Some("?"))
    }
}
