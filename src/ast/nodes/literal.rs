//! Leaf and near-leaf nodes.

use super::ast_node;
use crate::ast::kind::NodeKind;
use crate::ast::view::{support, AstNodeExt, NodeView};

ast_node!(LiteralExpression, LiteralExpression);

impl LiteralExpression {
    /// The literal's exact source text.
    pub fn text(&self) -> &str {
        self.view.leaf_text().unwrap_or_default()
    }
}

ast_node!(Identifier, Identifier);

impl Identifier {
    pub fn text(&self) -> &str {
        self.view.leaf_text().unwrap_or_default()
    }
}

ast_node!(GeneralizedIdentifier, GeneralizedIdentifier);

impl GeneralizedIdentifier {
    pub fn text(&self) -> &str {
        self.view.leaf_text().unwrap_or_default()
    }
}

ast_node!(IdentifierExpression, IdentifierExpression);

impl IdentifierExpression {
    pub fn inclusive_constant(&self) -> Option<Constant> {
        support::child(&self.view)
    }

    pub fn identifier(&self) -> Option<Identifier> {
        support::child(&self.view)
    }
}

ast_node!(KeywordExpression, KeywordExpression);

impl KeywordExpression {
    pub fn constant(&self) -> Option<Constant> {
        support::child(&self.view)
    }
}

/// A fixed-spelling token re-wrapped as a node (operator symbols, keywords,
/// punctuation that participates in the tree, e.g. `each`, `+`, `,`), so that
/// every node in a production's fixed shape is reachable uniformly through
/// the id map.
ast_node!(Constant, Constant);

impl Constant {
    pub fn text(&self) -> &str {
        self.view.leaf_text().unwrap_or_default()
    }
}

/// `identifier = expression` and `generalized-identifier = expression` pairs
///,
/// e.g. a record field or a `let` variable binding.
ast_node!(IdentifierPairedExpression, IdentifierPairedExpression);

impl IdentifierPairedExpression {
    pub fn key(&self) -> Option<Identifier> {
        support::child(&self.view)
    }

    pub fn equal_constant(&self) -> Option<Constant> {
        support::nth_child(&self.view, 1).and_then(Constant::cast)
    }

    pub fn value(&self) -> Option<super::ExpressionNode> {
        super::ExpressionNode::cast(support::nth_child(&self.view, 2)?)
    }
}

ast_node!(GeneralizedIdentifierPairedExpression, GeneralizedIdentifierPairedExpression);

impl GeneralizedIdentifierPairedExpression {
    pub fn key(&self) -> Option<GeneralizedIdentifier> {
        support::child(&self.view)
    }

    pub fn value(&self) -> Option<super::ExpressionNode> {
        self.view
            .children()
            .find_map(super::ExpressionNode::cast)
    }
}
