//! Wrapper nodes and the internal structural nodes that stitch a
//! comma-separated list, a record body, or a parameter list together.

use super::ast_node;
use crate::ast::kind::NodeKind;
use crate::ast::nodes::literal::{Constant, GeneralizedIdentifierPairedExpression, Identifier};
use crate::ast::nodes::primary::ExpressionNode;
use crate::ast::view::{support, AstNodeExt};

ast_node!(ParenthesizedExpression, ParenthesizedExpression);

impl ParenthesizedExpression {
    pub fn expression(&self) -> Option<ExpressionNode> {
        support::child(self.view())
    }
}

ast_node!(ListExpression, ListExpression);

impl ListExpression {
    pub fn content(&self) -> impl Iterator<Item = Csv> + '_ {
        support::children(self.view())
    }
}

ast_node!(RecordExpression, RecordExpression);

impl RecordExpression {
    pub fn content(&self) -> impl Iterator<Item = Csv> + '_ {
        support::children(self.view())
    }
}

/// One comma-separated element plus the comma [`Constant`] that followed it,
/// if any.
ast_node!(Csv, Csv);

impl Csv {
    pub fn node(&self) -> Option<ExpressionNode> {
        support::child(self.view())
    }

    pub fn paired_expression(&self) -> Option<GeneralizedIdentifierPairedExpression> {
        support::child(self.view())
    }

    pub fn comma_constant(&self) -> Option<Constant> {
        self.view()
            .children()
            .filter(|c| c.kind() == NodeKind::Constant)
            .last()
            .and_then(Constant::cast)
    }
}

ast_node!(FieldSpecificationList, FieldSpecificationList);

impl FieldSpecificationList {
    pub fn content(&self) -> impl Iterator<Item = Csv> + '_ {
        support::children(self.view())
    }

    /// Whether the list ended in `, ...]`.
    pub fn has_open_marker(&self) -> bool {
        self.view()
            .children()
            .any(|c| c.kind() == NodeKind::Constant && c.leaf_text() == Some("..."))
    }
}

ast_node!(FieldSpecification, FieldSpecification);

impl FieldSpecification {
    pub fn is_optional(&self) -> bool {
        self.view()
            .children()
            .next()
            .is_some_and(|c| c.kind() == NodeKind::Constant && c.leaf_text() == Some("optional"))
    }

    pub fn name(&self) -> Option<super::GeneralizedIdentifier> {
        support::child(self.view())
    }

    pub fn field_type_specification(&self) -> Option<PairedConstant> {
        support::child(self.view())
    }
}

/// A fixed keyword/punctuation constant paired with the node it introduces,
/// e.g. `optional` before a field name, or `as` before a type annotation
///.
ast_node!(PairedConstant, PairedConstant);

impl PairedConstant {
    pub fn constant(&self) -> Option<Constant> {
        support::child(self.view())
    }

    pub fn paired_node(&self) -> Option<super::PrimaryType> {
        support::child(self.view())
    }
}

ast_node!(ParameterList, ParameterList);

impl ParameterList {
    pub fn content(&self) -> impl Iterator<Item = Csv> + '_ {
        support::children(self.view())
    }
}

ast_node!(Parameter, Parameter);

impl Parameter {
    pub fn optional_constant(&self) -> Option<Constant> {
        self.view()
            .children()
            .next()
            .filter(|c| c.kind() == NodeKind::Constant)
            .and_then(Constant::cast)
    }

    pub fn name(&self) -> Option<Identifier> {
        support::child(self.view())
    }

    pub fn parameter_type(&self) -> Option<PairedConstant> {
        support::child(self.view())
    }
}
