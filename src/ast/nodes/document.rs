//! The two document shapes a parse can produce: a
//! bare expression document, or a section document.

use super::ast_node;
use crate::ast::nodes::literal::Constant;
use crate::ast::nodes::primary::ExpressionNode;
use crate::ast::view::{support, AstNodeExt};

/// Either shape `readDocument` may produce. Unlike [`ExpressionNode`]/
/// [`crate::ast::nodes::type_::PrimaryType`] this is a two-way split with no
/// shared `NodeKind` predicate, so `cast` just tries each alternative kind in
/// turn, collapsed to an either/or since a document has exactly one root.
#[derive(Debug, Clone)]
pub enum Document {
    Expression(ExpressionNode),
    Section(SectionDocument),
}

impl Document {
    pub fn cast(view: crate::ast::view::NodeView) -> Option<Self> {
        if view.kind() == crate::ast::NodeKind::SectionDocument {
            return SectionDocument::cast(view).map(Document::Section);
        }
        ExpressionNode::cast(view).map(Document::Expression)
    }
}

ast_node!(SectionDocument, SectionDocument);

impl SectionDocument {
    pub fn literal_attributes(&self) -> Option<super::RecordExpression> {
        support::child(self.view())
    }

    pub fn section(&self) -> Option<Section> {
        support::child(self.view())
    }
}

ast_node!(Section, Section);

impl Section {
    pub fn name(&self) -> Option<super::Identifier> {
        support::child(self.view())
    }

    pub fn section_members(&self) -> impl Iterator<Item = SectionMember> + '_ {
        support::children(self.view())
    }
}

ast_node!(SectionMember, SectionMember);

impl SectionMember {
    pub fn shared_constant(&self) -> Option<Constant> {
        self.view()
            .children()
            .next()
            .filter(|c| c.kind() == crate::ast::NodeKind::Constant && c.leaf_text() == Some("shared"))
            .and_then(Constant::cast)
    }

    pub fn name_paired_expression(&self) -> Option<super::IdentifierPairedExpression> {
        support::child(self.view())
    }
}
