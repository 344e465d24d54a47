//! Type expressions.

use super::ast_node;
use crate::ast::kind::NodeKind;
use crate::ast::nodes::structural::{FieldSpecificationList, ParameterList};
use crate::ast::view::{support, AstNodeExt, NodeView};

/// Any node kind that can appear wherever the grammar calls for a type, mirrored on [`crate::ast::nodes::primary::ExpressionNode`]'s
/// pattern for expression slots.
#[derive(Debug, Clone)]
pub enum PrimaryType {
    Primitive(PrimitiveType),
    List(ListType),
    Record(RecordType),
    Table(TableType),
    Function(FunctionType),
    Nullable(NullableType),
    NullablePrimitive(NullablePrimitiveType),
}

impl PrimaryType {
    pub fn view(&self) -> &NodeView {
        match self {
            PrimaryType::Primitive(n) => n.view(),
            PrimaryType::List(n) => n.view(),
            PrimaryType::Record(n) => n.view(),
            PrimaryType::Table(n) => n.view(),
            PrimaryType::Function(n) => n.view(),
            PrimaryType::Nullable(n) => n.view(),
            PrimaryType::NullablePrimitive(n) => n.view(),
        }
    }

    pub fn cast(view: NodeView) -> Option<Self> {
        match view.kind() {
            NodeKind::PrimitiveType => PrimitiveType::cast(view).map(PrimaryType::Primitive),
            NodeKind::ListType => ListType::cast(view).map(PrimaryType::List),
            NodeKind::RecordType => RecordType::cast(view).map(PrimaryType::Record),
            NodeKind::TableType => TableType::cast(view).map(PrimaryType::Table),
            NodeKind::FunctionType => FunctionType::cast(view).map(PrimaryType::Function),
            NodeKind::NullableType => NullableType::cast(view).map(PrimaryType::Nullable),
            NodeKind::NullablePrimitiveType => {
                NullablePrimitiveType::cast(view).map(PrimaryType::NullablePrimitive)
            }
            _ => None,
        }
    }
}

/// `'type' primary-type` standing wherever an expression is expected. Never
/// produced for a bare primary expression with no leading `type` keyword —
/// that case passes through unwrapped, so there is no `TypeExpression` node
/// to cast in the common case.
ast_node!(TypeExpression, TypeExpression);

impl TypeExpression {
    pub fn primary_type(&self) -> Option<PrimaryType> {
        self.view().children().find_map(PrimaryType::cast)
    }
}

ast_node!(PrimitiveType, PrimitiveType);

impl PrimitiveType {
    /// The type's name text (e.g. `"number"`, `"any"`, `"type"`, `"null"`;
    /// the fixed primitive-type name set plus the two extra spellings
    /// `type`/`null`).
    pub fn name(&self) -> &str {
        self.view().leaf_text().unwrap_or_default()
    }
}

ast_node!(ListType, ListType);

impl ListType {
    pub fn item_type(&self) -> Option<PrimaryType> {
        self.view().children().find_map(PrimaryType::cast)
    }
}

ast_node!(RecordType, RecordType);

impl RecordType {
    pub fn field_specification_list(&self) -> Option<FieldSpecificationList> {
        support::child(self.view())
    }
}

ast_node!(TableType, TableType);

impl TableType {
    pub fn row_type(&self) -> Option<RecordType> {
        support::child(self.view())
    }
}

ast_node!(FunctionType, FunctionType);

impl FunctionType {
    pub fn parameters(&self) -> Option<ParameterList> {
        support::child(self.view())
    }

    pub fn return_type(&self) -> Option<PrimaryType> {
        self.view().children().rev().find_map(PrimaryType::cast)
    }
}

ast_node!(NullableType, NullableType);

impl NullableType {
    pub fn paired_type(&self) -> Option<PrimaryType> {
        self.view().children().find_map(PrimaryType::cast)
    }
}

/// `nullable` applied directly to a primitive type name, a spelling the
/// grammar distinguishes from the general `NullableType` wrapping a full
/// `PrimaryType`.
ast_node!(NullablePrimitiveType, NullablePrimitiveType);

impl NullablePrimitiveType {
    pub fn primitive_type(&self) -> Option<PrimitiveType> {
        support::child(self.view())
    }
}
