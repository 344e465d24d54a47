//! Control-flow and function expressions.

use super::ast_node;
use crate::ast::nodes::literal::Constant;
use crate::ast::nodes::primary::ExpressionNode;
use crate::ast::nodes::structural::ParameterList;
use crate::ast::view::{support, AstNodeExt};

ast_node!(IfExpression, IfExpression);

impl IfExpression {
    pub fn condition(&self) -> Option<ExpressionNode> {
        support::nth_child(&self.view(), 1).and_then(ExpressionNode::cast)
    }

    pub fn true_expression(&self) -> Option<ExpressionNode> {
        support::nth_child(&self.view(), 3).and_then(ExpressionNode::cast)
    }

    pub fn false_expression(&self) -> Option<ExpressionNode> {
        support::nth_child(&self.view(), 5).and_then(ExpressionNode::cast)
    }
}

ast_node!(LetExpression, LetExpression);

impl LetExpression {
    pub fn variable_list(&self) -> impl Iterator<Item = super::GeneralizedIdentifierPairedExpression> + '_
    {
        support::children(self.view())
    }

    pub fn expression(&self) -> Option<ExpressionNode> {
        self.view().children().rev().find_map(ExpressionNode::cast)
    }
}

ast_node!(EachExpression, EachExpression);

impl EachExpression {
    pub fn each_constant(&self) -> Option<Constant> {
        support::child(self.view())
    }

    pub fn expression(&self) -> Option<ExpressionNode> {
        support::child(self.view())
    }
}

ast_node!(ErrorRaisingExpression, ErrorRaisingExpression);

impl ErrorRaisingExpression {
    pub fn expression(&self) -> Option<ExpressionNode> {
        support::child(self.view())
    }
}

ast_node!(ErrorHandlingExpression, ErrorHandlingExpression);

impl ErrorHandlingExpression {
    pub fn protected_expression(&self) -> Option<ExpressionNode> {
        support::nth_child(self.view(), 1).and_then(ExpressionNode::cast)
    }

    pub fn otherwise_expression(&self) -> Option<OtherwiseExpression> {
        support::child(self.view())
    }
}

ast_node!(OtherwiseExpression, OtherwiseExpression);

impl OtherwiseExpression {
    pub fn expression(&self) -> Option<ExpressionNode> {
        support::child(self.view())
    }
}

ast_node!(FunctionExpression, FunctionExpression);

impl FunctionExpression {
    pub fn parameters(&self) -> Option<ParameterList> {
        support::child(self.view())
    }

    pub fn return_type(&self) -> Option<super::PrimaryType> {
        support::child(self.view())
    }

    pub fn expression(&self) -> Option<ExpressionNode> {
        self.view().children().rev().find_map(ExpressionNode::cast)
    }
}

