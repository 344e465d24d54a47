//! End-to-end parser tests, exercised against the public [`crate::Parser`]
//! surface rather than against individual `grammar::*` functions.

use pretty_assertions::assert_eq;

use crate::ast::nodes::{Document, ExpressionNode, PrimaryType, RecursiveSuffix};
use crate::{CancellationToken, CombinatorialParser, FlagCancellationToken, NaiveParser, Parser};

fn parse_expr(input: &str) -> ExpressionNode {
    let tree = Parser::new(input).parse_expression().expect("valid expression");
    ExpressionNode::cast(tree.root()).expect("expression root")
}

#[test]
fn numeric_literal() {
    let expr = parse_expr("1");
    let ExpressionNode::Literal(literal) = expr else {
        panic!("expected a literal expression, got {expr:?}");
    };
    assert_eq!(literal.text(), "1");
}

/// `1 + 2 * 3` ⇒ `ArithmeticExpression{op=+, left=1, right=ArithmeticExpression{op=*, left=2, right=3}}`
///: `*` binds tighter than `+`, so the outer node's right operand
/// is itself an `ArithmeticExpression`, not a flat three-way fold.
#[test]
fn arithmetic_precedence_naive() {
    let expr = parse_expr("1 + 2 * 3");
    let ExpressionNode::BinOp(outer) = expr else {
        panic!("expected a BinOp expression, got {expr:?}");
    };
    assert_eq!(outer.operator_constant().unwrap().text(), "+");

    let ExpressionNode::Literal(left) = outer.left().unwrap() else {
        panic!("expected the left operand to be a literal");
    };
    assert_eq!(left.text(), "1");

    let ExpressionNode::BinOp(inner) = outer.right().unwrap() else {
        panic!("expected the right operand to be a nested BinOp expression");
    };
    assert_eq!(inner.operator_constant().unwrap().text(), "*");
    let ExpressionNode::Literal(inner_left) = inner.left().unwrap() else {
        panic!("expected the inner left operand to be a literal");
    };
    assert_eq!(inner_left.text(), "2");
}

/// The combinatorial strategy must reproduce the same operand sequence and
/// precedence as the naive strategy.
#[test]
fn arithmetic_precedence_combinatorial_matches_naive() {
    let naive = Parser::new("1 + 2 * 3")
        .strategy(Box::new(NaiveParser))
        .parse_expression()
        .unwrap();
    let combinatorial = Parser::new("1 + 2 * 3")
        .strategy(Box::new(CombinatorialParser))
        .parse_expression()
        .unwrap();

    assert_eq!(format!("{:#?}", naive.id_map()), format!("{:#?}", combinatorial.id_map()));
}

/// `and` binds tighter than `or`, so
/// `a or b and c` must parse as `a or (b and c)`, not `(a or b) and c`.
#[test]
fn logical_and_binds_tighter_than_or() {
    let expr = parse_expr("a or b and c");
    let ExpressionNode::BinOp(outer) = expr else {
        panic!("expected a BinOp expression, got {expr:?}");
    };
    assert_eq!(outer.operator_constant().unwrap().text(), "or");
    assert!(matches!(outer.left().unwrap(), ExpressionNode::Identifier(_)));
    assert!(matches!(outer.right().unwrap(), ExpressionNode::BinOp(_)));
}

#[test]
fn if_expression() {
    let expr = parse_expr("if x then 1 else 2");
    let ExpressionNode::If(if_expr) = expr else {
        panic!("expected an if expression, got {expr:?}");
    };
    assert!(matches!(if_expr.condition(), Some(ExpressionNode::Identifier(_))));
    assert!(matches!(if_expr.true_expression(), Some(ExpressionNode::Literal(_))));
    assert!(matches!(if_expr.false_expression(), Some(ExpressionNode::Literal(_))));
}

#[test]
fn record_expression_with_two_fields() {
    let expr = parse_expr("[a = 1, b = 2]");
    let ExpressionNode::Record(record) = expr else {
        panic!("expected a record expression, got {expr:?}");
    };
    let fields: Vec<_> = record.content().filter_map(|csv| csv.paired_expression()).collect();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].key().unwrap().text(), "a");
    assert_eq!(fields[1].key().unwrap().text(), "b");
}

/// Trailing comma before the closing `]` with no further field ⇒
/// `ExpectedCsvContinuation`.
#[test]
fn record_expression_trailing_comma_is_an_error() {
    let err = Parser::new("[a = 1, b = 2,]").parse_expression().unwrap_err();
    assert!(matches!(err, crate::ParseError::ExpectedCsvContinuation { .. }));
}

/// `type number` as a bare expression: the type keyword wraps a primitive
/// type in a `TypeExpression`, rather than being rejected as an unexpected
/// token at the primary-expression layer.
#[test]
fn type_expression_with_primitive_type() {
    let expr = parse_expr("type number");
    let ExpressionNode::Type(type_expr) = expr else {
        panic!("expected a type expression, got {expr:?}");
    };
    let Some(PrimaryType::Primitive(primitive)) = type_expr.primary_type() else {
        panic!("expected a primitive primary type");
    };
    assert_eq!(primitive.name(), "number");
}

/// A type expression can stand wherever any other expression can, e.g. bound
/// by a `let`.
#[test]
fn type_expression_inside_let_binding() {
    let expr = parse_expr("let t = type number in t");
    let ExpressionNode::Let(let_expr) = expr else {
        panic!("expected a let expression, got {expr:?}");
    };
    let vars: Vec<_> = let_expr.variable_list().collect();
    assert!(matches!(vars[0].value(), Some(ExpressionNode::Type(_))));
}

#[test]
fn let_expression() {
    let expr = parse_expr("let x = 1 in x");
    let ExpressionNode::Let(let_expr) = expr else {
        panic!("expected a let expression, got {expr:?}");
    };
    let vars: Vec<_> = let_expr.variable_list().collect();
    assert_eq!(vars.len(), 1);
    assert_eq!(vars[0].key().unwrap().text(), "x");
    assert!(matches!(let_expr.expression(), Some(ExpressionNode::Identifier(_))));
}

#[test]
fn section_document() {
    let tree = Parser::new("section foo; shared bar = 1;").parse().expect("valid document");
    let Document::Section(section_document) = Document::cast(tree.root()).expect("document root") else {
        panic!("expected a section document");
    };
    let section = section_document.section().expect("section");
    assert_eq!(section.name().unwrap().text(), "foo");

    let members: Vec<_> = section.section_members().collect();
    assert_eq!(members.len(), 1);
    assert!(members[0].shared_constant().is_some());
    assert_eq!(members[0].name_paired_expression().unwrap().key().unwrap().text(), "bar");
}

/// `(x as number) => x + 1` ⇒ the parenthesis disambiguates to a
/// `FunctionExpression` with one typed parameter, not a parenthesized
/// expression.
#[test]
fn parenthesis_disambiguates_to_function_expression() {
    let expr = parse_expr("(x as number) => x + 1");
    let ExpressionNode::Function(function) = expr else {
        panic!("expected a function expression, got {expr:?}");
    };
    let params: Vec<_> = function.parameters().unwrap().content().collect();
    assert_eq!(params.len(), 1);
}

/// `f(1)[k]{0}` ⇒ a `RecursivePrimaryExpression` whose head is `f` and whose
/// suffixes are invoke, field-selector, item-access in source order; after
/// id-map shaping `f`'s id is strictly less than the recursive primary
/// node's id, and `f`'s parent is the recursive primary.
#[test]
fn recursive_primary_expression_reparenting() {
    let tree = Parser::new("f(1)[k]{0}").parse_expression().expect("valid expression");
    let expr = ExpressionNode::cast(tree.root()).expect("expression root");
    let ExpressionNode::RecursivePrimary(recursive) = expr else {
        panic!("expected a recursive primary expression, got {expr:?}");
    };

    let ExpressionNode::Identifier(head) = recursive.head().expect("head") else {
        panic!("expected the head to be an identifier expression");
    };

    let suffixes: Vec<_> = recursive.recursive_expressions().collect();
    assert_eq!(suffixes.len(), 3);
    assert!(matches!(suffixes[0], RecursiveSuffix::Invoke(_)));
    assert!(matches!(suffixes[1], RecursiveSuffix::FieldSelector(_)));
    assert!(matches!(suffixes[2], RecursiveSuffix::ItemAccess(_)));

    assert!(head.id().value() < recursive.id().value());
    let id_map = tree.id_map();
    assert_eq!(id_map.parent_id(head.id()), Some(recursive.id()));
}

/// A checkpoint/restore pair bracketing a failed speculative attempt must
/// leave the id map, token index, and current context exactly as they were
/// before the attempt.
#[test]
fn document_race_restores_state_on_failed_expression_attempt() {
    // Not a valid expression (bare `section` is a document-only keyword), but
    // a valid section document — exercises `readDocument`'s checkpoint/restore
    // between the expression attempt and the section attempt.
    let tree = Parser::new("section s;").parse().expect("valid section document");
    assert!(matches!(Document::cast(tree.root()), Some(Document::Section(_))));
}

#[test]
fn cancellation_token_aborts_the_parse() {
    let token = FlagCancellationToken::new();
    token.cancel();
    assert!(token.is_cancelled());

    let err = Parser::new("1 + 1")
        .cancellation_token(std::rc::Rc::new(token))
        .parse_expression()
        .unwrap_err();
    assert!(err.is_cancellation());
}

#[test]
fn recursion_limit_is_enforced() {
    let deeply_nested = "(".repeat(64) + "1" + &")".repeat(64);
    let err = Parser::new(&deeply_nested)
        .recursion_limit(8)
        .parse_expression()
        .unwrap_err();
    assert!(matches!(err, crate::ParseError::RecursionLimitExceeded { limit: 8, .. }));
}

#[test]
fn token_limit_is_enforced() {
    let err = Parser::new("1 + 1 + 1 + 1 + 1")
        .token_limit(3)
        .parse_expression()
        .unwrap_err();
    assert!(matches!(err, crate::ParseError::TokenLimitExceeded { limit: 3, .. }));
}

#[test]
fn id_map_debug_dump_is_a_readable_tree() {
    let tree = Parser::new("1").parse_expression().unwrap();
    let dump = format!("{:#?}", tree.id_map());
    assert!(dump.contains("LiteralExpression"));
    assert!(dump.contains("\"1\""));
}
