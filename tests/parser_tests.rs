// tests/parser_tests.rs

use sift_lang::ast::{CompareOp, Expr};
use sift_lang::lexer::Lexer;
use sift_lang::parser::{ParseError, Parser};
use sift_lang::value::Value;

fn parse(input: &str) -> Result<Expr, ParseError> {
    Parser::new(Lexer::new(input)).parse()
}

// ============================================================================
// Leaves
// ============================================================================

#[test]
fn test_single_field() {
    let expr = parse("price:>100").unwrap();
    assert_eq!(
        expr,
        Expr::Field {
            field: "price".to_string(),
            op: CompareOp::Gt,
            value: Value::Integer(100),
        }
    );
}

#[test]
fn test_single_text() {
    let expr = parse("iPhone").unwrap();
    assert_eq!(expr, Expr::Text("iPhone".to_string()));
}

#[test]
fn test_fuzzy_threshold_not_carried_into_tree() {
    // The ~0.9 suffix lives on the token only; the tree keeps path, operator
    // and value.
    let expr = parse("name:ipone~0.9").unwrap();
    assert_eq!(
        expr,
        Expr::Field {
            field: "name".to_string(),
            op: CompareOp::Fuzzy,
            value: Value::String("ipone".to_string()),
        }
    );
}

// ============================================================================
// Conjunction and Precedence
// ============================================================================

#[test]
fn test_implicit_and_matches_explicit() {
    let implicit = parse("brand:苹果 price:>=10000").unwrap();
    let explicit = parse("brand:苹果 AND price:>=10000").unwrap();
    assert_eq!(implicit, explicit);
}

#[test]
fn test_and_binds_tighter_than_or() {
    // a:1 OR b:2 AND c:3 groups as Or(a:1, And(b:2, c:3))
    let expr = parse("a:1 OR b:2 AND c:3").unwrap();
    match expr {
        Expr::Or { left, right } => {
            assert!(matches!(*left, Expr::Field { ref field, .. } if field == "a"));
            match *right {
                Expr::And { left, right } => {
                    assert!(matches!(*left, Expr::Field { ref field, .. } if field == "b"));
                    assert!(matches!(*right, Expr::Field { ref field, .. } if field == "c"));
                }
                other => panic!("Expected And on the right, got {:?}", other),
            }
        }
        other => panic!("Expected Or at the root, got {:?}", other),
    }
}

#[test]
fn test_not_binds_tighter_than_and() {
    // NOT a:1 AND b:2 groups as And(Not(a:1), b:2)
    let expr = parse("NOT a:1 AND b:2").unwrap();
    match expr {
        Expr::And { left, right } => {
            assert!(matches!(*left, Expr::Not { .. }));
            assert!(matches!(*right, Expr::Field { ref field, .. } if field == "b"));
        }
        other => panic!("Expected And at the root, got {:?}", other),
    }
}

#[test]
fn test_left_associative_chain() {
    // a:1 AND b:2 AND c:3 groups as And(And(a, b), c)
    let expr = parse("a:1 AND b:2 AND c:3").unwrap();
    match expr {
        Expr::And { left, right } => {
            assert!(matches!(*left, Expr::And { .. }));
            assert!(matches!(*right, Expr::Field { ref field, .. } if field == "c"));
        }
        other => panic!("Expected And at the root, got {:?}", other),
    }
}

// ============================================================================
// Parentheses and Grouped Negation
// ============================================================================

#[test]
fn test_parentheses_override_precedence() {
    // ( a:1 OR b:2 ) AND c:3 groups as And(Or(a, b), c)
    let expr = parse("( a:1 OR b:2 ) AND c:3").unwrap();
    match expr {
        Expr::And { left, right } => {
            assert!(matches!(*left, Expr::Or { .. }));
            assert!(matches!(*right, Expr::Field { ref field, .. } if field == "c"));
        }
        other => panic!("Expected And at the root, got {:?}", other),
    }
}

#[test]
fn test_negation_applies_to_whole_group() {
    // ! ( a:1 OR b:2 ) parses as Not(Or(a, b)), not And(Not(a), b)
    let expr = parse("! ( a:1 OR b:2 )").unwrap();
    match expr {
        Expr::Not { operand } => match *operand {
            Expr::Or { left, right } => {
                assert!(matches!(*left, Expr::Field { ref field, .. } if field == "a"));
                assert!(matches!(*right, Expr::Field { ref field, .. } if field == "b"));
            }
            other => panic!("Expected Or under Not, got {:?}", other),
        },
        other => panic!("Expected Not at the root, got {:?}", other),
    }
}

#[test]
fn test_negated_group_composes() {
    // NOT ( a:1 ) AND b:2 groups as And(Not(a), b)
    let expr = parse("NOT ( a:1 ) AND b:2").unwrap();
    match expr {
        Expr::And { left, .. } => assert!(matches!(*left, Expr::Not { .. })),
        other => panic!("Expected And at the root, got {:?}", other),
    }
}

// ============================================================================
// Unbalanced Parentheses Are Tolerated
// ============================================================================

#[test]
fn test_unmatched_close_paren_is_discarded() {
    let expr = parse("a:1 )").unwrap();
    assert!(matches!(expr, Expr::Field { ref field, .. } if field == "a"));
}

#[test]
fn test_unmatched_open_paren_is_dropped() {
    let expr = parse("( a:1").unwrap();
    assert!(matches!(expr, Expr::Field { ref field, .. } if field == "a"));
}

#[test]
fn test_unmatched_open_with_operator() {
    let expr = parse("( a:1 AND b:2").unwrap();
    assert!(matches!(expr, Expr::And { .. }));
}

// ============================================================================
// Parse Errors
// ============================================================================

#[test]
fn test_leading_and_is_an_error() {
    assert_eq!(parse("AND brand:苹果"), Err(ParseError::MissingOperand("AND")));
}

#[test]
fn test_bare_or_is_an_error() {
    assert_eq!(parse("OR"), Err(ParseError::MissingOperand("OR")));
}

#[test]
fn test_bare_not_is_an_error() {
    assert_eq!(parse("NOT"), Err(ParseError::MissingOperand("NOT")));
}

#[test]
fn test_empty_query_is_an_error() {
    assert_eq!(parse(""), Err(ParseError::InvalidExpression(0)));
}

#[test]
fn test_adjacent_groups_are_an_error() {
    // No conjunction is inserted across a group boundary.
    assert_eq!(
        parse("( a:1 ) ( b:2 )"),
        Err(ParseError::InvalidExpression(2))
    );
}

#[test]
fn test_errors_display() {
    let missing = ParseError::MissingOperand("AND").to_string();
    assert!(missing.contains("AND"));
    let invalid = ParseError::InvalidExpression(2).to_string();
    assert!(invalid.contains('2'));
}
