// tests/lexer_tests.rs

use sift_lang::ast::{CompareOp, Token};
use sift_lang::lexer::Lexer;
use sift_lang::value::Value;

fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}

fn field(name: &str, op: CompareOp, value: Value) -> Token {
    Token::Field {
        field: name.to_string(),
        op,
        value,
        fuzzy_threshold: None,
    }
}

// ============================================================================
// Field Classification
// ============================================================================

#[test]
fn test_field_equality() {
    assert_eq!(
        tokenize("brand:apple"),
        vec![field("brand", CompareOp::Eq, Value::String("apple".to_string()))]
    );
}

#[test]
fn test_field_values_are_typed() {
    assert_eq!(
        tokenize("price:9999"),
        vec![field("price", CompareOp::Eq, Value::Integer(9999))]
    );
    assert_eq!(
        tokenize("rating:4.5"),
        vec![field("rating", CompareOp::Eq, Value::Float(4.5))]
    );
    assert_eq!(
        tokenize("active:true"),
        vec![field("active", CompareOp::Eq, Value::Boolean(true))]
    );
    assert_eq!(
        tokenize("deleted:FALSE"),
        vec![field("deleted", CompareOp::Eq, Value::Boolean(false))]
    );
    assert_eq!(
        tokenize("owner:null"),
        vec![field("owner", CompareOp::Eq, Value::Null)]
    );
}

#[test]
fn test_negated_field() {
    assert_eq!(
        tokenize("!brand:apple"),
        vec![field("brand", CompareOp::Neq, Value::String("apple".to_string()))]
    );
}

#[test]
fn test_comparison_prefixes() {
    let test_cases = vec![
        (">=100", CompareOp::Gte),
        ("<=100", CompareOp::Lte),
        (">100", CompareOp::Gt),
        ("<100", CompareOp::Lt),
        ("=100", CompareOp::Eq),
    ];

    for (rest, op) in test_cases {
        let input = format!("price:{}", rest);
        assert_eq!(
            tokenize(&input),
            vec![field("price", op, Value::Integer(100))],
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_value_may_contain_colons() {
    // Only the first colon splits field from value.
    assert_eq!(
        tokenize("time:12:30"),
        vec![field("time", CompareOp::Eq, Value::String("12:30".to_string()))]
    );
}

#[test]
fn test_wildcard_value_kept_verbatim() {
    assert_eq!(
        tokenize("name:iph*ne?"),
        vec![field(
            "name",
            CompareOp::Wildcard,
            Value::String("iph*ne?".to_string())
        )]
    );
}

#[test]
fn test_fuzzy_without_threshold() {
    assert_eq!(
        tokenize("name:ipone~"),
        vec![field("name", CompareOp::Fuzzy, Value::String("ipone".to_string()))]
    );
}

#[test]
fn test_fuzzy_with_threshold() {
    assert_eq!(
        tokenize("name:ipone~0.9"),
        vec![Token::Field {
            field: "name".to_string(),
            op: CompareOp::Fuzzy,
            value: Value::String("ipone".to_string()),
            fuzzy_threshold: Some(0.9),
        }]
    );
}

#[test]
fn test_fuzzy_with_garbage_threshold() {
    // A non-numeric threshold is dropped, not an error.
    assert_eq!(
        tokenize("name:ipone~high"),
        vec![field("name", CompareOp::Fuzzy, Value::String("ipone".to_string()))]
    );
}

// ============================================================================
// Operators, Parentheses, Text
// ============================================================================

#[test]
fn test_boolean_operators_are_case_insensitive() {
    assert_eq!(tokenize("AND")[0], Token::And);
    assert_eq!(tokenize("and")[0], Token::And);
    assert_eq!(tokenize("&&")[0], Token::And);
    assert_eq!(tokenize("OR")[0], Token::Or);
    assert_eq!(tokenize("or")[0], Token::Or);
    assert_eq!(tokenize("||")[0], Token::Or);
    assert_eq!(tokenize("NOT")[0], Token::Not);
    assert_eq!(tokenize("not")[0], Token::Not);
    assert_eq!(tokenize("!")[0], Token::Not);
}

#[test]
fn test_parentheses() {
    assert_eq!(tokenize("(")[0], Token::LParen);
    assert_eq!(tokenize(")")[0], Token::RParen);
}

#[test]
fn test_bare_term_is_text() {
    assert_eq!(tokenize("iPhone"), vec![Token::Text("iPhone".to_string())]);
}

// ============================================================================
// Quoting and Escaping
// ============================================================================

#[test]
fn test_quotes_keep_whitespace() {
    assert_eq!(
        tokenize(r#""new york""#),
        vec![Token::Text("new york".to_string())]
    );
}

#[test]
fn test_quoted_field_value() {
    assert_eq!(
        tokenize(r#"city:"new york""#),
        vec![field("city", CompareOp::Eq, Value::String("new york".to_string()))]
    );
}

#[test]
fn test_escaped_space_joins_lexeme() {
    assert_eq!(
        tokenize(r"new\ york"),
        vec![Token::Text("new york".to_string())]
    );
}

#[test]
fn test_escaped_quote_is_literal() {
    assert_eq!(
        tokenize(r#"say:\"hi\""#),
        vec![field("say", CompareOp::Eq, Value::String("\"hi\"".to_string()))]
    );
}

#[test]
fn test_empty_quotes_emit_nothing() {
    assert_eq!(
        tokenize(r#""" brand:apple"#),
        vec![field("brand", CompareOp::Eq, Value::String("apple".to_string()))]
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(tokenize(""), vec![]);
    assert_eq!(tokenize("   "), vec![]);
}

// ============================================================================
// Implicit Conjunction
// ============================================================================

#[test]
fn test_implicit_and_between_terms() {
    let tokens = tokenize("brand:apple price:>100");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1], Token::And);
}

#[test]
fn test_implicit_and_between_text_and_field() {
    let tokens = tokenize("iPhone price:>100");
    assert_eq!(tokens[0], Token::Text("iPhone".to_string()));
    assert_eq!(tokens[1], Token::And);
}

#[test]
fn test_no_double_and_around_explicit_operator() {
    let tokens = tokenize("brand:apple AND price:>100");
    assert_eq!(
        tokens.iter().filter(|t| matches!(t, Token::And)).count(),
        1
    );
}

#[test]
fn test_no_implicit_and_around_not() {
    // NOT consumes the following term; no conjunction is inserted around it.
    let tokens = tokenize("NOT brand:apple");
    assert_eq!(tokens[0], Token::Not);
    assert_eq!(tokens.len(), 2);
}

#[test]
fn test_no_implicit_and_inside_paren_edges() {
    let tokens = tokenize("( brand:apple price:>100 )");
    assert_eq!(tokens[0], Token::LParen);
    // No And after '(' or before ')', exactly one between the two fields.
    assert_eq!(
        tokens.iter().filter(|t| matches!(t, Token::And)).count(),
        1
    );
    assert_eq!(tokens[2], Token::And);
    assert_eq!(tokens[4], Token::RParen);
}

#[test]
fn test_implicit_and_before_open_paren() {
    let tokens = tokenize("brand:apple ( price:>100 OR price:<10 )");
    assert_eq!(tokens[1], Token::And);
    assert_eq!(tokens[2], Token::LParen);
}
