use crate::ast::{CompareOp, Token};
use crate::value::Value;

/// Comparison prefixes checked against a field value, longest first so that
/// `>=` wins over `>`.
const COMPARE_PREFIXES: [(&str, CompareOp); 5] = [
    (">=", CompareOp::Gte),
    ("<=", CompareOp::Lte),
    (">", CompareOp::Gt),
    ("<", CompareOp::Lt),
    ("=", CompareOp::Eq),
];

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Read one raw lexeme: characters up to the next unquoted whitespace.
    ///
    /// Double quotes toggle quoted mode and are stripped; inside quotes
    /// whitespace is literal. A backslash emits the following character
    /// verbatim (including quotes) and is itself dropped.
    fn read_lexeme(&mut self) -> String {
        let mut result = String::new();
        let mut in_quotes = false;

        while let Some(ch) = self.current_char() {
            match ch {
                '\\' => {
                    self.advance();
                    if let Some(escaped) = self.current_char() {
                        result.push(escaped);
                        self.advance();
                    }
                }
                '"' => {
                    in_quotes = !in_quotes;
                    self.advance();
                }
                c if c.is_whitespace() && !in_quotes => break,
                c => {
                    result.push(c);
                    self.advance();
                }
            }
        }

        result
    }

    /// Scan the whole input into tokens, with implicit conjunctions inserted
    /// between adjacent terms.
    ///
    /// The lexer is total: any input produces a token sequence.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        self.skip_whitespace();
        while self.current_char().is_some() {
            let lexeme = self.read_lexeme();
            if !lexeme.is_empty() {
                tokens.push(classify(&lexeme));
            }
            self.skip_whitespace();
        }

        insert_implicit_and(tokens)
    }
}

/// Classify a raw lexeme into a token.
fn classify(lexeme: &str) -> Token {
    // A colon anywhere makes this a field query; only the first colon splits,
    // so values may themselves contain colons.
    if let Some((field, rest)) = lexeme.split_once(':') {
        return classify_field(field, rest);
    }

    match lexeme.to_uppercase().as_str() {
        "AND" | "&&" => Token::And,
        "OR" | "||" => Token::Or,
        "NOT" | "!" => Token::Not,
        _ => match lexeme {
            "(" => Token::LParen,
            ")" => Token::RParen,
            _ => Token::Text(lexeme.to_string()),
        },
    }
}

fn classify_field(field: &str, rest: &str) -> Token {
    // Negated field: !brand:apple
    if let Some(stripped) = field.strip_prefix('!') {
        return Token::Field {
            field: stripped.to_string(),
            op: CompareOp::Neq,
            value: Value::from_literal(rest),
            fuzzy_threshold: None,
        };
    }

    // Relational prefix: price:>=100
    for (prefix, op) in COMPARE_PREFIXES {
        if let Some(stripped) = rest.strip_prefix(prefix) {
            return Token::Field {
                field: field.to_string(),
                op,
                value: Value::from_literal(stripped),
                fuzzy_threshold: None,
            };
        }
    }

    // Wildcard pattern: name:iph* -- the pattern is kept verbatim
    if rest.contains('*') {
        return Token::Field {
            field: field.to_string(),
            op: CompareOp::Wildcard,
            value: Value::String(rest.to_string()),
            fuzzy_threshold: None,
        };
    }

    // Fuzzy match with optional threshold: name:ipone~ or name:ipone~0.9
    if let Some((value, threshold_part)) = rest.split_once('~') {
        let fuzzy_threshold = threshold_part
            .split('~')
            .next()
            .and_then(|t| t.parse::<f64>().ok());
        return Token::Field {
            field: field.to_string(),
            op: CompareOp::Fuzzy,
            value: Value::String(value.to_string()),
            fuzzy_threshold,
        };
    }

    Token::Field {
        field: field.to_string(),
        op: CompareOp::Eq,
        value: Value::from_literal(rest),
        fuzzy_threshold: None,
    }
}

/// Insert an `And` between two adjacent tokens unless the left side is an
/// operator or parenthesis, or the right side is an operator or a closing
/// parenthesis. This is what lets `brand:apple price:>=100` read as a
/// conjunction.
fn insert_implicit_and(tokens: Vec<Token>) -> Vec<Token> {
    let mut result = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        let needs_and = match (&token, iter.peek()) {
            (Token::And | Token::Or | Token::Not | Token::LParen | Token::RParen, _) => false,
            (_, Some(Token::And | Token::Or | Token::Not | Token::RParen)) => false,
            (_, Some(_)) => true,
            (_, None) => false,
        };

        result.push(token);
        if needs_and {
            result.push(Token::And);
        }
    }

    result
}

#[test]
fn test_operator_lexemes() {
    assert_eq!(classify("AND"), Token::And);
    assert_eq!(classify("&&"), Token::And);
    assert_eq!(classify("or"), Token::Or);
    assert_eq!(classify("!"), Token::Not);
    assert_eq!(classify("("), Token::LParen);
    assert_eq!(classify(")"), Token::RParen);
}

#[test]
fn test_quoted_lexeme_keeps_whitespace() {
    let tokens = Lexer::new(r#"city:"new york""#).tokenize();
    assert_eq!(
        tokens,
        vec![Token::Field {
            field: "city".to_string(),
            op: CompareOp::Eq,
            value: Value::String("new york".to_string()),
            fuzzy_threshold: None,
        }]
    );
}
