use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::{Decimal, prelude::FromPrimitive};

use crate::{
    ast::{CompareOp, Expr},
    config::SearchConfig,
    matchers::{ExactMatcher, FuzzyMatcher, WildcardMatcher},
    value::Value,
};

/// Score multiplier for queries that pair `rating` with `priceRange`
/// directly under the root AND. Nested occurrences do not qualify.
const RATING_PRICE_BONUS: f64 = 1.2;

/// Glyphs that mark an ordinal price-tier string such as `￥￥￥`.
const TIER_GLYPHS: [char; 5] = ['￥', '¥', '$', '€', '£'];

/// First run of digits with an optional decimal part, e.g. `512` in `512GB`.
static NUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]*\.?[0-9]+").expect("numeric run pattern"));

/// The verdict for one document against one query tree.
///
/// `score` is a ranking signal, not a probability: per-field weights and the
/// combination bonus can push it above 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    pub matched: bool,
    pub score: f64,
}

impl MatchResult {
    /// The no-match result.
    pub fn miss() -> Self {
        MatchResult {
            matched: false,
            score: 0.0,
        }
    }
}

/// The query evaluator.
///
/// Walks a parsed expression tree against one document at a time. Evaluation
/// is pure: no state is carried between documents, so one evaluator can score
/// a whole document set, including in parallel.
pub struct Evaluator {
    config: SearchConfig,
    exact: ExactMatcher,
    wildcard: WildcardMatcher,
    fuzzy: FuzzyMatcher,
}

impl Evaluator {
    pub fn new(config: SearchConfig) -> Self {
        let exact = ExactMatcher::new(config.case_sensitive);
        let wildcard = WildcardMatcher::new(config.case_sensitive);
        let fuzzy = FuzzyMatcher::new(config.case_sensitive, config.fuzzy_threshold);
        Evaluator {
            config,
            exact,
            wildcard,
            fuzzy,
        }
    }

    /// Evaluate a query tree against a document.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_lang::{Evaluator, Lexer, Parser, SearchConfig, Value};
    /// use std::collections::HashMap;
    ///
    /// let mut doc = HashMap::new();
    /// doc.insert("price".to_string(), Value::Integer(9999));
    /// let doc = Value::Object(doc);
    ///
    /// let query = Parser::new(Lexer::new("price:>100")).parse().unwrap();
    /// let evaluator = Evaluator::new(SearchConfig::default());
    /// assert!(evaluator.evaluate(&doc, &query).matched);
    /// ```
    pub fn evaluate(&self, doc: &Value, query: &Expr) -> MatchResult {
        let mut result = self.eval_node(doc, query);

        // Combination bonus: rating and priceRange as the two immediate
        // children of the root AND. The children are inspected structurally,
        // never evaluated here, so the AND short-circuit stands.
        if let Expr::And { left, right } = query {
            let has_rating =
                is_field_query(left, "rating") || is_field_query(right, "rating");
            let has_price_range =
                is_field_query(left, "priceRange") || is_field_query(right, "priceRange");
            if has_rating && has_price_range {
                result.score *= RATING_PRICE_BONUS;
            }
        }

        result
    }

    fn eval_node(&self, doc: &Value, node: &Expr) -> MatchResult {
        match node {
            Expr::And { left, right } => {
                let left_result = self.eval_node(doc, left);
                // Short-circuit: a failed left side never evaluates the right.
                if !left_result.matched {
                    return MatchResult::miss();
                }
                let right_result = self.eval_node(doc, right);
                MatchResult {
                    matched: left_result.matched && right_result.matched,
                    score: (left_result.score + right_result.score) / 2.0,
                }
            }

            Expr::Or { left, right } => {
                let left_result = self.eval_node(doc, left);
                let right_result = self.eval_node(doc, right);
                MatchResult {
                    matched: left_result.matched || right_result.matched,
                    score: left_result.score.max(right_result.score),
                }
            }

            Expr::Not { operand } => {
                let result = self.eval_node(doc, operand);
                MatchResult {
                    matched: !result.matched,
                    score: if result.matched { 0.0 } else { 1.0 },
                }
            }

            Expr::Field { field, op, value } => {
                let mut result = self.eval_field(doc, field, *op, value);
                result.score *= self.config.weight(field);
                result
            }

            Expr::Text(value) => self.eval_text(doc, value),
        }
    }

    fn eval_field(
        &self,
        doc: &Value,
        field: &str,
        op: CompareOp,
        query_value: &Value,
    ) -> MatchResult {
        let Some(field_value) = resolve_path(doc, field) else {
            return MatchResult {
                matched: op == CompareOp::Neq,
                score: 0.0,
            };
        };

        // A sequence-valued field matches through its first satisfying
        // element, in order.
        if let Value::Array(items) = field_value {
            for item in items {
                let result = self.compare(item, op, query_value);
                if result.matched {
                    return result;
                }
            }
            return MatchResult::miss();
        }

        self.compare(field_value, op, query_value)
    }

    /// Probe every top-level field with an equality comparison; the first
    /// match wins. Keys are visited in sorted order so the winner is
    /// deterministic.
    fn eval_text(&self, doc: &Value, value: &str) -> MatchResult {
        let Value::Object(map) = doc else {
            return MatchResult::miss();
        };

        let needle = Value::String(value.to_string());
        let mut fields: Vec<&String> = map.keys().collect();
        fields.sort();

        for field in fields {
            let result = self.eval_field(doc, field, CompareOp::Eq, &needle);
            if result.matched {
                return result;
            }
        }

        MatchResult::miss()
    }

    fn compare(&self, field_value: &Value, op: CompareOp, query_value: &Value) -> MatchResult {
        // Absent and null values only satisfy negation.
        if matches!(field_value, Value::Null) {
            return MatchResult {
                matched: op == CompareOp::Neq,
                score: 0.0,
            };
        }

        // Numeric comparison whenever both sides yield a number, including
        // numbers embedded in strings ("512GB"). Wildcard and fuzzy terms
        // fall through to the string path.
        if let (Some(field_num), Some(query_num)) =
            (extract_number(field_value), extract_number(query_value))
        {
            if let Some(matched) = relational(op, &field_num, &query_num) {
                return MatchResult {
                    matched,
                    score: 1.0,
                };
            }
        }

        // Price-tier strings compare by glyph count: ￥￥￥￥ > ￥￥￥.
        if let (Value::String(field_str), Value::String(query_str)) = (field_value, query_value) {
            if let Some((field_tier, query_tier)) = tier_levels(field_str, query_str) {
                let matched = relational(op, &field_tier, &query_tier).unwrap_or(false);
                return MatchResult {
                    matched,
                    score: 1.0,
                };
            }
        }

        let field_str = field_value.as_string();
        let query_str = query_value.as_string();

        match op {
            CompareOp::Eq => MatchResult {
                matched: self.exact.matches(&field_str, &query_str),
                score: 1.0,
            },
            CompareOp::Neq => MatchResult {
                matched: !self.exact.matches(&field_str, &query_str),
                score: 1.0,
            },
            CompareOp::Wildcard => MatchResult {
                matched: self.wildcard.matches(&field_str, &query_str),
                score: 0.8,
            },
            CompareOp::Fuzzy => {
                let similarity = self.fuzzy.similarity(&field_str, &query_str);
                MatchResult {
                    matched: similarity >= self.config.fuzzy_threshold,
                    score: similarity,
                }
            }
            // Ordering operators on non-numeric, non-tier values never match.
            CompareOp::Gt | CompareOp::Gte | CompareOp::Lt | CompareOp::Lte => {
                MatchResult::miss()
            }
        }
    }
}

fn is_field_query(node: &Expr, name: &str) -> bool {
    matches!(node, Expr::Field { field, .. } if field == name)
}

/// Resolve a dot-separated path against a document.
///
/// Sequences resolve existentially: the first element with a defined value
/// for the current segment wins, and scalar elements pass through unchanged.
/// Returns `None` when the path runs into null or a missing key.
pub fn resolve_path<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    let mut value = doc;

    for part in path.split('.') {
        if matches!(value, Value::Null) {
            return None;
        }

        if let Value::Array(items) = value {
            return items.iter().find_map(|item| match item {
                Value::Object(_) | Value::Array(_) => resolve_path(item, part),
                scalar => Some(scalar),
            });
        }

        value = value.get(part)?;
    }

    Some(value)
}

/// Apply a relational operator; `None` for the pattern operators, which have
/// no relational reading.
fn relational<T: PartialOrd>(op: CompareOp, a: &T, b: &T) -> Option<bool> {
    match op {
        CompareOp::Eq => Some(a == b),
        CompareOp::Neq => Some(a != b),
        CompareOp::Gt => Some(a > b),
        CompareOp::Gte => Some(a >= b),
        CompareOp::Lt => Some(a < b),
        CompareOp::Lte => Some(a <= b),
        CompareOp::Wildcard | CompareOp::Fuzzy => None,
    }
}

/// Pull a number out of a value: numbers directly, strings through their
/// first numeric run. Decimal arithmetic keeps integer/float mixes exact.
fn extract_number(value: &Value) -> Option<Decimal> {
    match value {
        Value::Integer(n) => Some(Decimal::from(*n)),
        Value::Float(n) => Decimal::from_f64(*n),
        Value::String(s) => {
            let run = NUMERIC_RUN.find(s)?.as_str();
            run.parse::<Decimal>()
                .ok()
                .or_else(|| run.parse::<f64>().ok().and_then(Decimal::from_f64))
        }
        _ => None,
    }
}

/// Tier levels for two strings sharing a leading currency glyph.
fn tier_levels(field: &str, value: &str) -> Option<(usize, usize)> {
    let glyph = field.chars().next()?;
    if !TIER_GLYPHS.contains(&glyph) || !value.starts_with(glyph) {
        return None;
    }

    let level = |s: &str| s.chars().take_while(|c| *c == glyph).count();
    Some((level(field), level(value)))
}
