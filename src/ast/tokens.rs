use crate::ast::CompareOp;
use crate::value::Value;

/// Lexical token produced by the lexer.
///
/// A query string is scanned into a flat sequence of these before the parser
/// arranges them into an expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A field query: path, comparison operator, and typed value
    ///
    /// # Examples
    /// ```text
    /// brand:apple          Field { field: "brand", op: Eq, .. }
    /// price:>=100          Field { field: "price", op: Gte, .. }
    /// name:iph*            Field { field: "name", op: Wildcard, .. }
    /// name:ipone~0.8       Field { field: "name", op: Fuzzy, .. }
    /// !category:phone      Field { field: "category", op: Neq, .. }
    /// ```
    Field {
        /// Dot-separated path into the document
        field: String,
        /// How the resolved value is compared
        op: CompareOp,
        /// The right-hand side of the comparison
        value: Value,
        /// Optional per-field similarity threshold from a `value~0.9` suffix.
        /// Carried through tokenization but not consulted during evaluation;
        /// the global threshold applies.
        fuzzy_threshold: Option<f64>,
    },

    /// Free text matched against every top-level field
    ///
    /// # Examples
    /// ```text
    /// iPhone
    /// "new york"
    /// ```
    Text(String),

    /// Conjunction (`AND` or `&&`, case-insensitive; also inserted
    /// implicitly between adjacent terms)
    And,

    /// Disjunction (`OR` or `||`, case-insensitive)
    Or,

    /// Negation (`NOT` or `!`, case-insensitive)
    Not,

    /// Left parenthesis for grouping
    LParen,

    /// Right parenthesis
    RParen,
}
