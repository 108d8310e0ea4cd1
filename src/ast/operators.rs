/// Comparison operators attached to a field query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    // Relational
    /// Equal (`field:value`)
    Eq,

    /// Not equal (`!field:value`)
    Neq,

    /// Greater than (`field:>value`)
    Gt,

    /// Greater than or equal (`field:>=value`)
    Gte,

    /// Less than (`field:<value`)
    Lt,

    /// Less than or equal (`field:<=value`)
    Lte,

    // Pattern
    /// Glob-style pattern match (`field:val*`)
    Wildcard,

    /// Edit-distance similarity match (`field:value~` or `field:value~0.9`)
    Fuzzy,
}
