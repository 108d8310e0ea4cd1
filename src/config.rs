use std::collections::HashMap;

/// Search behavior configuration.
///
/// All knobs have explicit defaults; overrides are applied with the
/// chainable `with_*` constructors.
///
/// # Examples
///
/// ```
/// use sift_lang::SearchConfig;
///
/// let config = SearchConfig::new()
///     .with_fuzzy_threshold(0.9)
///     .with_weight("name", 2.0);
/// assert_eq!(config.weight("name"), 2.0);
/// assert_eq!(config.weight("price"), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Compare strings byte-for-byte instead of case-folded
    pub case_sensitive: bool,

    /// Minimum similarity for a fuzzy term to match, in `(0, 1]`.
    /// The boundary is inclusive.
    pub fuzzy_threshold: f64,

    /// Per-field score multipliers; unlisted fields weigh 1.0
    pub weights: HashMap<String, f64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            case_sensitive: false,
            fuzzy_threshold: 0.8,
            weights: HashMap::new(),
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_fuzzy_threshold(mut self, threshold: f64) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }

    pub fn with_weight(mut self, field: impl Into<String>, weight: f64) -> Self {
        self.weights.insert(field.into(), weight);
        self
    }

    /// The score multiplier for `field`, falling back to 1.0.
    pub fn weight(&self, field: &str) -> f64 {
        self.weights.get(field).copied().unwrap_or(1.0)
    }
}
