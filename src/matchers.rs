//! String-comparison primitives backing the query operators.
//!
//! Each matcher is a small standalone struct configured with the engine's
//! case sensitivity:
//!
//! - **[exact]** - case-fold equality for `field:value` and `!field:value`
//! - **[wildcard]** - anchored glob matching (`*`, `?`) for `field:val*`
//! - **[fuzzy]** - edit-distance similarity for `field:value~`
pub mod exact;
pub mod wildcard;
pub mod fuzzy;

pub use exact::ExactMatcher;
pub use wildcard::WildcardMatcher;
pub use fuzzy::FuzzyMatcher;
