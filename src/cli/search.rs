//! Run sift queries against JSON document collections

use super::{json_to_value, value_to_json, CliError};
use crate::{Lexer, Parser, SearchConfig, SearchEngine, Value};

/// Options for the search command
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// The query to run
    pub query: String,
    /// JSON input string: an array of documents, or a single document
    pub input: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
    /// Only validate syntax, don't search
    pub syntax_only: bool,
    /// Compare strings case-sensitively
    pub case_sensitive: bool,
    /// Override the fuzzy similarity threshold
    pub fuzzy_threshold: Option<f64>,
    /// Per-field score weights as `field=multiplier` pairs
    pub weights: Vec<String>,
}

/// Result of a search operation
#[derive(Debug)]
pub enum SearchOutcome {
    /// Syntax validation passed
    SyntaxValid,
    /// Ranked matches, each annotated with a `_score` field
    Results(serde_json::Value),
}

/// Execute a search operation
pub fn execute_search(options: &SearchOptions) -> Result<SearchOutcome, CliError> {
    if options.syntax_only {
        Parser::new(Lexer::new(&options.query))
            .parse()
            .map_err(CliError::Parse)?;
        return Ok(SearchOutcome::SyntaxValid);
    }

    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let json_value: serde_json::Value = serde_json::from_str(json_str).map_err(CliError::Json)?;

    let documents = match json_to_value(json_value) {
        Value::Array(docs) => docs,
        single => vec![single],
    };

    let mut config = SearchConfig::new().with_case_sensitive(options.case_sensitive);
    if let Some(threshold) = options.fuzzy_threshold {
        config = config.with_fuzzy_threshold(threshold);
    }
    for pair in &options.weights {
        let (field, weight) = parse_weight(pair)?;
        config = config.with_weight(field, weight);
    }

    let engine = SearchEngine::new(documents, config);
    let hits = engine.search(&options.query);

    let results: Vec<serde_json::Value> = hits
        .into_iter()
        .map(|hit| {
            let mut json = value_to_json(hit.document);
            if let serde_json::Value::Object(ref mut map) = json {
                map.insert("_score".to_string(), score_json(hit.score));
            }
            json
        })
        .collect();

    Ok(SearchOutcome::Results(serde_json::Value::Array(results)))
}

fn score_json(score: f64) -> serde_json::Value {
    serde_json::Number::from_f64(score)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

fn parse_weight(pair: &str) -> Result<(String, f64), CliError> {
    let (field, weight) = pair
        .split_once('=')
        .ok_or_else(|| CliError::InvalidWeight(pair.to_string()))?;
    let weight: f64 = weight
        .parse()
        .map_err(|_| CliError::InvalidWeight(pair.to_string()))?;
    Ok((field.to_string(), weight))
}
