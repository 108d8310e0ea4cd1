use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    config::SearchConfig, evaluator::Evaluator, lexer::Lexer, parser::Parser, value::Value,
};

/// Document fields probed when removing by identifier, in order.
const ID_FIELDS: [&str; 3] = ["id", "_id", "uid"];

/// A matched document together with its relevance score.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub document: Value,
    pub score: f64,
}

/// The search facade: a document collection plus a configured evaluator.
///
/// Queries are parsed once and evaluated against every document in parallel;
/// matches come back sorted by score, descending, with ties keeping their
/// insertion order.
///
/// # Examples
///
/// ```
/// use sift_lang::{SearchConfig, SearchEngine, Value};
/// use std::collections::HashMap;
///
/// let doc = |name: &str, price: i64| {
///     let mut map = HashMap::new();
///     map.insert("name".to_string(), Value::String(name.to_string()));
///     map.insert("price".to_string(), Value::Integer(price));
///     Value::Object(map)
/// };
///
/// let engine = SearchEngine::new(
///     vec![doc("iPhone", 9999), doc("MacBook", 19999)],
///     SearchConfig::default(),
/// );
///
/// let hits = engine.search("price:>10000");
/// assert_eq!(hits.len(), 1);
/// ```
pub struct SearchEngine {
    documents: Vec<Value>,
    evaluator: Evaluator,
}

impl SearchEngine {
    pub fn new(documents: Vec<Value>, config: SearchConfig) -> Self {
        SearchEngine {
            documents,
            evaluator: Evaluator::new(config),
        }
    }

    /// Run a query over the collection.
    ///
    /// A query that fails to parse is logged and yields an empty result set;
    /// callers never observe a partial or failed search.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let tree = match Parser::new(Lexer::new(query)).parse() {
            Ok(tree) => tree,
            Err(e) => {
                warn!(query, error = %e, "query rejected");
                return Vec::new();
            }
        };

        // Score every document in parallel; collect preserves input order,
        // so the stable sort keeps ties in insertion order.
        let mut hits: Vec<SearchHit> = self
            .documents
            .par_iter()
            .filter_map(|doc| {
                let result = self.evaluator.evaluate(doc, &tree);
                result.matched.then(|| SearchHit {
                    document: doc.clone(),
                    score: result.score,
                })
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(query, hits = hits.len(), "search complete");
        hits
    }

    /// Append a document to the collection.
    pub fn add_document(&mut self, doc: Value) {
        self.documents.push(doc);
    }

    /// Remove the first document whose `id`, `_id`, or `uid` field equals
    /// the identifier. Returns whether a removal occurred.
    pub fn remove_document(&mut self, id: &Value) -> bool {
        let position = self.documents.iter().position(|doc| {
            ID_FIELDS
                .iter()
                .any(|field| doc.get(field).is_some_and(|v| v == id))
        });

        match position {
            Some(index) => {
                self.documents.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of documents currently held.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
