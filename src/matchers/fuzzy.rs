/// Edit-distance similarity matching.
///
/// `similarity` is `1 - distance / max_len` where `distance` is the
/// Levenshtein distance between the (optionally case-folded) strings.
/// Equal strings score 1; if either side is empty and they differ, 0.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatcher {
    case_sensitive: bool,
    threshold: f64,
}

impl FuzzyMatcher {
    pub fn new(case_sensitive: bool, threshold: f64) -> Self {
        FuzzyMatcher {
            case_sensitive,
            threshold,
        }
    }

    /// True when the similarity reaches the configured threshold.
    /// The boundary is inclusive.
    pub fn matches(&self, text: &str, pattern: &str) -> bool {
        self.similarity(text, pattern) >= self.threshold
    }

    pub fn similarity(&self, text: &str, pattern: &str) -> f64 {
        let (text, pattern) = if self.case_sensitive {
            (text.to_string(), pattern.to_string())
        } else {
            (text.to_lowercase(), pattern.to_lowercase())
        };

        if text == pattern {
            return 1.0;
        }
        if text.is_empty() || pattern.is_empty() {
            return 0.0;
        }

        let a: Vec<char> = text.chars().collect();
        let b: Vec<char> = pattern.chars().collect();
        let distance = levenshtein(&a, &b);
        let max_len = a.len().max(b.len());

        1.0 - distance as f64 / max_len as f64
    }
}

/// Classic dynamic-programming edit distance with unit costs, kept to two
/// rows.
fn levenshtein(a: &[char], b: &[char]) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            current[j + 1] = if ca == cb {
                prev[j]
            } else {
                let substitute = prev[j];
                let insert = current[j];
                let delete = prev[j + 1];
                substitute.min(insert).min(delete) + 1
            };
        }
        std::mem::swap(&mut prev, &mut current);
    }

    prev[b.len()]
}

#[test]
fn test_similarity() {
    let matcher = FuzzyMatcher::new(false, 0.8);
    assert_eq!(matcher.similarity("iphone", "iPhone"), 1.0);
    assert_eq!(matcher.similarity("", "iphone"), 0.0);
    // One substitution out of six characters.
    let sim = matcher.similarity("iphone", "iphane");
    assert!((sim - (1.0 - 1.0 / 6.0)).abs() < 1e-9);
}

#[test]
fn test_threshold_is_inclusive() {
    // "abcde" vs "abcdx": distance 1, max_len 5, similarity exactly 0.8.
    let matcher = FuzzyMatcher::new(false, 0.8);
    assert!(matcher.matches("abcde", "abcdx"));
}
