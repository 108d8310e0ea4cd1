use regex::Regex;

/// Glob-style pattern matching: `*` matches any run of characters, `?`
/// matches exactly one, everything else is literal.
///
/// Patterns are anchored at both ends, so `iph*` matches `iphone` but
/// `hone` does not match `iph*one`.
#[derive(Debug, Clone, Copy)]
pub struct WildcardMatcher {
    case_sensitive: bool,
}

impl WildcardMatcher {
    pub fn new(case_sensitive: bool) -> Self {
        WildcardMatcher { case_sensitive }
    }

    pub fn matches(&self, text: &str, pattern: &str) -> bool {
        let (text, pattern) = if self.case_sensitive {
            (text.to_string(), pattern.to_string())
        } else {
            (text.to_lowercase(), pattern.to_lowercase())
        };

        match translate(&pattern) {
            Some(re) => re.is_match(&text),
            None => false,
        }
    }
}

/// Translate a glob pattern into an anchored regex.
fn translate(pattern: &str) -> Option<Regex> {
    let mut translated = String::with_capacity(pattern.len() + 2);
    translated.push('^');
    for ch in pattern.chars() {
        match ch {
            '*' => translated.push_str(".*"),
            '?' => translated.push('.'),
            ch => translated.push_str(&regex::escape(&ch.to_string())),
        }
    }
    translated.push('$');

    Regex::new(&translated).ok()
}

#[test]
fn test_anchored_globs() {
    let matcher = WildcardMatcher::new(false);
    assert!(matcher.matches("iphone", "iph*"));
    assert!(matcher.matches("iphone", "i?hone"));
    assert!(matcher.matches("iphone", "*phone"));
    // Partial matches do not count.
    assert!(!matcher.matches("iphone 15", "iph*e"));
    // Regex metacharacters in the pattern are literal.
    assert!(matcher.matches("a.b", "a.b"));
    assert!(!matcher.matches("axb", "a.b"));
}
