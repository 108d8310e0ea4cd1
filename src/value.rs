use std::collections::HashMap;

/// A JSON-shaped document value.
///
/// Documents handed to the search engine are nested mappings of scalars,
/// sequences, and sub-mappings. The engine never assumes a schema: every
/// field lookup and comparison is resolved dynamically against this type.
///
/// Integers and floats are kept apart (unlike standard JSON's single
/// "number") so that query literals such as `42` and `4.5` survive
/// round-trips without losing their shape.
///
/// # Examples
///
/// ```
/// use sift_lang::Value;
/// use std::collections::HashMap;
///
/// let mut doc = HashMap::new();
/// doc.insert("name".to_string(), Value::String("iPhone".to_string()));
/// doc.insert("price".to_string(), Value::Integer(9999));
/// let document = Value::Object(doc);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON null
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Floating-point number
    Float(f64),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// UTF-8 string
    String(String),

    /// Array of values (homogeneous or heterogeneous)
    Array(Vec<Value>),

    /// Object with string keys
    Object(HashMap<String, Value>),
}

impl Value {
    /// Coerce a raw query literal into a typed scalar.
    ///
    /// Numeric-looking literals become numbers, case-insensitive
    /// `true`/`false` become booleans, case-insensitive `null` becomes null,
    /// and anything else stays a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_lang::Value;
    ///
    /// assert_eq!(Value::from_literal("42"), Value::Integer(42));
    /// assert_eq!(Value::from_literal("4.5"), Value::Float(4.5));
    /// assert_eq!(Value::from_literal("TRUE"), Value::Boolean(true));
    /// assert_eq!(Value::from_literal("null"), Value::Null);
    /// assert_eq!(Value::from_literal("iPhone"), Value::String("iPhone".to_string()));
    /// ```
    pub fn from_literal(raw: &str) -> Value {
        if let Ok(n) = raw.parse::<i64>() {
            return Value::Integer(n);
        }
        if let Ok(n) = raw.parse::<f64>() {
            // f64::from_str accepts "inf" and "NaN"; those stay strings.
            if n.is_finite() {
                return Value::Float(n);
            }
        }
        match raw.to_lowercase().as_str() {
            "true" => Value::Boolean(true),
            "false" => Value::Boolean(false),
            "null" => Value::Null,
            _ => Value::String(raw.to_string()),
        }
    }

    /// Render the value as the string used for textual comparison.
    pub fn as_string(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Float(n) => n.to_string(),
            Value::Integer(n) => n.to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Null => "null".to_string(),
            _ => format!("{:?}", self),
        }
    }

    /// The value behind `field` if this is an object.
    pub fn get(&self, field: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(field),
            _ => None,
        }
    }
}
