//! Value enum for dynamic field values

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

/// A dynamic value that can hold any record field type.
///
/// This enum represents all possible values that can be stored in a record
/// field. It's used in [`Record`](super::Record) to store field values
/// dynamically.
///
/// # Type Mapping
///
/// | Field Type | Rust Variant |
/// |----------------|--------------|
/// | null / absent | `Null` |
/// | Boolean | `Bool` |
/// | Whole number | `Int` |
/// | Fractional number | `Float` |
/// | Text | `String` |
/// | List of text | `List` |
///
/// # Example
///
/// ```
/// use commune_lib::model::Value;
///
/// let name = Value::from("Anna Sigurðardóttir");
/// let year = Value::from(2012i64);
/// let custody = Value::from(true);
/// let empty = Value::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
    /// List of strings (e.g. a guardian's children).
    List(Vec<String>),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
        }
    }

    /// Returns the display form used by search and export.
    ///
    /// Null becomes the empty string, numbers render in plain decimal form,
    /// and lists join their elements with `", "`.
    pub fn display(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::List(items) => items.join(", "),
        }
    }

    /// Compares two values under the table sort order.
    ///
    /// The order is total and documented, rather than inheriting whatever a
    /// host language's native `<`/`>` would do for mixed types:
    ///
    /// 1. Values of different kinds order by kind rank:
    ///    `Null < Bool < number < String < List`, where `Int` and `Float`
    ///    are a single "number" kind.
    /// 2. Booleans: `false < true`.
    /// 3. Numbers: numeric comparison with `Int` promoted to `f64`;
    ///    incomparable floats (NaN) compare as equal.
    /// 4. Strings: case-insensitive comparison of the lowercased forms,
    ///    falling back to the raw forms when the lowercased forms match.
    /// 5. Lists: elementwise by the string rule, then by length.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Int(a), Value::Float(b)) => compare_f64(*a as f64, *b),
            (Value::Float(a), Value::Int(b)) => compare_f64(*a, *b as f64),
            (Value::Float(a), Value::Float(b)) => compare_f64(*a, *b),
            (Value::String(a), Value::String(b)) => compare_str(a, b),
            (Value::List(a), Value::List(b)) => compare_lists(a, b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) => 2,
            Value::String(_) => 3,
            Value::List(_) => 4,
        }
    }
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn compare_str(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    if folded == Ordering::Equal {
        a.cmp(b)
    } else {
        folded
    }
}

fn compare_lists(a: &[String], b: &[String]) -> Ordering {
    for (left, right) in a.iter().zip(b.iter()) {
        let cmp = compare_str(left, right);
        if cmp != Ordering::Equal {
            return cmp;
        }
    }
    a.len().cmp(&b.len())
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::List(v)
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Value::List(v.into_iter().map(String::from).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_forms() {
        assert_eq!(Value::Null.display(), "");
        assert_eq!(Value::Bool(true).display(), "true");
        assert_eq!(Value::Int(2012).display(), "2012");
        assert_eq!(Value::Float(87.5).display(), "87.5");
        assert_eq!(Value::from("Austurskóli").display(), "Austurskóli");
        assert_eq!(
            Value::from(vec!["Anna", "Björn"]).display(),
            "Anna, Björn"
        );
    }

    #[test]
    fn test_kind_rank_ordering() {
        let ranked = [
            Value::Null,
            Value::Bool(true),
            Value::Int(1),
            Value::from("a"),
            Value::from(vec!["a"]),
        ];
        for pair in ranked.windows(2) {
            assert_eq!(pair[0].compare(&pair[1]), Ordering::Less);
        }
    }

    #[test]
    fn test_numbers_compare_across_variants() {
        assert_eq!(Value::Int(2).compare(&Value::Float(2.5)), Ordering::Less);
        assert_eq!(Value::Float(3.0).compare(&Value::Int(3)), Ordering::Equal);
    }

    #[test]
    fn test_strings_compare_case_insensitively() {
        assert_eq!(
            Value::from("anna").compare(&Value::from("BJÖRN")),
            Ordering::Less
        );
        // Lowercased forms equal, raw forms break the tie.
        assert_eq!(
            Value::from("Anna").compare(&Value::from("anna")),
            Ordering::Less
        );
    }
}
