//! Pure classification of decoded JSON values.

use crate::types::{PrimitiveKind, TypeDescriptor};
use serde_json::{Map, Number, Value};

/// Result of classifying one value.
///
/// Objects need a name and a registry, so classification stops there and
/// hands the map back to the caller. Non-empty arrays hand back their first
/// element, which alone decides the element type.
#[derive(Debug, PartialEq)]
pub enum Classified<'a> {
    Resolved(TypeDescriptor),
    Object(&'a Map<String, Value>),
    ArrayOf(&'a Value),
}

/// Classify a single value without recursing into containers.
#[must_use]
pub fn classify(value: &Value) -> Classified<'_> {
    match value {
        Value::Null => Classified::Resolved(TypeDescriptor::any()),
        Value::Bool(_) => Classified::Resolved(TypeDescriptor::Primitive(PrimitiveKind::Bool)),
        Value::String(_) => Classified::Resolved(TypeDescriptor::Primitive(PrimitiveKind::String)),
        Value::Number(n) => Classified::Resolved(TypeDescriptor::Primitive(number_kind(n))),
        Value::Array(items) => match items.first() {
            None => Classified::Resolved(TypeDescriptor::slice_of(TypeDescriptor::any())),
            Some(first) => Classified::ArrayOf(first),
        },
        Value::Object(map) => Classified::Object(map),
    }
}

/// Fully resolve a value that contains no object along its first-element
/// chain. Returns `None` when an object would need a named type.
#[must_use]
pub fn classify_type(value: &Value) -> Option<TypeDescriptor> {
    match classify(value) {
        Classified::Resolved(ty) => Some(ty),
        Classified::ArrayOf(first) => classify_type(first).map(TypeDescriptor::slice_of),
        Classified::Object(_) => None,
    }
}

/// `int` when the number has no fractional part, `float64` otherwise.
/// `1.0` is an `int`: the decoded value carries no trace of the source
/// spelling beyond its magnitude.
fn number_kind(n: &Number) -> PrimitiveKind {
    if n.is_i64() || n.is_u64() {
        return PrimitiveKind::Int;
    }
    if n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0) {
        PrimitiveKind::Int
    } else {
        PrimitiveKind::Float64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolved(value: &Value) -> TypeDescriptor {
        match classify(value) {
            Classified::Resolved(ty) => ty,
            other => panic!("expected a resolved type, got {other:?}"),
        }
    }

    #[test]
    fn scalars() {
        assert_eq!(TypeDescriptor::any(), resolved(&json!(null)));
        assert_eq!(
            TypeDescriptor::Primitive(PrimitiveKind::Bool),
            resolved(&json!(false))
        );
        assert_eq!(
            TypeDescriptor::Primitive(PrimitiveKind::String),
            resolved(&json!("asdf"))
        );
    }

    #[test]
    fn numbers_split_on_fractional_part() {
        let int: TypeDescriptor = TypeDescriptor::Primitive(PrimitiveKind::Int);
        let float: TypeDescriptor = TypeDescriptor::Primitive(PrimitiveKind::Float64);
        assert_eq!(int, resolved(&json!(1233)));
        assert_eq!(int, resolved(&json!(-321)));
        assert_eq!(int, resolved(&json!(u64::MAX)));
        assert_eq!(float, resolved(&json!(1233.23)));
        assert_eq!(float, resolved(&json!(-0.5)));
    }

    #[test]
    fn integral_float_is_int() {
        let value: Value = serde_json::from_str("1.0").unwrap();
        assert_eq!(TypeDescriptor::Primitive(PrimitiveKind::Int), resolved(&value));
    }

    #[test]
    fn empty_array_is_slice_of_any() {
        assert_eq!(
            TypeDescriptor::slice_of(TypeDescriptor::any()),
            resolved(&json!([]))
        );
    }

    #[test]
    fn non_empty_array_defers_to_first_element() {
        let value: Value = json!(["go", 1, true]);
        assert_eq!(Classified::ArrayOf(&json!("go")), classify(&value));
    }

    #[test]
    fn object_is_deferred() {
        let value: Value = json!({ "a": 1 });
        assert!(matches!(classify(&value), Classified::Object(map) if map.len() == 1));
    }

    #[test]
    fn classify_type_resolves_nested_arrays() {
        let expected: TypeDescriptor = TypeDescriptor::slice_of(TypeDescriptor::slice_of(
            TypeDescriptor::Primitive(PrimitiveKind::Float64),
        ));
        assert_eq!(Some(expected), classify_type(&json!([[1.5, 2], [3]])));
    }

    #[test]
    fn classify_type_first_element_only() {
        let expected: TypeDescriptor =
            TypeDescriptor::slice_of(TypeDescriptor::Primitive(PrimitiveKind::Int));
        assert_eq!(Some(expected), classify_type(&json!([3, 123.3, "x"])));
    }

    #[test]
    fn classify_type_stops_at_objects() {
        assert_eq!(None, classify_type(&json!({})));
        assert_eq!(None, classify_type(&json!([{ "name": "John" }])));
    }
}
