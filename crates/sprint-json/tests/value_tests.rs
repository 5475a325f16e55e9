use sprint_json::{is_valid_value, Array, JsonError, Object, Value};

// ============================================================================
// Validation
// ============================================================================

#[test]
fn valid_values_are_accepted() {
    assert!(is_valid_value(&Value::Null));
    assert!(is_valid_value(&Value::Bool(true)));
    assert!(is_valid_value(&Value::Integer(42)));
    assert!(is_valid_value(&Value::Double(1.5)));
    assert!(is_valid_value(&Value::String("s".into())));
    assert!(is_valid_value(&Value::Object(Object::new())));
    assert!(is_valid_value(&Value::Array(Array::new())));
}

#[test]
fn non_finite_doubles_are_not_valid() {
    assert!(!is_valid_value(&Value::Double(f64::NAN)));
    assert!(!is_valid_value(&Value::Double(f64::INFINITY)));
    assert!(!is_valid_value(&Value::Double(f64::NEG_INFINITY)));
}

#[test]
fn put_rejects_nan() {
    let mut obj = Object::new();
    let err = obj.put("x", f64::NAN).unwrap_err();
    assert!(err.is_invalid_type(), "unexpected error: {err}");
    assert!(!obj.contains("x"));
}

#[test]
fn put_rejects_infinity() {
    let mut obj = Object::new();
    let err = obj.put("x", f64::INFINITY).unwrap_err();
    assert!(matches!(err, JsonError::InvalidType { .. }));
}

#[test]
fn put_accepts_every_supported_kind() {
    let mut nested = Object::new();
    nested.put("inner", 1).unwrap();
    let mut obj = Object::new();
    obj.put("int", 42)
        .unwrap()
        .put("str", "s")
        .unwrap()
        .put("bool", true)
        .unwrap()
        .put("null", Value::Null)
        .unwrap()
        .put("obj", nested)
        .unwrap()
        .put("arr", Array::from_values([1, 2]))
        .unwrap();
    assert_eq!(obj.len(), 6);
}

#[test]
fn push_rejects_nan() {
    let mut arr = Array::new();
    assert!(arr.push(f64::NAN).unwrap_err().is_invalid_type());
    assert!(arr.is_empty());
}

// ============================================================================
// put / put_once / put_if_not_null
// ============================================================================

#[test]
fn put_once_never_overwrites() {
    let mut obj = Object::new();
    obj.put("a", 1).unwrap().put_once("a", 2).unwrap();
    assert_eq!(obj.get("a"), Some(&Value::Integer(1)));
}

#[test]
fn put_always_overwrites() {
    let mut obj = Object::new();
    obj.put("a", 1).unwrap().put("a", 2).unwrap();
    assert_eq!(obj.get("a"), Some(&Value::Integer(2)));
}

#[test]
fn put_once_inserts_absent_key() {
    let mut obj = Object::new();
    obj.put_once("a", "first").unwrap();
    assert_eq!(obj.get_str("a"), Some("first"));
}

#[test]
fn put_once_on_existing_key_skips_validation() {
    let mut obj = Object::new();
    obj.put("a", 1).unwrap();
    assert!(obj.put_once("a", f64::NAN).is_ok());
    assert_eq!(obj.get_int("a"), Some(1));
}

#[test]
fn put_if_not_null_skips_none_and_null() {
    let mut obj = Object::new();
    obj.put_if_not_null("none", None::<i64>)
        .unwrap()
        .put_if_not_null("null", Value::Null)
        .unwrap()
        .put_if_not_null("some", Some(3))
        .unwrap();
    assert!(!obj.contains("none"));
    assert!(!obj.contains("null"));
    assert_eq!(obj.get_int("some"), Some(3));
}

// ============================================================================
// Typed accessors
// ============================================================================

#[test]
fn typed_accessors_narrow_without_coercion() {
    let mut obj = Object::new();
    obj.put("s", "5").unwrap().put("i", 5).unwrap().put("d", 5.0).unwrap();

    assert_eq!(obj.get_int("s"), None);
    assert_eq!(obj.get_str("s"), Some("5"));
    assert_eq!(obj.get_int("i"), Some(5));
    assert_eq!(obj.get_double("i"), None);
    assert_eq!(obj.get_double("d"), Some(5.0));
    assert_eq!(obj.get_int("d"), None);
}

#[test]
fn typed_accessors_fall_back_to_default() {
    let mut obj = Object::new();
    obj.put("flag", "yes").unwrap();

    assert!(!obj.get_bool_or("flag", false));
    assert!(obj.get_bool_or("missing", true));
    assert_eq!(obj.get_int_or("missing", 7), 7);
    assert_eq!(obj.get_str_or("missing", "dflt"), "dflt");
    assert_eq!(obj.get_double_or("flag", 0.5), 0.5);

    let empty = Object::new();
    assert!(obj.get_object_or("missing", &empty).is_empty());
    let empty_arr = Array::new();
    assert!(obj.get_array_or("flag", &empty_arr).is_empty());
}

#[test]
fn get_or_treats_null_as_missing() {
    let mut obj = Object::new();
    obj.put("n", Value::Null).unwrap().put("v", 1).unwrap();
    let fallback = Value::from("fallback");
    assert_eq!(obj.get_or("n", &fallback), &fallback);
    assert_eq!(obj.get_or("missing", &fallback), &fallback);
    assert_eq!(obj.get_or("v", &fallback), &Value::Integer(1));
}

#[test]
fn nested_accessors() {
    let mut inner = Object::new();
    inner.put("k", "v").unwrap();
    let mut obj = Object::new();
    obj.put("inner", inner)
        .unwrap()
        .put("list", Array::from_values(["a", "b"]))
        .unwrap();

    assert_eq!(obj.get_object("inner").and_then(|o| o.get_str("k")), Some("v"));
    assert_eq!(obj.get_array("list").map(Array::len), Some(2));
    assert_eq!(obj.get_object("list"), None);
}

// ============================================================================
// contains / is_null / clear / merge / select
// ============================================================================

#[test]
fn contains_and_is_null() {
    let mut obj = Object::new();
    obj.put("n", Value::Null).unwrap().put("v", 0).unwrap();
    assert!(obj.contains("n"));
    assert!(obj.is_null("n"));
    assert!(obj.contains("v"));
    assert!(!obj.is_null("v"));
    assert!(!obj.contains("missing"));
    assert!(!obj.is_null("missing"));
}

#[test]
fn clear_returns_previous_contents() {
    let mut obj = Object::new();
    obj.put("a", 1).unwrap().put("b", "two").unwrap();
    let previous = obj.clear();
    assert!(obj.is_empty());
    assert_eq!(previous.len(), 2);
    assert_eq!(previous.get("a"), Some(&Value::Integer(1)));
    assert_eq!(previous.get("b"), Some(&Value::String("two".into())));
}

#[test]
fn merge_keeps_left_values_on_conflict() {
    let mut left = Object::new();
    left.put("a", 1).unwrap().put("b", 2).unwrap();
    let mut right = Object::new();
    right.put("b", 20).unwrap().put("c", 30).unwrap();

    let merged = left.merge(&right);
    assert_eq!(merged.get_int("a"), Some(1));
    assert_eq!(merged.get_int("b"), Some(2));
    assert_eq!(merged.get_int("c"), Some(30));
    // Operands are untouched.
    assert_eq!(left.len(), 2);
    assert_eq!(right.get_int("b"), Some(20));
}

#[test]
fn select_copies_named_keys() {
    let mut source = Object::new();
    source.put("a", 1).unwrap().put("b", 2).unwrap().put("c", 3).unwrap();
    let picked = Object::select(&source, &["a", "c", "missing"]);
    assert_eq!(picked.len(), 3);
    assert_eq!(picked.get_int("a"), Some(1));
    assert_eq!(picked.get_int("c"), Some(3));
    assert!(picked.is_null("missing"));
    assert!(!picked.contains("b"));
}

#[test]
fn from_pairs_is_first_wins() {
    let obj = Object::from_pairs([("k", 1), ("k", 2), ("j", 3)]).unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(obj.get_int("k"), Some(1));
}

#[test]
fn from_pairs_rejects_invalid_value() {
    let err = Object::from_pairs([("k", 1.0), ("bad", f64::NAN)]).unwrap_err();
    assert!(err.is_invalid_type());
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn object_equality_is_structural() {
    let mut a = Object::new();
    a.put("x", 1).unwrap().put("y", Array::from_values([true])).unwrap();
    let mut b = Object::new();
    b.put("y", Array::from_values([true])).unwrap().put("x", 1).unwrap();
    assert_eq!(a, b);

    b.put("x", 2).unwrap();
    assert_ne!(a, b);
}

#[test]
fn integer_and_double_are_distinct() {
    assert_ne!(Value::Integer(1), Value::Double(1.0));
}

// ============================================================================
// Array
// ============================================================================

#[test]
fn array_preserves_insertion_order() {
    let mut arr = Array::new();
    arr.push("c").unwrap().push("a").unwrap().push("b").unwrap();
    let items: Vec<&str> = arr.iter().filter_map(Value::as_str).collect();
    assert_eq!(items, ["c", "a", "b"]);
}

#[test]
fn array_from_values_drops_invalid_elements() {
    let arr = Array::from_values(vec![
        Value::Integer(1),
        Value::Double(f64::NAN),
        Value::String("kept".into()),
        Value::Double(f64::INFINITY),
    ]);
    assert_eq!(arr.len(), 2);
    assert_eq!(arr.get_int(0), Some(1));
    assert_eq!(arr.get_str(1), Some("kept"));
}

#[test]
fn array_collect_is_tolerant() {
    let arr: Array = vec![Value::Double(1.0), Value::Double(f64::NAN)]
        .into_iter()
        .collect();
    assert_eq!(arr.len(), 1);
}

#[test]
fn array_try_from_values_is_strict() {
    let err = Array::try_from_values(vec![Value::Integer(1), Value::Double(f64::NAN)]).unwrap_err();
    assert!(err.is_invalid_type());
    assert_eq!(Array::try_from_values([1, 2, 3]).unwrap().len(), 3);
}

#[test]
fn array_set_and_remove() {
    let mut arr = Array::from_values([1, 2, 3]);
    assert_eq!(arr.set(1, "two").unwrap(), Some(Value::Integer(2)));
    assert_eq!(arr.set(9, 0).unwrap(), None);
    assert!(arr.set(0, f64::NAN).is_err());
    assert_eq!(arr.remove(0), Some(Value::Integer(1)));
    assert_eq!(arr.remove(5), None);
    assert_eq!(arr.get_str(0), Some("two"));
    assert_eq!(arr.len(), 2);
}

#[test]
fn array_clear_returns_previous_contents() {
    let mut arr = Array::from_values(["x"]);
    let previous = arr.clear();
    assert!(arr.is_empty());
    assert_eq!(previous, vec![Value::String("x".into())]);
}

#[test]
fn option_converts_to_null() {
    assert_eq!(Value::from(None::<&str>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::String("x".into()));
}
