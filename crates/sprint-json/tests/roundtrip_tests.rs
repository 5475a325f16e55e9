use sprint_json::{parse, parse_value, serialize, to_string, to_string_pretty, Array, Object, Value};

/// Assert that text → value → text is stable in both layouts.
fn assert_roundtrip(json: &str) {
    let value = parse_value(json).expect("parse failed");
    let compact = to_string(&value);
    let pretty = to_string_pretty(&value);
    let from_compact = parse_value(&compact).expect("reparse of compact output failed");
    let from_pretty = parse_value(&pretty).expect("reparse of indented output failed");
    assert_eq!(
        value, from_compact,
        "Roundtrip failed:\n  input:   {json}\n  compact: {compact}"
    );
    assert_eq!(
        value, from_pretty,
        "Roundtrip failed:\n  input:  {json}\n  pretty: {pretty}"
    );
}

// ============================================================================
// Primitive Roundtrips
// ============================================================================

#[test]
fn roundtrip_null() {
    assert_roundtrip("null");
}

#[test]
fn roundtrip_bools() {
    assert_roundtrip("true");
    assert_roundtrip("false");
}

#[test]
fn roundtrip_integers() {
    assert_roundtrip("0");
    assert_roundtrip("-7");
    assert_roundtrip("9223372036854775807");
    assert_roundtrip("-9223372036854775808");
}

#[test]
fn roundtrip_doubles() {
    assert_roundtrip("3.14");
    assert_roundtrip("1.0");
    assert_roundtrip("-2.5e-8");
    assert_roundtrip("1e300");
    assert_roundtrip("0.1");
}

#[test]
fn integer_and_double_tags_survive() {
    let obj = parse(r#"{"i": 1, "d": 1.0}"#).unwrap();
    let again = parse(&obj.to_string()).unwrap();
    assert_eq!(again.get("i"), Some(&Value::Integer(1)));
    assert_eq!(again.get("d"), Some(&Value::Double(1.0)));
}

// ============================================================================
// String escaping
// ============================================================================

#[test]
fn roundtrip_escapes() {
    let tricky = "quote \" backslash \\ newline \n tab \t cr \r bell \u{7} nul \u{0}";
    let mut obj = Object::new();
    obj.put("s", tricky).unwrap();
    let text = obj.to_string();
    assert!(!text.contains('\n'));
    let again = parse(&text).unwrap();
    assert_eq!(again.get_str("s"), Some(tricky));
}

#[test]
fn roundtrip_unicode() {
    assert_roundtrip(r#"{"greeting": "你好", "emoji": "😀", "accent": "café"}"#);
    assert_roundtrip(r#"["é", "😀"]"#);
}

#[test]
fn roundtrip_strings_that_look_like_literals() {
    let mut obj = Object::new();
    obj.put("a", "true")
        .unwrap()
        .put("b", "null")
        .unwrap()
        .put("c", "42")
        .unwrap()
        .put("d", "-1.5")
        .unwrap()
        .put("e", "")
        .unwrap();
    let again = parse(&obj.to_string()).unwrap();
    assert_eq!(again, obj);
}

// ============================================================================
// Structures
// ============================================================================

#[test]
fn roundtrip_nested_structures() {
    assert_roundtrip(
        r#"{
            "users": [
                {"id": 1, "name": "Alice", "roles": ["admin", "dev"]},
                {"id": 2, "name": "Bob", "roles": [], "meta": {}}
            ],
            "total": 2,
            "ratio": 0.75,
            "next": null
        }"#,
    );
}

#[test]
fn roundtrip_deep_nesting() {
    assert_roundtrip(r#"{"a":{"b":{"c":{"d":[[[{"e":1}]]]}}}}"#);
}

#[test]
fn roundtrip_built_object() {
    let mut inner = Object::new();
    inner.put("x", -0.25).unwrap();
    let mut obj = Object::new();
    obj.put("inner", inner)
        .unwrap()
        .put("list", Array::from_values([Value::from(1), Value::from("two"), Value::Null]))
        .unwrap();
    let text = serialize(&Value::Object(obj.clone()), true, 3);
    assert_eq!(parse(&text).unwrap(), obj);
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn serialization_is_idempotent() {
    let inputs = [
        r#"{"b":1,"a":[1,2,{"z":true,"y":null}]}"#,
        "{name: 'lenient', 'trailing': [1,2,],}",
        r#"{"k":1,"k":2}"#,
    ];
    for input in inputs {
        let first = parse(input).unwrap().to_string();
        let second = parse(&first).unwrap().to_string();
        assert_eq!(first, second, "not idempotent for {input}");

        let first_pretty = to_string_pretty(&parse_value(input).unwrap());
        let second_pretty = to_string_pretty(&parse_value(&first_pretty).unwrap());
        assert_eq!(first_pretty, second_pretty);
    }
}

#[test]
fn lenient_input_normalizes_to_strict_output() {
    let obj = parse("{name: 'x', n: 1,}").unwrap();
    assert_eq!(obj.to_string(), r#"{"n":1,"name":"x"}"#);
}
