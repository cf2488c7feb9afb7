use confval_core::{Dict, Kind, Value};

/// Helper: the scenario document used across navigation tests.
fn sample() -> Value {
    let inner: Value = [("port", Value::from(7799))].into_iter().collect();
    let nested: Value = [("inner", inner)].into_iter().collect();
    [
        ("name", Value::from("X")),
        ("port", Value::from(7788)),
        ("debug", Value::from(true)),
        ("modules", Value::from(vec!["m1"])),
        ("nested", nested),
        ("nothing", Value::Null),
    ]
    .into_iter()
    .collect()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn default_is_null() {
    assert_eq!(Value::default(), Value::Null);
    assert_eq!(Value::from(()), Value::Null);
}

#[test]
fn from_primitives() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(42u8), Value::Number(42.0));
    assert_eq!(Value::from(-7i64), Value::Number(-7.0));
    assert_eq!(Value::from(1.5f32), Value::Number(1.5));
    assert_eq!(Value::from("hi"), Value::String("hi".to_string()));
    assert_eq!(Value::from(String::from("hi")), Value::String("hi".to_string()));
}

#[test]
fn from_option() {
    assert_eq!(Value::from(Some(3)), Value::Number(3.0));
    assert_eq!(Value::from(None::<bool>), Value::Null);
}

#[test]
fn from_vec_builds_list() {
    let v = Value::from(vec![1, 2, 3]);
    assert_eq!(
        v,
        Value::List(vec![
            Value::Number(1.0),
            Value::Number(2.0),
            Value::Number(3.0)
        ])
    );
}

#[test]
fn collect_list() {
    let v: Value = (0..3).map(Value::from).collect();
    assert_eq!(v.as_list().map(|l| l.len()), Some(3));
}

#[test]
fn collect_dict_last_write_wins() {
    let v: Value = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();
    let dict = v.as_dict().unwrap();
    assert_eq!(dict.len(), 2);
    assert_eq!(v.get("a"), &Value::Number(3.0));
    // The overwritten key keeps its original slot.
    let keys: Vec<&str> = dict.keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "b"]);
}

#[test]
fn kind_reports_active_variant() {
    assert_eq!(Value::Null.kind(), Kind::Null);
    assert_eq!(Value::from(false).kind(), Kind::Bool);
    assert_eq!(Value::from(1).kind(), Kind::Number);
    assert_eq!(Value::from("s").kind(), Kind::String);
    assert_eq!(Value::List(vec![]).kind(), Kind::List);
    assert_eq!(Value::Dict(Dict::new()).kind(), Kind::Dict);
    assert_eq!(Kind::Dict.to_string(), "dict");
}

#[test]
fn dict_equality_ignores_order() {
    let a: Value = [("x", 1), ("y", 2)].into_iter().collect();
    let b: Value = [("y", 2), ("x", 1)].into_iter().collect();
    assert_eq!(a, b);
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn get_present_key() {
    let v = sample();
    assert_eq!(v.get("name"), &Value::from("X"));
    assert_eq!(v.get(String::from("port")), &Value::Number(7788.0));
}

#[test]
fn get_missing_key_is_null() {
    assert!(sample().get("missing").is_null());
}

#[test]
fn get_index() {
    let v = sample();
    assert_eq!(v.get("modules").get(0), &Value::from("m1"));
    assert!(v.get("modules").get(1).is_null());
}

#[test]
fn get_on_wrong_shape_is_null() {
    let v = sample();
    assert!(v.get(0).is_null());
    assert!(v.get("modules").get("key").is_null());
    assert!(v.get("port").get("x").is_null());
    assert!(Value::Null.get("x").is_null());
}

#[test]
fn chained_missing_path_stays_null() {
    let v = sample();
    assert!(v.get("missing").get("a").get(3).get("b").is_null());
    assert_eq!(
        v.get("nested").get("inner").get("port"),
        &Value::Number(7799.0)
    );
}

#[test]
fn index_operator_matches_get() {
    let v = sample();
    assert_eq!(&v["nested"]["inner"]["port"], v.get("nested").get("inner").get("port"));
    assert_eq!(&v["modules"][0], v.get("modules").get(0));
    assert!(v["missing"]["deeper"].is_null());
}

#[test]
fn find_distinguishes_missing_from_null() {
    let v = sample();
    assert_eq!(v.find("nothing"), Some(&Value::Null));
    assert_eq!(v.find("missing"), None);
    assert!(v.contains_key("nothing"));
    assert!(!v.contains_key("missing"));
    assert!(!Value::from(1).contains_key("nothing"));
}

#[test]
fn get_path_walks_dicts_and_lists() {
    let v = sample();
    assert_eq!(v.get_path("nested.inner.port"), &Value::Number(7799.0));
    assert_eq!(v.get_path("modules.0"), &Value::from("m1"));
    assert!(v.get_path("modules.x").is_null());
    assert!(v.get_path("nested.missing.port").is_null());
    assert_eq!(v.get_path(""), &v);
}

#[test]
fn get_path_numeric_key_on_dict() {
    let v: Value = [("0", "zero")].into_iter().collect();
    assert_eq!(v.get_path("0"), &Value::from("zero"));
}

// ============================================================================
// Accessors
// ============================================================================

#[test]
fn exact_kind_accessors() {
    let v = sample();
    assert_eq!(v.get("debug").as_bool(), Some(true));
    assert_eq!(v.get("port").as_f64(), Some(7788.0));
    assert_eq!(v.get("name").as_str(), Some("X"));
    assert!(v.get("modules").as_list().is_some());
    assert!(v.get("nested").as_dict().is_some());
    assert_eq!(v.get("port").as_str(), None);
    assert_eq!(v.get("name").as_bool(), None);
}

#[test]
fn predicates() {
    let v = sample();
    assert!(v.is_dict());
    assert!(v.get("modules").is_list());
    assert!(v.get("name").is_string());
    assert!(v.get("port").is_number());
    assert!(v.get("debug").is_bool());
    assert!(v.get("nothing").is_null());
}

#[test]
fn value_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
}

// ============================================================================
// serde
// ============================================================================

/// Yields `items` while claiming an enormous exact length.
struct OverstatedLen(std::vec::IntoIter<i64>);

impl Iterator for OverstatedLen {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, Some(usize::MAX))
    }
}

#[test]
fn deserialize_ignores_oversized_length_hint() {
    use serde::de::value::{Error, SeqDeserializer};
    use serde::Deserialize;

    let seq = SeqDeserializer::<_, Error>::new(OverstatedLen(vec![1, 2, 3].into_iter()));
    let value = Value::deserialize(seq).unwrap();
    assert_eq!(value, Value::from(vec![1, 2, 3]));
}
