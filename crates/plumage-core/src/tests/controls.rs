use crate::*;
use serde_json::json;

#[test]
fn defaults_carry_editor_values() {
    let c = StyleControls::default();
    assert_eq!(c.get_str("node.content"), Some("data(id)"));
    assert_eq!(c.get_f64("node.width"), Some(25.0));
    assert_eq!(c.get_str("edge.curveStyle"), Some("haystack"));
    assert_eq!(c.get_str("encoding.palette"), Some("pastel"));
    assert_eq!(c.get_f64("encoding.maxSize"), Some(50.0));
    assert!(c.is_enabled("arrows.enabled"));
    assert!(!c.is_enabled("labels.enabled"));
    assert_eq!(c.get_str("arrows.mid-target.fill"), Some("filled"));
}

#[test]
fn null_reads_as_absent() {
    let c = StyleControls::default();
    assert!(c.get("edge.lineWidth").is_none());
    assert!(c.get("node.nope").is_none());
    assert!(c.get("node.width.deeper").is_none());
}

#[test]
fn deep_merge_overrides_leaves_only() {
    let c = StyleControls::with_overrides(&json!({
        "node": { "width": 40 },
        "encoding": { "numeric": "age" }
    }));
    assert_eq!(c.get_f64("node.width"), Some(40.0));
    assert_eq!(c.get_f64("node.height"), Some(25.0));
    assert_eq!(c.get_str("encoding.numeric"), Some("age"));
    assert_eq!(c.get_str("encoding.palette"), Some("pastel"));
}

#[test]
fn set_value_creates_intermediate_objects() {
    let mut c = StyleControls::empty_object();
    c.set_value("labels.node.color", json!("blue"));
    assert_eq!(c.get_str("labels.node.color"), Some("blue"));

    let mut odd = StyleControls::from_value(json!(3));
    odd.set_value("edge.lineColor", json!("red"));
    assert_eq!(odd.get_str("edge.lineColor"), Some("red"));
}

#[test]
fn toggles_accept_yes_no_strings() {
    let mut c = StyleControls::default();
    c.set_value("edge.weightColoring", json!("yes"));
    assert!(c.is_enabled("edge.weightColoring"));
    c.set_value("edge.weightColoring", json!("no"));
    assert!(!c.is_enabled("edge.weightColoring"));
    c.set_value("edge.weightColoring", json!(true));
    assert!(c.is_enabled("edge.weightColoring"));
}

#[test]
fn numeric_strings_read_as_numbers() {
    let mut c = StyleControls::default();
    c.set_value("encoding.maxSize", json!("80"));
    assert_eq!(c.get_f64("encoding.maxSize"), Some(80.0));
    c.set_value("encoding.maxSize", json!("big"));
    assert_eq!(c.get_f64("encoding.maxSize"), None);
}

#[test]
fn from_json_str_merges_over_defaults() {
    let c = StyleControls::from_json_str(r#"{"node": {"shape": "star"}}"#).unwrap();
    assert_eq!(c.get_str("node.shape"), Some("star"));
    assert_eq!(c.get_str("node.content"), Some("data(id)"));
    assert!(matches!(
        StyleControls::from_json_str("{not json"),
        Err(Error::Json(_))
    ));
}
