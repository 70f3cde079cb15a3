use crate::*;
use serde_json::json;

#[test]
fn selectors_render_like_cytoscape() {
    assert_eq!(Selector::Node.to_string(), "node");
    assert_eq!(Selector::Edge.to_string(), "edge");
    assert_eq!(Selector::node_id("a").to_string(), r#"node[id = "a"]"#);
    assert_eq!(
        Selector::edge_between("a", "b").to_string(),
        r#"edge[source = "a"][target = "b"]"#
    );
    assert_eq!(
        Selector::attr_equals("team", Literal::Text("red".into())).to_string(),
        r#"[team = "red"]"#
    );
    assert_eq!(
        Selector::attr_equals("age", Literal::Number(30.0)).to_string(),
        "[age = 30]"
    );
    assert_eq!(
        Selector::attr_equals("age", Literal::Number(2.5)).to_string(),
        "[age = 2.5]"
    );
}

#[test]
fn quotes_inside_values_are_escaped() {
    assert_eq!(
        Selector::node_id(r#"say "hi""#).to_string(),
        r#"node[id = "say \"hi\""]"#
    );
}

#[test]
fn stylesheet_serializes_to_renderer_contract() {
    let mut sheet = Stylesheet::new();
    sheet.push(
        StyleRule::new(Selector::Node)
            .with("width", 25)
            .with("background-color", "#999999"),
    );
    sheet.push(StyleRule::new(Selector::node_id("a")).with("border-width", 4));

    let value = serde_json::to_value(&sheet).unwrap();
    assert_eq!(
        value,
        json!([
            { "selector": "node", "style": { "width": 25, "background-color": "#999999" } },
            { "selector": "node[id = \"a\"]", "style": { "border-width": 4 } },
        ])
    );
    assert_eq!(
        sheet.to_json_string().unwrap(),
        r##"[{"selector":"node","style":{"width":25,"background-color":"#999999"}},{"selector":"node[id = \"a\"]","style":{"border-width":4}}]"##
    );
    assert_eq!(sheet.rules_matching("node").count(), 1);
}

#[test]
fn insert_opt_skips_absent_values() {
    let mut rule = StyleRule::new(Selector::Edge);
    rule.insert_opt("width", None::<f64>);
    rule.insert_opt("curve-style", Some("bezier"));
    assert!(rule.get("width").is_none());
    assert_eq!(rule.get("curve-style"), Some(&json!("bezier")));
}
