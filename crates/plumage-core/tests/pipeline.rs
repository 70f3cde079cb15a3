use plumage_core::{
    EdgeRow, GraphModel, NodeTable, Rgb, Selection, Session, StyleControls, StyleEngine, TapEvent,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};

fn engine_from(nodes: Value, edges: Value) -> StyleEngine {
    let nodes: NodeTable = serde_json::from_value(nodes).unwrap();
    let edges: Vec<EdgeRow> = serde_json::from_value(edges).unwrap();
    let model = GraphModel::from_tables_with_rng(nodes, edges, &mut StdRng::seed_from_u64(11))
        .unwrap();
    StyleEngine::new(model)
}

fn people() -> StyleEngine {
    engine_from(
        json!([
            { "ID": "A", "score": 0, "group": "x" },
            { "ID": "B", "score": 10, "group": "y" },
            { "ID": "C", "score": 20, "group": "x" },
        ]),
        json!([
            { "Source": "A", "Target": "B", "Weight": 0.2 },
            { "Source": "B", "Target": "C", "Weight": 0.8 },
        ]),
    )
}

fn selectors(sheet: &plumage_core::Stylesheet) -> Vec<String> {
    sheet.iter().map(|r| r.selector.to_string()).collect()
}

#[test]
fn heavier_edge_is_darker_with_black_base() {
    let engine = people();
    let controls = StyleControls::from_value(json!({
        "edge": { "weightColoring": "yes", "lineColor": "#000000" }
    }));
    let sheet = engine.stylesheet(&controls, None);

    let color_of = |selector: &str| {
        let rule = sheet.rules_matching(selector).next().unwrap();
        Rgb::parse(rule.get("line-color").unwrap().as_str().unwrap()).unwrap()
    };
    let light = color_of(r#"edge[source = "A"][target = "B"]"#);
    let dark = color_of(r#"edge[source = "B"][target = "C"]"#);
    assert!(light.luma() > dark.luma(), "{light} vs {dark}");
    assert_eq!(light, Rgb::WHITE);
    assert_eq!(dark, Rgb::new(0, 0, 0));
}

#[test]
fn sizing_by_raw_column_scales_to_max_size() {
    let engine = people();
    let controls = StyleControls::from_value(json!({ "encoding": { "numeric": "score" } }));
    let sheet = engine.stylesheet(&controls, None);
    let sizes: Vec<(String, f64)> = sheet
        .iter()
        .skip(2)
        .map(|r| {
            (
                r.selector.to_string(),
                r.get("width").and_then(Value::as_f64).unwrap(),
            )
        })
        .collect();
    assert_eq!(
        sizes,
        vec![
            ("[score = 0]".to_string(), 0.0),
            ("[score = 10]".to_string(), 25.0),
            ("[score = 20]".to_string(), 50.0),
        ]
    );
}

#[test]
fn rule_groups_come_in_fixed_order() {
    let engine = people();
    let controls = StyleControls::from_value(json!({
        "edge": { "weightColoring": true },
        "encoding": { "numeric": "Degree Centrality", "categorical": "group", "palette": "deep" }
    }));
    let sheet = engine.stylesheet(&controls, Some(&Selection::node("B")));
    assert_eq!(
        selectors(&sheet),
        vec![
            "node",
            "edge",
            r#"[ID = "A"]"#,
            r#"[ID = "B"]"#,
            r#"[ID = "C"]"#,
            r#"[group = "x"]"#,
            r#"[group = "y"]"#,
            r#"edge[source = "A"][target = "B"]"#,
            r#"edge[source = "B"][target = "C"]"#,
            r#"node[id = "B"]"#,
        ]
    );
    let overlay = sheet.iter().last().unwrap();
    assert_eq!(overlay.get("border-width"), Some(&json!(4)));
    assert_eq!(overlay.get("border-color"), Some(&json!("red")));
}

#[test]
fn unknown_palette_falls_back_to_pastel() {
    let engine = people();
    let controls = StyleControls::from_value(json!({
        "encoding": { "categorical": "group", "palette": "no-such-palette" }
    }));
    let sheet = engine.stylesheet(&controls, None);
    let colors: Vec<&Value> = sheet
        .iter()
        .skip(2)
        .filter_map(|r| r.get("background-color"))
        .collect();
    assert_eq!(colors, vec![&json!("#a1c9f4"), &json!("#ffb482")]);
}

#[test]
fn unknown_encodings_are_skipped() {
    let engine = people();
    let controls = StyleControls::from_value(json!({
        "encoding": { "categorical": "nope", "numeric": "group" }
    }));
    assert_eq!(engine.stylesheet(&controls, None).len(), 2);
}

#[test]
fn identical_inputs_give_identical_json() {
    let controls = StyleControls::from_value(json!({
        "edge": { "weightColoring": "yes" },
        "labels": { "enabled": "yes" },
        "encoding": { "numeric": "Betweenness Centrality", "categorical": "group" }
    }));
    let a = people()
        .run(Session::new(), &controls, Some(TapEvent::edge("A", "B")))
        .stylesheet
        .to_json_string()
        .unwrap();
    let b = people()
        .run(Session::new(), &controls, Some(TapEvent::edge("A", "B")))
        .stylesheet
        .to_json_string()
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn edge_tap_highlights_the_line() {
    let engine = people();
    let out = engine.run(
        Session::new(),
        &StyleControls::default(),
        Some(
            TapEvent::from_edge_payload(json!({ "source": "A", "target": "B", "weight": 0.2 }))
                .unwrap(),
        ),
    );
    let last = out.stylesheet.iter().last().unwrap();
    assert_eq!(last.selector.to_string(), r#"edge[source = "A"][target = "B"]"#);
    assert_eq!(last.get("line-color"), Some(&json!("red")));
    assert!(out.report.contains("EDGE WEIGHT: 0.2"));
}

#[test]
fn engine_is_shared_between_sessions() {
    let engine = people();
    let controls = StyleControls::default();
    std::thread::scope(|s| {
        for id in ["A", "B", "C"] {
            let engine = &engine;
            let controls = &controls;
            s.spawn(move || {
                let out = engine.run(Session::new(), controls, Some(TapEvent::node(id)));
                assert!(out.report.contains(&format!("node: {id}")));
            });
        }
    });
}
