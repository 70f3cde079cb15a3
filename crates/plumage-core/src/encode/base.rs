//! The two base rules (`node`, `edge`), built straight from the controls.

use crate::controls::StyleControls;
use crate::style::{Selector, StyleRule};
use crate::utils::value_to_text;
use crate::validate::{validate_color, validate_px_or_percent};
use serde_json::Value;

/// Fallback for node, border, line and arrow colors.
pub const DEFAULT_COLOR: &str = "#999999";
/// Fallback for label colors.
pub const DEFAULT_LABEL_COLOR: &str = "black";
pub const DEFAULT_LENGTH: &str = "0px";

pub const ARROW_POSITIONS: [&str; 4] = ["source", "mid-source", "target", "mid-target"];

/// Copies the control at `path` into `property`, skipping absent or null controls.
fn pass(rule: &mut StyleRule, controls: &StyleControls, property: &str, path: &str) {
    rule.insert_opt(property, controls.get(path).cloned());
}

fn color(controls: &StyleControls, path: &str, default: &str) -> String {
    validate_color(controls.get_str(path).unwrap_or_default(), default)
}

fn length(controls: &StyleControls, path: &str) -> String {
    let raw = controls.get(path).and_then(value_to_text).unwrap_or_default();
    validate_px_or_percent(&raw, DEFAULT_LENGTH)
}

fn degrees(controls: &StyleControls, path: &str) -> Option<Value> {
    let n = controls.get(path).and_then(value_to_text)?;
    Some(Value::String(format!("{n}deg")))
}

/// `[node, edge]`, with arrow, endpoint and label settings folded in when their sections are
/// enabled.
pub fn base_rules(controls: &StyleControls) -> [StyleRule; 2] {
    let mut node = node_rule(controls);
    let mut edge = edge_rule(controls);

    if controls.is_enabled("arrows.enabled") {
        apply_arrows(&mut edge, controls);
    }
    if controls.is_enabled("endpoints.enabled") {
        apply_endpoints(&mut edge, controls);
    }
    if controls.is_enabled("labels.enabled") {
        apply_node_labels(&mut node, controls);
        apply_edge_labels(&mut edge, controls);
    }

    [node, edge]
}

fn node_rule(c: &StyleControls) -> StyleRule {
    let mut rule = StyleRule::new(Selector::Node);
    pass(&mut rule, c, "content", "node.content");
    pass(&mut rule, c, "width", "node.width");
    pass(&mut rule, c, "height", "node.height");
    rule.insert("background-color", color(c, "node.color", DEFAULT_COLOR));
    pass(&mut rule, c, "background-blacken", "node.blacken");
    pass(&mut rule, c, "background-opacity", "node.opacity");
    pass(&mut rule, c, "shape", "node.shape");
    pass(&mut rule, c, "border-width", "node.borderWidth");
    pass(&mut rule, c, "border-style", "node.borderStyle");
    rule.insert("border-color", color(c, "node.borderColor", DEFAULT_COLOR));
    pass(&mut rule, c, "border-opacity", "node.borderOpacity");
    rule.insert("padding", length(c, "node.padding"));
    pass(&mut rule, c, "padding-relative-to", "node.paddingRelativeTo");

    rule.insert("compound-sizing-wrt-labels", "include");
    for property in [
        "min-width",
        "min-width-bias-left",
        "min-width-bias-right",
        "min-height",
        "min-height-bias-top",
        "min-height-bias-bottom",
    ] {
        rule.insert(property, 0);
    }
    rule
}

fn edge_rule(c: &StyleControls) -> StyleRule {
    let mut rule = StyleRule::new(Selector::Edge);
    pass(&mut rule, c, "width", "edge.lineWidth");
    pass(&mut rule, c, "curve-style", "edge.curveStyle");
    rule.insert("line-color", line_color(c));
    pass(&mut rule, c, "line-style", "edge.lineStyle");
    rule.insert_opt("loop-direction", degrees(c, "edge.loopDirection"));
    rule.insert_opt("loop-sweep", degrees(c, "edge.loopSweep"));
    rule
}

/// The validated `edge.lineColor`; weight coloring keys off it too.
pub fn line_color(c: &StyleControls) -> String {
    color(c, "edge.lineColor", DEFAULT_COLOR)
}

fn apply_arrows(rule: &mut StyleRule, c: &StyleControls) {
    pass(rule, c, "arrow-scale", "arrows.scale");
    for pos in ARROW_POSITIONS {
        rule.insert(
            &format!("{pos}-arrow-color"),
            color(c, &format!("arrows.{pos}.color"), DEFAULT_COLOR),
        );
    }
    for pos in ARROW_POSITIONS {
        pass(
            rule,
            c,
            &format!("{pos}-arrow-shape"),
            &format!("arrows.{pos}.shape"),
        );
    }
    for pos in ARROW_POSITIONS {
        pass(
            rule,
            c,
            &format!("{pos}-arrow-fill"),
            &format!("arrows.{pos}.fill"),
        );
    }
}

/// `other` endpoints are positioned by an explicit `"<width> <height>"` pair.
fn endpoint(c: &StyleControls, end: &str) -> Option<Value> {
    let kind = c.get_str(&format!("endpoints.{end}.type"))?;
    if kind != "other" {
        return Some(Value::String(kind.to_string()));
    }
    let width = length(c, &format!("endpoints.{end}.width"));
    let height = length(c, &format!("endpoints.{end}.height"));
    Some(Value::String(format!("{width} {height}")))
}

fn apply_endpoints(rule: &mut StyleRule, c: &StyleControls) {
    rule.insert_opt("source-endpoint", endpoint(c, "source"));
    rule.insert_opt("target-endpoint", endpoint(c, "target"));
    pass(
        rule,
        c,
        "source-distance-from-node",
        "endpoints.source.distanceFromNode",
    );
    pass(
        rule,
        c,
        "target-distance-from-node",
        "endpoints.target.distanceFromNode",
    );
}

fn apply_fonts(rule: &mut StyleRule, c: &StyleControls, section: &str) {
    let path = |key: &str| format!("labels.{section}.{key}");
    rule.insert("color", color(c, &path("color"), DEFAULT_LABEL_COLOR));
    pass(rule, c, "text-opacity", &path("textOpacity"));
    pass(rule, c, "font-family", &path("fontFamily"));
    pass(rule, c, "font-size", &path("fontSize"));
    pass(rule, c, "font-style", &path("fontStyle"));
    pass(rule, c, "font-weight", &path("fontWeight"));
    pass(rule, c, "text-transform", &path("textTransform"));
    pass(rule, c, "text-wrap", &path("textWrap"));
    pass(rule, c, "text-max-width", &path("textMaxWidth"));
}

fn apply_node_labels(rule: &mut StyleRule, c: &StyleControls) {
    pass(rule, c, "label", "labels.node.label");
    apply_fonts(rule, c, "node");
    pass(rule, c, "text-halign", "labels.halign");
    pass(rule, c, "text-valign", "labels.valign");
    pass(rule, c, "text-margin-x", "labels.node.textMarginX");
    pass(rule, c, "text-margin-y", "labels.node.textMarginY");
}

fn apply_edge_labels(rule: &mut StyleRule, c: &StyleControls) {
    pass(rule, c, "label", "labels.edge.label");
    pass(rule, c, "source-label", "labels.edge.sourceLabel");
    pass(rule, c, "target-label", "labels.edge.targetLabel");
    apply_fonts(rule, c, "edge");
    pass(rule, c, "source-text-offset", "labels.edge.sourceTextOffset");
    pass(rule, c, "target-text-offset", "labels.edge.targetTextOffset");
    pass(rule, c, "text-margin-x", "labels.edge.textMarginX");
    pass(rule, c, "text-margin-y", "labels.edge.textMarginY");
    pass(rule, c, "source-text-margin-x", "labels.source.textMarginX");
    pass(rule, c, "source-text-margin-y", "labels.source.textMarginY");
    pass(rule, c, "target-text-margin-x", "labels.target.textMarginX");
    pass(rule, c, "target-text-margin-y", "labels.target.textMarginY");
}
