use crate::utils::{value_as_f64, value_is_enabled};
use serde_json::{Map, Value, json};

/// The style-control set: a JSON object addressed by dotted paths (`node.width`,
/// `arrows.target.shape`, `encoding.palette`).
///
/// `StyleControls::default()` carries the editor defaults; user input is merged over them with
/// [`StyleControls::deep_merge`].
#[derive(Debug, Clone, PartialEq)]
pub struct StyleControls(Value);

impl Default for StyleControls {
    fn default() -> Self {
        Self(defaults())
    }
}

impl StyleControls {
    pub fn empty_object() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Defaults with `overrides` merged on top.
    pub fn with_overrides(overrides: &Value) -> Self {
        let mut controls = Self::default();
        controls.deep_merge(overrides);
        controls
    }

    pub fn from_json_str(text: &str) -> crate::Result<Self> {
        let overrides: Value = serde_json::from_str(text)?;
        Ok(Self::with_overrides(&overrides))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// The value at `dotted_path`; `None` when absent or JSON `null`.
    pub fn get(&self, dotted_path: &str) -> Option<&Value> {
        let mut cur = &self.0;
        for segment in dotted_path.split('.') {
            cur = cur.as_object()?.get(segment)?;
        }
        (!cur.is_null()).then_some(cur)
    }

    pub fn get_str(&self, dotted_path: &str) -> Option<&str> {
        self.get(dotted_path)?.as_str()
    }

    /// Numbers and numeric strings.
    pub fn get_f64(&self, dotted_path: &str) -> Option<f64> {
        self.get(dotted_path).and_then(value_as_f64)
    }

    /// Toggle lookup accepting booleans and `"yes"`/`"no"`; absent means off.
    pub fn is_enabled(&self, dotted_path: &str) -> bool {
        self.get(dotted_path).is_some_and(value_is_enabled)
    }

    pub fn set_value(&mut self, dotted_path: &str, value: Value) {
        if !self.0.is_object() {
            self.0 = Value::Object(Map::new());
        }

        let Value::Object(ref mut root) = self.0 else {
            return;
        };
        let mut cur: &mut Map<String, Value> = root;
        let mut segments = dotted_path.split('.').peekable();
        while let Some(seg) = segments.next() {
            if segments.peek().is_none() {
                cur.insert(seg.to_string(), value);
                return;
            }
            let slot = cur
                .entry(seg)
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            let Some(next) = slot.as_object_mut() else {
                return;
            };
            cur = next;
        }
    }

    pub fn deep_merge(&mut self, other: &Value) {
        deep_merge_value(&mut self.0, other);
    }
}

fn deep_merge_value(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(in_map)) => {
            for (key, in_value) in in_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge_value(base_value, in_value),
                    None => {
                        base_map.insert(key.clone(), in_value.clone());
                    }
                }
            }
        }
        (base_slot, in_value) => {
            *base_slot = in_value.clone();
        }
    }
}

fn arrow_defaults() -> Value {
    json!({ "color": "", "shape": "none", "fill": "filled" })
}

fn endpoint_defaults() -> Value {
    json!({
        "type": "outside-to-node",
        "width": "0px",
        "height": "0px",
        "distanceFromNode": 0
    })
}

fn defaults() -> Value {
    json!({
        "node": {
            "content": "data(id)",
            "width": 25,
            "height": 25,
            "shape": "ellipse",
            "color": "",
            "opacity": 1,
            "blacken": 0,
            "borderWidth": 0,
            "borderStyle": "solid",
            "borderColor": "",
            "borderOpacity": 1,
            "padding": "0px",
            "paddingRelativeTo": "width"
        },
        "edge": {
            "lineWidth": null,
            "curveStyle": "haystack",
            "weightColoring": false,
            "lineColor": "",
            "lineStyle": "solid",
            "loopDirection": -45,
            "loopSweep": -90
        },
        "arrows": {
            "enabled": true,
            "scale": null,
            "source": arrow_defaults(),
            "mid-source": arrow_defaults(),
            "target": arrow_defaults(),
            "mid-target": arrow_defaults()
        },
        "endpoints": {
            "enabled": false,
            "source": endpoint_defaults(),
            "target": endpoint_defaults()
        },
        "labels": {
            "enabled": false,
            "halign": "center",
            "valign": "center",
            "node": {
                "label": "data(label)",
                "color": "",
                "textOpacity": 1,
                "fontFamily": "Helvetica",
                "fontSize": 16,
                "fontStyle": "normal",
                "fontWeight": "normal",
                "textTransform": "none",
                "textWrap": "none",
                "textMaxWidth": null,
                "textMarginX": 0,
                "textMarginY": 0
            },
            "edge": {
                "label": "data(label)",
                "sourceLabel": "data(label)",
                "targetLabel": "data(label)",
                "color": "",
                "textOpacity": 1,
                "fontFamily": "Helvetica",
                "fontSize": 16,
                "fontStyle": "normal",
                "fontWeight": "normal",
                "textTransform": "none",
                "textWrap": "none",
                "textMaxWidth": null,
                "sourceTextOffset": null,
                "targetTextOffset": null,
                "textMarginX": 0,
                "textMarginY": 0
            },
            "source": { "textMarginX": 0, "textMarginY": 0 },
            "target": { "textMarginX": 0, "textMarginY": 0 }
        },
        "encoding": {
            "categorical": "None",
            "numeric": "None",
            "palette": "pastel",
            "maxSize": 50
        }
    })
}
