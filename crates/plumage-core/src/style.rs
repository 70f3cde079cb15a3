//! Style rules and the ordered stylesheet handed to the renderer.
//!
//! The wire form is `[{"selector": "...", "style": {...}}, ...]`, with style properties in
//! insertion order.

use crate::utils::fmt_number;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Right-hand side of an attribute-equality selector.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    Text(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => f.write_str(&fmt_number(*n)),
            Literal::Text(s) => write_quoted(f, s),
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for ch in s.chars() {
        if ch == '"' || ch == '\\' {
            f.write_str("\\")?;
        }
        write!(f, "{ch}")?;
    }
    f.write_str("\"")
}

struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_quoted(f, self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    /// Every node.
    Node,
    /// Every edge.
    Edge,
    /// `node[id = "X"]`
    NodeId(String),
    /// `[attr = value]`, matching nodes and edges alike.
    AttrEquals { attr: String, value: Literal },
    /// `edge[source = "S"][target = "T"]`
    EdgeBetween { source: String, target: String },
}

impl Selector {
    pub fn node_id(id: impl Into<String>) -> Self {
        Selector::NodeId(id.into())
    }

    pub fn attr_equals(attr: impl Into<String>, value: Literal) -> Self {
        Selector::AttrEquals {
            attr: attr.into(),
            value,
        }
    }

    pub fn edge_between(source: impl Into<String>, target: impl Into<String>) -> Self {
        Selector::EdgeBetween {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Node => f.write_str("node"),
            Selector::Edge => f.write_str("edge"),
            Selector::NodeId(id) => write!(f, "node[id = {}]", Quoted(id)),
            Selector::AttrEquals { attr, value } => write!(f, "[{attr} = {value}]"),
            Selector::EdgeBetween { source, target } => write!(
                f,
                "edge[source = {}][target = {}]",
                Quoted(source),
                Quoted(target)
            ),
        }
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleRule {
    pub selector: Selector,
    pub style: IndexMap<String, Value>,
}

impl StyleRule {
    pub fn new(selector: Selector) -> Self {
        Self {
            selector,
            style: IndexMap::new(),
        }
    }

    pub fn with(mut self, property: &str, value: impl Into<Value>) -> Self {
        self.insert(property, value);
        self
    }

    pub fn insert(&mut self, property: &str, value: impl Into<Value>) {
        self.style.insert(property.to_string(), value.into());
    }

    /// Inserts only when `value` is present; absent controls are left out of the rule.
    pub fn insert_opt(&mut self, property: &str, value: Option<impl Into<Value>>) {
        if let Some(value) = value {
            self.insert(property, value);
        }
    }

    pub fn get(&self, property: &str) -> Option<&Value> {
        self.style.get(property)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Stylesheet(Vec<StyleRule>);

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: StyleRule) {
        self.0.push(rule);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StyleRule> {
        self.0.iter()
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.0
    }

    /// Rules whose rendered selector equals `selector`, in order.
    pub fn rules_matching<'a>(&'a self, selector: &'a str) -> impl Iterator<Item = &'a StyleRule> {
        self.0
            .iter()
            .filter(move |r| r.selector.to_string() == selector)
    }

    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Extend<StyleRule> for Stylesheet {
    fn extend<T: IntoIterator<Item = StyleRule>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<StyleRule> for Stylesheet {
    fn from_iter<T: IntoIterator<Item = StyleRule>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Stylesheet {
    type Item = StyleRule;
    type IntoIter = std::vec::IntoIter<StyleRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Stylesheet {
    type Item = &'a StyleRule;
    type IntoIter = std::slice::Iter<'a, StyleRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
