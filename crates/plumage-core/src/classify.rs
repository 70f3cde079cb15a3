use crate::model::{AttrValue, GraphModel};
use serde::Serialize;

/// Sizing menu entry that disables the encoding.
pub const NONE_CHOICE: &str = "None";

pub const DEGREE_CENTRALITY: &str = "Degree Centrality";
pub const BETWEENNESS_CENTRALITY: &str = "Betweenness Centrality";
pub const CLOSENESS_CENTRALITY: &str = "Closeness Centrality";

/// Node attribute columns split by how they can be encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttributeColumns {
    pub numeric: Vec<String>,
    pub categorical: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Numeric,
    Categorical,
    Excluded,
}

fn column_kind<'a>(values: impl Iterator<Item = &'a AttrValue>) -> ColumnKind {
    let mut kind = ColumnKind::Numeric;
    let mut seen = false;
    for value in values.filter(|v| !v.is_null()) {
        let this = match value {
            AttrValue::Int(_) | AttrValue::Float(_) => ColumnKind::Numeric,
            AttrValue::Text(_) => ColumnKind::Categorical,
            AttrValue::Bool(_) | AttrValue::Null => return ColumnKind::Excluded,
        };
        if seen && this != kind {
            return ColumnKind::Excluded;
        }
        kind = this;
        seen = true;
    }
    kind
}

/// Classifies every node-table column. A column is numeric when all its non-null values are
/// numbers (vacuously so when it has none) and categorical when all are text; boolean and
/// mixed columns are left out.
pub fn classify(model: &GraphModel) -> AttributeColumns {
    let table = model.node_table();
    let mut out = AttributeColumns::default();
    for column in table.columns() {
        match column_kind(table.column(column)) {
            ColumnKind::Numeric => out.numeric.push(column.clone()),
            ColumnKind::Categorical => out.categorical.push(column.clone()),
            ColumnKind::Excluded => {
                tracing::debug!(column = column.as_str(), "column is neither numeric nor categorical");
            }
        }
    }
    out
}

impl AttributeColumns {
    /// Numeric columns then categorical columns, each in table order.
    pub fn ordered(&self) -> Vec<&str> {
        self.numeric
            .iter()
            .chain(&self.categorical)
            .map(String::as_str)
            .collect()
    }

    pub fn is_numeric(&self, column: &str) -> bool {
        self.numeric.iter().any(|c| c == column)
    }

    pub fn is_categorical(&self, column: &str) -> bool {
        self.categorical.iter().any(|c| c == column)
    }

    /// Choices for the node-size encoding.
    pub fn sizing_options(&self) -> Vec<&str> {
        std::iter::once(NONE_CHOICE)
            .chain(self.numeric.iter().map(String::as_str))
            .chain([
                DEGREE_CENTRALITY,
                BETWEENNESS_CENTRALITY,
                CLOSENESS_CENTRALITY,
            ])
            .collect()
    }

    /// Choices for the node-color encoding.
    pub fn coloring_options(&self) -> Vec<&str> {
        std::iter::once(NONE_CHOICE)
            .chain(self.categorical.iter().map(String::as_str))
            .collect()
    }
}
