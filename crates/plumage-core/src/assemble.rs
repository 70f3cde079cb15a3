use crate::style::{StyleRule, Stylesheet};

/// Every rule set one run produces, before ordering.
#[derive(Debug, Clone, Default)]
pub struct StylesheetParts {
    pub base: Vec<StyleRule>,
    pub sizing: Vec<StyleRule>,
    pub coloring: Vec<StyleRule>,
    pub weight: Vec<StyleRule>,
    pub overlay: Option<StyleRule>,
}

/// Base rules, then node sizing, categorical coloring, weight coloring, and the selection
/// highlight last so it wins over everything before it. Rules are neither merged nor
/// deduplicated.
pub fn assemble(parts: StylesheetParts) -> Stylesheet {
    let StylesheetParts {
        base,
        sizing,
        coloring,
        weight,
        overlay,
    } = parts;

    let mut sheet = Stylesheet::new();
    sheet.extend(base);
    sheet.extend(sizing);
    sheet.extend(coloring);
    sheet.extend(weight);
    sheet.extend(overlay);
    sheet
}
