use crate::session::Selection;
use crate::style::{Selector, StyleRule};

pub const HIGHLIGHT_COLOR: &str = "red";
pub const HIGHLIGHT_BORDER_WIDTH: u32 = 4;

/// Highlight rule for the tapped element, if any.
pub fn overlay_rule(selection: Option<&Selection>) -> Option<StyleRule> {
    let rule = match selection? {
        Selection::Node { id } => StyleRule::new(Selector::node_id(id.as_str()))
            .with("border-width", HIGHLIGHT_BORDER_WIDTH)
            .with("border-color", HIGHLIGHT_COLOR),
        Selection::Edge { source, target } => {
            StyleRule::new(Selector::edge_between(source.as_str(), target.as_str()))
                .with("line-color", HIGHLIGHT_COLOR)
        }
    };
    Some(rule)
}
