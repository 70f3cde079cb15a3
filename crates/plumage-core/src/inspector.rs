//! Plain-text analytics report for the tapped element.

use crate::model::{GraphModel, Row};
use crate::session::Selection;
use crate::utils::fmt_number;
use std::fmt::Write as _;

pub const PLACEHOLDER: &str = "Click to a node or edge to see the data here.";

const RULE: &str = "=========================================================";

/// Report for `selection`, or [`PLACEHOLDER`] when nothing is selected or the selected
/// element is not part of the graph.
pub fn report(model: &GraphModel, selection: Option<&Selection>) -> String {
    let text = match selection {
        Some(Selection::Node { id }) => node_report(model, id),
        Some(Selection::Edge { source, target }) => edge_report(model, source, target),
        None => None,
    };
    text.unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn metric(out: &mut String, title: &str, value: impl std::fmt::Display, note: &str) {
    let _ = writeln!(out, "{title}: {value}\n({note})\n");
}

fn attribute_dump(out: &mut String, attrs: Option<&Row>) {
    for (key, value) in attrs.into_iter().flatten() {
        let _ = writeln!(out, "{key}: {value}");
    }
}

pub fn node_report(model: &GraphModel, id: &str) -> Option<String> {
    if !model.has_node(id) {
        return None;
    }
    let mut out = String::new();
    let _ = writeln!(out, "You recently clicked/tapped the node: {}", id.to_uppercase());
    let _ = writeln!(out, "{RULE}");

    metric(&mut out, "NODE DEGREE", model.degree(id)?, "Total connection count");
    metric(&mut out, "NODE IN-DEGREE", model.in_degree(id)?, "Incoming connection count");
    metric(&mut out, "NODE OUT-DEGREE", model.out_degree(id)?, "Outgoing connection count");
    metric(
        &mut out,
        "NODE CLUSTERING COEFFICIENT",
        fmt_number(model.clustering_coefficient(id)?),
        "How tightly-knit the neighbors are",
    );
    metric(
        &mut out,
        "NODE TRIANGLES FORMED",
        model.triangle_count(id)?,
        "Counted on the undirected view of the network",
    );
    metric(
        &mut out,
        "NODE DEGREE CENTRALITY",
        fmt_number(model.degree_centrality(id)?),
        "Node's importance based on its connections",
    );
    metric(
        &mut out,
        "NODE BETWEENNESS CENTRALITY",
        fmt_number(model.betweenness_centrality(id)?),
        "How often a node appears on shortest paths between other nodes",
    );
    metric(
        &mut out,
        "NODE CLOSENESS CENTRALITY",
        fmt_number(model.closeness_centrality(id)?),
        "How quickly information spreads to other nodes",
    );

    let paths = model.shortest_path_lengths(id)?;
    let _ = writeln!(out, "NODE SINGLE SOURCE SHORTEST PATH LENGTHS: ");
    let _ = writeln!(out, "(Lengths of shortest paths from this node to other nodes)");
    let _ = writeln!(out, "{}", serde_json::to_string(&paths).unwrap_or_default());
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "NODE ATTRIBUTES: ");
    attribute_dump(&mut out, model.attributes(id));
    Some(out)
}

pub fn edge_report(model: &GraphModel, source: &str, target: &str) -> Option<String> {
    let weight = model.edge_weight(source, target)?;
    let betweenness = model.edge_betweenness_centrality(source, target)?;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "You recently clicked/tapped the edge between {} and {}",
        source.to_uppercase(),
        target.to_uppercase()
    );
    let _ = writeln!(out, "{RULE}");
    metric(&mut out, "EDGE WEIGHT", fmt_number(weight), "Strength of the connection");
    metric(
        &mut out,
        "EDGE BETWEENNESS CENTRALITY",
        fmt_number(betweenness),
        "The importance in connecting different parts of the network",
    );
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Source Attributes: ");
    attribute_dump(&mut out, model.attributes(source));
    let _ = writeln!(out);
    let _ = writeln!(out, "Target Attributes: ");
    attribute_dump(&mut out, model.attributes(target));
    Some(out)
}
