//! Mermaid rendering
//!
//! Serializes parsed issues into a Mermaid `graph` description: one node per
//! issue, one edge per link that is not ignored, then the style classes.
//! Layout is left entirely to Mermaid.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::NodeId;
use super::issue::{Issue, Link};
use super::style::Presentation;

#[derive(Debug, Error, PartialEq)]
#[error("Invalid graph direction '{0}': expected 'TD' (top-down) or 'LR' (left-right)")]
pub struct DirectionError(pub String);

/// Orientation of the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GraphDirection {
    #[default]
    TopDown,
    LeftRight,
}

impl GraphDirection {
    /// Returns the Mermaid keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphDirection::TopDown => "TD",
            GraphDirection::LeftRight => "LR",
        }
    }
}

impl fmt::Display for GraphDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphDirection {
    type Err = DirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TD" | "top-down" => Ok(GraphDirection::TopDown),
            "LR" | "left-right" => Ok(GraphDirection::LeftRight),
            other => Err(DirectionError(other.to_string())),
        }
    }
}

impl TryFrom<String> for GraphDirection {
    type Error = DirectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GraphDirection> for String {
    fn from(direction: GraphDirection) -> Self {
        direction.to_string()
    }
}

/// Everything the renderer needs besides the issues
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub direction: GraphDirection,

    /// Link kinds that produce no edge (e.g. `Cloners`)
    pub ignore_kinds: BTreeSet<String>,

    pub presentation: Presentation,
}

impl RenderOptions {
    /// Returns true if links of this kind are suppressed
    pub fn ignores(&self, kind: &str) -> bool {
        self.ignore_kinds.contains(kind)
    }
}

/// Renders the full diagram
pub fn render(issues: &[Issue], options: &RenderOptions) -> String {
    let mut out = format!("graph {};\n", options.direction);

    for issue in issues {
        let id = NodeId::from_key(&issue.key);
        out.push_str(&node_line(&id, issue, &options.presentation));

        for link in &issue.outbound_links {
            if !options.ignores(&link.kind) {
                out.push_str(&edge_line(&id, &NodeId::from_key(&link.target_key), link));
            }
        }

        // Inward links point at this issue
        for link in &issue.inbound_links {
            if !options.ignores(&link.kind) {
                out.push_str(&edge_line(&NodeId::from_key(&link.target_key), &id, link));
            }
        }
    }

    out.push('\n');
    for class in options.presentation.colors.class_definitions() {
        let line = match class.extra {
            Some(extra) => format!("\tclassDef {} fill:{},{}\n", class.name, class.fill, extra),
            None => format!("\tclassDef {} fill:{}\n", class.name, class.fill),
        };
        out.push_str(&line);
    }

    out
}

/// Counts links that [`render`] drops because their kind is ignored
pub fn suppressed_links(issues: &[Issue], options: &RenderOptions) -> usize {
    issues
        .iter()
        .flat_map(|issue| issue.outbound_links.iter().chain(&issue.inbound_links))
        .filter(|link| options.ignores(&link.kind))
        .count()
}

fn node_line(id: &NodeId, issue: &Issue, presentation: &Presentation) -> String {
    let shape = presentation.shapes.for_type(issue.issue_type);
    let summary = issue.summary.replace('"', "'");
    format!(
        "\t{}{}\"{} ({})\\n{}\"{}:::{}\n",
        id,
        shape.left,
        issue.key,
        issue.status,
        summary,
        shape.right,
        issue.status.symbol()
    )
}

fn edge_line(from: &NodeId, to: &NodeId, link: &Link) -> String {
    if link.is_unlabeled() {
        format!("\t{} --> {}\n", from, to)
    } else {
        format!("\t{} -- {} --> {}\n", from, link.kind, to)
    }
}
