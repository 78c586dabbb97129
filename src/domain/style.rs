//! Presentation lookups
//!
//! Maps an issue type to the pair of Mermaid delimiters that give the node
//! its shape, and an issue status to the fill color of its style class.
//! Both tables are configurable; see `storage::config`.

use serde::{Deserialize, Serialize};

use super::issue::{IssueStatus, IssueType};

/// Left and right delimiters around a node label, e.g. `[` and `]`
///
/// Serialized as a two-element array: `["((", "))"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct ShapePair {
    pub left: String,
    pub right: String,
}

impl ShapePair {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

impl From<(String, String)> for ShapePair {
    fn from((left, right): (String, String)) -> Self {
        Self { left, right }
    }
}

impl From<ShapePair> for (String, String) {
    fn from(pair: ShapePair) -> Self {
        (pair.left, pair.right)
    }
}

/// Node shape per issue type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shapes {
    /// Rectangle
    pub task_shape: ShapePair,

    /// Circle
    pub bug_shape: ShapePair,

    /// Rhombus
    pub spike_shape: ShapePair,

    /// Rounded rectangle, used for epics and stories
    pub default_shape: ShapePair,
}

impl Default for Shapes {
    fn default() -> Self {
        Self {
            task_shape: ShapePair::new("[", "]"),
            bug_shape: ShapePair::new("((", "))"),
            spike_shape: ShapePair::new("{", "}"),
            default_shape: ShapePair::new("(", ")"),
        }
    }
}

impl Shapes {
    /// Returns the shape for an issue type
    pub fn for_type(&self, issue_type: IssueType) -> &ShapePair {
        match issue_type {
            IssueType::Task => &self.task_shape,
            IssueType::Bug => &self.bug_shape,
            IssueType::Spike => &self.spike_shape,
            IssueType::Epic | IssueType::Story => &self.default_shape,
        }
    }
}

/// Fill color per issue status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub todo: String,
    pub closed: String,
    pub in_progress: String,
    pub code_review: String,
    pub review: String,

    /// Fill of Mermaid's `default` class. No status maps here; nodes only
    /// fall back to it if they carry no class at all.
    pub default_color: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            todo: "#ff9933".to_string(),
            closed: "#33cc33".to_string(),
            in_progress: "#33ccff".to_string(),
            code_review: "#ffff66".to_string(),
            review: "#ffcc00".to_string(),
            default_color: "#f9f".to_string(),
        }
    }
}

/// One `classDef` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDef<'a> {
    pub name: &'static str,
    pub fill: &'a str,
    /// Extra style attributes appended after the fill
    pub extra: Option<&'static str>,
}

/// Name of Mermaid's built-in fallback class
pub const DEFAULT_CLASS: &str = "default";

const DEFAULT_CLASS_EXTRA: &str = "stroke:#333,stroke-width:4px;";

impl Colors {
    /// Returns the fill color for a status
    pub fn for_status(&self, status: IssueStatus) -> &str {
        match status {
            IssueStatus::ToDo => &self.todo,
            IssueStatus::Closed => &self.closed,
            IssueStatus::InProgress => &self.in_progress,
            IssueStatus::CodeReview => &self.code_review,
            IssueStatus::Review => &self.review,
        }
    }

    /// Style classes in declaration order: every status, then `default`
    pub fn class_definitions(&self) -> Vec<ClassDef<'_>> {
        IssueStatus::ALL
            .iter()
            .map(|status| ClassDef {
                name: status.symbol(),
                fill: self.for_status(*status),
                extra: None,
            })
            .chain(std::iter::once(ClassDef {
                name: DEFAULT_CLASS,
                fill: &self.default_color,
                extra: Some(DEFAULT_CLASS_EXTRA),
            }))
            .collect()
    }
}

/// Shapes and colors together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presentation {
    pub shapes: Shapes,
    pub colors: Colors,
}

impl Presentation {
    pub fn new(shapes: Shapes, colors: Colors) -> Self {
        Self { shapes, colors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shapes() {
        let shapes = Shapes::default();
        assert_eq!(shapes.for_type(IssueType::Task), &ShapePair::new("[", "]"));
        assert_eq!(shapes.for_type(IssueType::Bug), &ShapePair::new("((", "))"));
        assert_eq!(shapes.for_type(IssueType::Spike), &ShapePair::new("{", "}"));
        assert_eq!(shapes.for_type(IssueType::Epic), &ShapePair::new("(", ")"));
        assert_eq!(shapes.for_type(IssueType::Story), &ShapePair::new("(", ")"));
    }

    #[test]
    fn default_colors() {
        let colors = Colors::default();
        assert_eq!(colors.for_status(IssueStatus::ToDo), "#ff9933");
        assert_eq!(colors.for_status(IssueStatus::Closed), "#33cc33");
        assert_eq!(colors.for_status(IssueStatus::InProgress), "#33ccff");
        assert_eq!(colors.for_status(IssueStatus::CodeReview), "#ffff66");
        assert_eq!(colors.for_status(IssueStatus::Review), "#ffcc00");
    }

    #[test]
    fn class_definitions_are_in_fixed_order() {
        let colors = Colors::default();
        let names: Vec<_> = colors.class_definitions().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["TODO", "CLOSED", "IN_PROGRESS", "CODE_REVIEW", "REVIEW", "default"]
        );

        let last = colors.class_definitions().pop().unwrap();
        assert_eq!(last.fill, "#f9f");
        assert_eq!(last.extra, Some("stroke:#333,stroke-width:4px;"));
    }

    #[test]
    fn parse_partial_shapes() {
        let toml = r#"
bug_shape = [">", "]"]
"#;
        let shapes: Shapes = toml::from_str(toml).unwrap();
        assert_eq!(shapes.bug_shape, ShapePair::new(">", "]"));
        assert_eq!(shapes.task_shape, ShapePair::new("[", "]"));
    }

    #[test]
    fn parse_partial_colors() {
        let colors: Colors = toml::from_str("closed = \"#000\"").unwrap();
        assert_eq!(colors.closed, "#000");
        assert_eq!(colors.todo, "#ff9933");
    }

    #[test]
    fn shape_pair_must_have_two_elements() {
        let result: Result<Shapes, _> = toml::from_str("task_shape = [\"[\"]");
        assert!(result.is_err());
    }
}
