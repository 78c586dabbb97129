//! Issue domain model
//!
//! An issue is one row of the Jira export. Type and status are closed sets:
//! a value outside them is rejected when the row is parsed.

use std::fmt;
use std::str::FromStr;

use super::record::ParseError;

/// Type of an issue, as named in the `Issue Type` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueType {
    Epic,
    Story,
    Task,
    Bug,
    Spike,
}

impl IssueType {
    /// All types in declaration order
    pub const ALL: [IssueType; 5] = [
        IssueType::Epic,
        IssueType::Story,
        IssueType::Task,
        IssueType::Bug,
        IssueType::Spike,
    ];

    /// Returns the value Jira writes for this type
    pub fn label(&self) -> &'static str {
        match self {
            IssueType::Epic => "Epic",
            IssueType::Story => "Story",
            IssueType::Task => "Task",
            IssueType::Bug => "Bug",
            IssueType::Spike => "Spike",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IssueType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| ParseError::UnknownValue {
                column: "Issue Type",
                value: s.to_string(),
            })
    }
}

/// Workflow status of an issue, as named in the `Status` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueStatus {
    ToDo,
    Closed,
    InProgress,
    CodeReview,
    Review,
}

impl IssueStatus {
    /// All statuses in declaration order (also the style class order)
    pub const ALL: [IssueStatus; 5] = [
        IssueStatus::ToDo,
        IssueStatus::Closed,
        IssueStatus::InProgress,
        IssueStatus::CodeReview,
        IssueStatus::Review,
    ];

    /// Returns the value Jira writes for this status
    pub fn label(&self) -> &'static str {
        match self {
            IssueStatus::ToDo => "To Do",
            IssueStatus::Closed => "Closed",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::CodeReview => "Code Review",
            IssueStatus::Review => "Review",
        }
    }

    /// Returns the symbolic name, used as the Mermaid style class
    pub fn symbol(&self) -> &'static str {
        match self {
            IssueStatus::ToDo => "TODO",
            IssueStatus::Closed => "CLOSED",
            IssueStatus::InProgress => "IN_PROGRESS",
            IssueStatus::CodeReview => "CODE_REVIEW",
            IssueStatus::Review => "REVIEW",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IssueStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| ParseError::UnknownValue {
                column: "Status",
                value: s.to_string(),
            })
    }
}

/// A link from one issue to another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Key of the linked issue (may not be part of the export)
    pub target_key: String,

    /// Relationship name taken from the column header, e.g. `Blocks`.
    /// Empty when the header carries none.
    pub kind: String,
}

impl Link {
    pub fn new(target_key: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            target_key: target_key.into(),
            kind: kind.into(),
        }
    }

    /// Returns true if the link has no relationship label
    pub fn is_unlabeled(&self) -> bool {
        self.kind.is_empty()
    }
}

/// One parsed row of the export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Jira key, e.g. `PROJ-12`
    pub key: String,

    pub issue_type: IssueType,

    pub status: IssueStatus,

    /// Free-text title
    pub summary: String,

    /// Links from `Outward issue link (...)` columns, in header order
    pub outbound_links: Vec<Link>,

    /// Links from `Inward issue link (...)` columns, in header order
    pub inbound_links: Vec<Link>,
}

impl Issue {
    /// Creates an issue without links
    pub fn new(
        key: impl Into<String>,
        issue_type: IssueType,
        status: IssueStatus,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            issue_type,
            status,
            summary: summary.into(),
            outbound_links: Vec::new(),
            inbound_links: Vec::new(),
        }
    }

    /// Adds an outbound link (builder style)
    pub fn with_outbound(mut self, link: Link) -> Self {
        self.outbound_links.push(link);
        self
    }

    /// Adds an inbound link (builder style)
    pub fn with_inbound(mut self, link: Link) -> Self {
        self.inbound_links.push(link);
        self
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}, {}] {} outward, {} inward link(s)",
            self.key,
            self.issue_type,
            self.status,
            self.outbound_links.len(),
            self.inbound_links.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_issue_types() {
        assert_eq!("Epic".parse::<IssueType>().unwrap(), IssueType::Epic);
        assert_eq!("Story".parse::<IssueType>().unwrap(), IssueType::Story);
        assert_eq!("Task".parse::<IssueType>().unwrap(), IssueType::Task);
        assert_eq!("Bug".parse::<IssueType>().unwrap(), IssueType::Bug);
        assert_eq!("Spike".parse::<IssueType>().unwrap(), IssueType::Spike);
    }

    #[test]
    fn unknown_issue_type_names_column_and_value() {
        let err = "Feature".parse::<IssueType>().unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownValue {
                column: "Issue Type",
                value: "Feature".to_string()
            }
        );
        assert!(err.to_string().contains("Issue Type"));
        assert!(err.to_string().contains("Feature"));
    }

    #[test]
    fn issue_type_match_is_exact() {
        assert!("task".parse::<IssueType>().is_err());
        assert!("Task ".parse::<IssueType>().is_err());
    }

    #[test]
    fn parse_statuses() {
        assert_eq!("To Do".parse::<IssueStatus>().unwrap(), IssueStatus::ToDo);
        assert_eq!("Closed".parse::<IssueStatus>().unwrap(), IssueStatus::Closed);
        assert_eq!(
            "In Progress".parse::<IssueStatus>().unwrap(),
            IssueStatus::InProgress
        );
        assert_eq!(
            "Code Review".parse::<IssueStatus>().unwrap(),
            IssueStatus::CodeReview
        );
        assert_eq!("Review".parse::<IssueStatus>().unwrap(), IssueStatus::Review);
        assert!("Done".parse::<IssueStatus>().is_err());
    }

    #[test]
    fn status_symbols() {
        let symbols: Vec<_> = IssueStatus::ALL.iter().map(|s| s.symbol()).collect();
        assert_eq!(
            symbols,
            vec!["TODO", "CLOSED", "IN_PROGRESS", "CODE_REVIEW", "REVIEW"]
        );
    }

    #[test]
    fn label_roundtrip() {
        for status in IssueStatus::ALL {
            assert_eq!(status.to_string().parse::<IssueStatus>().unwrap(), status);
        }
        for issue_type in IssueType::ALL {
            assert_eq!(issue_type.to_string().parse::<IssueType>().unwrap(), issue_type);
        }
    }

    #[test]
    fn issues_own_their_links() {
        let a = Issue::new("A-1", IssueType::Task, IssueStatus::ToDo, "a")
            .with_outbound(Link::new("A-2", "Blocks"));
        let b = Issue::new("A-2", IssueType::Task, IssueStatus::ToDo, "b");

        assert_eq!(a.outbound_links.len(), 1);
        assert!(b.outbound_links.is_empty());
        assert!(b.inbound_links.is_empty());
    }

    #[test]
    fn display_summarizes_issue() {
        let issue = Issue::new("PROJ-1", IssueType::Bug, IssueStatus::Review, "Crash")
            .with_outbound(Link::new("PROJ-2", "Blocks"))
            .with_inbound(Link::new("PROJ-3", ""));

        assert_eq!(issue.to_string(), "PROJ-1 [Bug, Review] 1 outward, 1 inward link(s)");
        assert!(issue.inbound_links[0].is_unlabeled());
        assert!(!issue.outbound_links[0].is_unlabeled());
    }
}
