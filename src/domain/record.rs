//! Row parsing
//!
//! Turns an already-trimmed header and data row into an [`Issue`]. Jira
//! names link columns after the relationship (`Outward issue link (Blocks)`),
//! so the set of link columns is only known once the header is read.
//! [`classify_column`] is the one place that looks at header text; everything
//! after it works with a [`RecordLayout`].

use thiserror::Error;

use super::issue::{Issue, IssueStatus, IssueType, Link};

pub const KEY_COLUMN: &str = "Issue key";
pub const TYPE_COLUMN: &str = "Issue Type";
pub const STATUS_COLUMN: &str = "Status";
pub const SUMMARY_COLUMN: &str = "Summary";

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Unknown value '{value}' in column '{column}'")]
    UnknownValue { column: &'static str, value: String },
}

/// What a header column holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRole {
    Key,
    Type,
    Status,
    Summary,
    /// Outward link column with its relationship kind
    Outward { kind: String },
    /// Inward link column with its relationship kind
    Inward { kind: String },
    Other,
}

/// Classifies a header by its text
///
/// Fixed columns match exactly. Link columns match on the `Outward` or
/// `Inward` substring; `Outward` wins if a header somehow has both.
pub fn classify_column(header: &str) -> ColumnRole {
    match header {
        KEY_COLUMN => ColumnRole::Key,
        TYPE_COLUMN => ColumnRole::Type,
        STATUS_COLUMN => ColumnRole::Status,
        SUMMARY_COLUMN => ColumnRole::Summary,
        h if h.contains("Outward") => ColumnRole::Outward { kind: link_kind(h) },
        h if h.contains("Inward") => ColumnRole::Inward { kind: link_kind(h) },
        _ => ColumnRole::Other,
    }
}

/// Extracts the relationship kind from a link header
///
/// `Inward issue link (Blocks)` gives `Blocks`: the text between the first
/// `(` and the first `)`. Empty when either is missing or the first `)`
/// comes before the first `(`.
pub fn link_kind(header: &str) -> String {
    match (header.find('('), header.find(')')) {
        (Some(open), Some(close)) if close > open => header[open + 1..close].to_string(),
        _ => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkDirection {
    Outward,
    Inward,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LinkColumn {
    index: usize,
    direction: LinkDirection,
    kind: String,
}

/// Column positions resolved from a header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLayout {
    key: usize,
    issue_type: usize,
    status: usize,
    summary: usize,
    links: Vec<LinkColumn>,
}

impl RecordLayout {
    /// Resolves the layout of a header
    ///
    /// Fails if one of the four fixed columns is absent. If a fixed column
    /// name appears twice, the first occurrence is used.
    pub fn from_header<S: AsRef<str>>(header: &[S]) -> Result<Self, ParseError> {
        let mut key = None;
        let mut issue_type = None;
        let mut status = None;
        let mut summary = None;
        let mut links = Vec::new();

        for (index, column) in header.iter().enumerate() {
            match classify_column(column.as_ref()) {
                ColumnRole::Key => {
                    key.get_or_insert(index);
                }
                ColumnRole::Type => {
                    issue_type.get_or_insert(index);
                }
                ColumnRole::Status => {
                    status.get_or_insert(index);
                }
                ColumnRole::Summary => {
                    summary.get_or_insert(index);
                }
                ColumnRole::Outward { kind } => links.push(LinkColumn {
                    index,
                    direction: LinkDirection::Outward,
                    kind,
                }),
                ColumnRole::Inward { kind } => links.push(LinkColumn {
                    index,
                    direction: LinkDirection::Inward,
                    kind,
                }),
                ColumnRole::Other => {}
            }
        }

        Ok(Self {
            key: key.ok_or(ParseError::MissingColumn(KEY_COLUMN))?,
            issue_type: issue_type.ok_or(ParseError::MissingColumn(TYPE_COLUMN))?,
            status: status.ok_or(ParseError::MissingColumn(STATUS_COLUMN))?,
            summary: summary.ok_or(ParseError::MissingColumn(SUMMARY_COLUMN))?,
            links,
        })
    }

    /// Builds an issue from one data row
    ///
    /// Cells past the end of a short row read as empty.
    pub fn parse_row<S: AsRef<str>>(&self, row: &[S]) -> Result<Issue, ParseError> {
        let cell = |index: usize| row.get(index).map(|c| c.as_ref()).unwrap_or("");

        let issue_type: IssueType = cell(self.issue_type).parse()?;
        let status: IssueStatus = cell(self.status).parse()?;
        let mut issue = Issue::new(cell(self.key), issue_type, status, cell(self.summary));

        for column in &self.links {
            let target = cell(column.index);
            if target.is_empty() {
                continue;
            }
            let link = Link::new(target, column.kind.clone());
            match column.direction {
                LinkDirection::Outward => issue.outbound_links.push(link),
                LinkDirection::Inward => issue.inbound_links.push(link),
            }
        }

        Ok(issue)
    }
}
