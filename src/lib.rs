//! jira-mermaid - Turn a Jira CSV export into a Mermaid graph
//!
//! Each exported issue becomes a node shaped by its type and colored by its
//! status; each issue link column becomes a labeled edge. The pipeline is
//! strictly linear: read the CSV ([`storage`]), parse rows into issues and
//! render them ([`domain`]), print the result ([`cli`]).

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{render, GraphDirection, Issue, IssueStatus, IssueType, Link, RenderOptions};
