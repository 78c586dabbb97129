//! Domain models for jira-mermaid
//!
//! Parsing, presentation and rendering, without any I/O concerns.

mod id;
mod issue;
mod record;
mod style;
mod graph;

pub use id::NodeId;
pub use issue::{Issue, IssueStatus, IssueType, Link};
pub use record::{classify_column, link_kind, ColumnRole, ParseError, RecordLayout};
pub use style::{ClassDef, Colors, Presentation, ShapePair, Shapes, DEFAULT_CLASS};
pub use graph::{render, suppressed_links, DirectionError, GraphDirection, RenderOptions};
