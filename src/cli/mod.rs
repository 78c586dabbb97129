//! # Command-Line Interface
//!
//! A single command: read a Jira CSV export, print a Mermaid graph.
//!
//! ```bash
//! jira-mermaid --csv-file issues.csv --graph-direction LR > issues.mmd
//! ```
//!
//! ## Flags
//!
//! | Group | Flags |
//! |-------|-------|
//! | Input | `--csv-file` |
//! | Links | `--ignore-links` |
//! | Shapes | `--{task,bug,spike,default}-shape-{left,right}` |
//! | Colors | `--{todo,closed,in-progress,code-review,review,default}-color` |
//! | Layout | `--graph-direction` |
//! | Config | `--config`, `--print-config` |
//!
//! Flags override the TOML configuration described in
//! [`crate::storage::Config`].
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for diagnostics on stderr; stdout only ever
//! carries the generated document.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the conversion.

mod app;
mod output;
mod convert;

pub use app::{Cli, run};
pub use output::Output;
