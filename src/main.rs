//! jira-mermaid - Jira CSV export to Mermaid graph

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = jira_mermaid::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
