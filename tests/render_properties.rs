//! Property tests for parsing and rendering
//!
//! Exercises the library API over generated issue sets: sanitized ids,
//! ignored link kinds and output stability.

use std::collections::BTreeSet;

use jira_mermaid::domain::{render, Issue, IssueStatus, IssueType, Link, NodeId, RenderOptions};
use proptest::prelude::*;

fn issue_type() -> impl Strategy<Value = IssueType> {
    prop::sample::select(IssueType::ALL.to_vec())
}

fn issue_status() -> impl Strategy<Value = IssueStatus> {
    prop::sample::select(IssueStatus::ALL.to_vec())
}

/// Keys shaped like real Jira keys: `ABC-123`
fn jira_key() -> impl Strategy<Value = String> {
    "[A-Z]{1,5}-[0-9]{1,4}"
}

fn link_kind() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Blocks".to_string(),
        "Cloners".to_string(),
        "Relates".to_string(),
        String::new(),
    ])
}

fn link() -> impl Strategy<Value = Link> {
    (jira_key(), link_kind()).prop_map(|(key, kind)| Link::new(key, kind))
}

fn issue() -> impl Strategy<Value = Issue> {
    (
        jira_key(),
        issue_type(),
        issue_status(),
        "[a-zA-Z \"]{0,20}",
        prop::collection::vec(link(), 0..4),
        prop::collection::vec(link(), 0..4),
    )
        .prop_map(|(key, issue_type, status, summary, outbound, inbound)| {
            let mut issue = Issue::new(key, issue_type, status, summary);
            issue.outbound_links = outbound;
            issue.inbound_links = inbound;
            issue
        })
}

fn options_ignoring(kinds: &[&str]) -> RenderOptions {
    RenderOptions {
        ignore_kinds: kinds.iter().map(|k| k.to_string()).collect(),
        ..RenderOptions::default()
    }
}

fn edge_count(output: &str) -> usize {
    output.lines().filter(|line| line.contains("-->")).count()
}

proptest! {
    #[test]
    fn sanitized_ids_have_no_hyphen(key in jira_key()) {
        prop_assert!(!NodeId::from_key(&key).as_str().contains('-'));
    }

    #[test]
    fn sanitizing_keeps_distinct_keys_distinct(keys in prop::collection::btree_set(jira_key(), 1..20)) {
        let ids: BTreeSet<NodeId> = keys.iter().map(|k| NodeId::from_key(k)).collect();
        prop_assert_eq!(ids.len(), keys.len());
    }

    #[test]
    fn one_edge_per_link_not_ignored(issues in prop::collection::vec(issue(), 0..8)) {
        let options = options_ignoring(&["Cloners"]);
        let output = render(&issues, &options);

        let expected = issues
            .iter()
            .flat_map(|i| i.outbound_links.iter().chain(&i.inbound_links))
            .filter(|link| link.kind != "Cloners")
            .count();

        prop_assert_eq!(edge_count(&output), expected);
        prop_assert!(!output.contains("-- Cloners -->"));
    }

    #[test]
    fn one_node_line_per_issue(issues in prop::collection::vec(issue(), 0..8)) {
        let output = render(&issues, &RenderOptions::default());
        let nodes = output.lines().filter(|line| line.contains(":::")).count();
        prop_assert_eq!(nodes, issues.len());
    }

    #[test]
    fn rendering_twice_is_identical(issues in prop::collection::vec(issue(), 0..8)) {
        let options = options_ignoring(&["Cloners", "Relates"]);
        prop_assert_eq!(render(&issues, &options), render(&issues, &options));
    }

    #[test]
    fn summaries_never_break_label_quoting(issue in issue()) {
        let output = render(std::slice::from_ref(&issue), &RenderOptions::default());
        let node = output.lines().nth(1).unwrap();
        // Exactly the two quotes around the label
        prop_assert_eq!(node.matches('"').count(), 2);
    }
}
