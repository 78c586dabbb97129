//! Mermaid node identifiers
//!
//! Jira keys look like `PROJ-12`, but Mermaid identifiers cannot contain
//! `-`. A [`NodeId`] is the key with every `-` replaced by `_`
//! (e.g. `PROJ-12` becomes `PROJ_12`).

use std::fmt;

/// A key sanitized for use as a Mermaid node or edge endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    /// Sanitizes an issue key
    pub fn from_key(key: &str) -> Self {
        Self(key.replace('-', "_"))
    }

    /// Returns the sanitized identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_hyphen() {
        assert_eq!(NodeId::from_key("PROJ-12").as_str(), "PROJ_12");
        assert_eq!(NodeId::from_key("A-B-C-1").as_str(), "A_B_C_1");
    }

    #[test]
    fn keys_without_hyphen_are_unchanged() {
        assert_eq!(NodeId::from_key("ROOT").as_str(), "ROOT");
        assert_eq!(NodeId::from_key("").as_str(), "");
    }

    #[test]
    fn hyphen_placement_does_not_collide() {
        let a = NodeId::from_key("AB-12");
        let b = NodeId::from_key("A-B12");
        let c = NodeId::from_key("AB1-2");
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn display_matches_sanitized_key() {
        let id = NodeId::from_key("X-1");
        assert_eq!(id.to_string(), "X_1");
        assert_eq!(id.to_string(), id.as_str());
    }
}
