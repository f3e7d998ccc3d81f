//! # Instance Location Paths
//!
//! `InstancePath` is the address of a sub-value within the instance being
//! validated, rendered `$`-rooted with `.key` and `[index]` segments. Paths
//! are immutable value objects: descending into a child produces an
//! extended copy, so a path attached to a diagnostic can never be mutated
//! retroactively by later traversal.
//!
//! All rendering flows through the one `Display` impl below. Keyword
//! evaluators never format path text themselves, so object/array descent
//! composition is tested once and reused for every violation kind.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One step in an instance location path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PathSegment {
    /// Descent into an object property, rendered `.name`.
    Key(String),
    /// Descent into an array element, rendered `[i]`, zero-based.
    Index(usize),
}

/// The `$`-rooted address of a value within the instance document.
///
/// # Invariants
///
/// - Immutable after construction; `child_key`/`child_index` return
///   extended copies and never touch the receiver.
/// - Ordered and hashable so diagnostics can live in ordered sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstancePath {
    segments: Vec<PathSegment>,
}

impl InstancePath {
    /// The root path `$`.
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend this path with an object property step.
    pub fn child_key(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Key(key.to_string()));
        Self { segments }
    }

    /// Extend this path with an array index step.
    pub fn child_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// The segments below the root, in descent order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Depth below the root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for InstancePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            match segment {
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(i) => write!(f, "[{i}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_renders_dollar() {
        assert_eq!(InstancePath::root().to_string(), "$");
    }

    #[test]
    fn test_key_descent() {
        let path = InstancePath::root().child_key("case").child_key("caseData");
        assert_eq!(path.to_string(), "$.case.caseData");
    }

    #[test]
    fn test_index_descent() {
        let path = InstancePath::root().child_key("caseData").child_index(1);
        assert_eq!(path.to_string(), "$.caseData[1]");
    }

    #[test]
    fn test_mixed_descent() {
        let path = InstancePath::root()
            .child_key("case")
            .child_index(0)
            .child_key("value");
        assert_eq!(path.to_string(), "$.case[0].value");
    }

    #[test]
    fn test_child_does_not_mutate_parent() {
        let parent = InstancePath::root().child_key("a");
        let child = parent.child_index(3);
        assert_eq!(parent.to_string(), "$.a");
        assert_eq!(child.to_string(), "$.a[3]");
        assert_eq!(parent.depth(), 1);
        assert_eq!(child.depth(), 2);
    }

    #[test]
    fn test_ordering_is_structural() {
        let a = InstancePath::root().child_key("a");
        let b = InstancePath::root().child_key("b");
        assert!(a < b);
        assert_eq!(a, InstancePath::root().child_key("a"));
    }
}
