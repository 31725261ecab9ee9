//! Defines the classifier produced by [`DecisionTree`](crate::tree::dtree::DecisionTree).

use serde::{Serialize, Deserialize};

use crate::Sample;
use crate::error::Result;
use crate::hypothesis::Classifier;
use super::node::Node;

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Decision tree classifier.
/// This struct is just a wrapper of [`Node`],
/// the root of the grown tree.
/// It is constructed by [`DecisionTree::fit`](crate::tree::dtree::DecisionTree::fit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
}

impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}

impl DecisionTreeClassifier {
    /// Returns the root node of the tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of edges on the longest root-to-leaf path.
    /// A tree of a single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Number of leaves of the tree.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Write the tree to `path` in the DOT language.
    /// You can convert the output into a figure
    /// by running, e.g., `dot -Tpng tree.dot -o tree.png`.
    pub fn to_dot_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;
        let (info, _) = self.root.to_dot_info(0);
        for row in info {
            f.write_all(row.as_bytes())?;
        }
        f.write_all(b"}\n")?;
        Ok(())
    }
}

impl Classifier for DecisionTreeClassifier {
    fn predict(&self, sample: &Sample, row: usize) -> String {
        self.root.predict(sample, row)
    }
}

impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DECISION TREE:")?;
        write!(f, "{}", self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn two_leaf_tree() -> DecisionTreeClassifier {
        let children = BTreeMap::from([
            ("Rainy".to_string(), Node::leaf("No")),
            ("Sunny".to_string(), Node::leaf("Yes")),
        ]);
        DecisionTreeClassifier::from(
            Node::branch("weather", "Yes", children)
        )
    }

    #[test]
    fn test_depth_01() {
        let f = two_leaf_tree();
        let result = f.depth();
        let expect = 1;
        assert_eq!(result, expect, "expected {expect}, got {result}.");
    }

    #[test]
    fn test_leaf_count_01() {
        let f = two_leaf_tree();
        let result = f.leaf_count();
        let expect = 2;
        assert_eq!(result, expect, "expected {expect}, got {result}.");
    }

    #[test]
    fn test_display_01() {
        let f = two_leaf_tree();
        let result = format!("{f}");
        let expect = "DECISION TREE:\n\
                      ├── [weather] default: Yes\n\
                      │   ├── Rainy:\n\
                      │   │   ├── No\n\
                      │   ├── Sunny:\n\
                      │   │   ├── Yes\n";
        assert_eq!(result, expect, "expected {expect}, got {result}.");
    }
}
