//! A node struct used in the decision tree algorithm.
use serde::{Serialize, Deserialize};

use crate::{Classifier, Sample};

use std::collections::BTreeMap;
use std::fmt;

/// A single node of a decision tree.
///
/// A `Branch` tests one feature and dispatches on the observed value;
/// a `Leaf` predicts its label unconditionally.
/// Both variants carry a `label`: for a branch it is the majority
/// label of the training rows that reached the node, used as the
/// fallback prediction when a test row carries a feature value
/// never seen during training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// An internal node that splits on `feature`.
    Branch {
        /// The feature this node branches on.
        feature: String,
        /// Majority label of the rows that reached this node.
        label: String,
        /// One child per feature value observed during training.
        children: BTreeMap<String, Node>,
    },
    /// A terminal node.
    Leaf {
        /// The label predicted at this point.
        label: String,
    },
}

impl Node {
    /// Construct a branch node.
    pub fn branch<T, U>(
        feature: T,
        label: U,
        children: BTreeMap<String, Node>,
    ) -> Self
        where T: ToString,
              U: ToString,
    {
        Self::Branch {
            feature: feature.to_string(),
            label: label.to_string(),
            children,
        }
    }

    /// Construct a leaf node.
    pub fn leaf<T: ToString>(label: T) -> Self {
        Self::Leaf { label: label.to_string() }
    }

    /// The label this node falls back to.
    pub fn label(&self) -> &str {
        match self {
            Self::Branch { label, .. } => label,
            Self::Leaf { label } => label,
        }
    }

    /// The number of edges on the longest root-to-leaf path
    /// of the subtree rooted here. A leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Branch { children, .. } => {
                1 + children.values()
                    .map(Self::depth)
                    .max()
                    .unwrap_or(0)
            },
            Self::Leaf { .. } => 0,
        }
    }

    /// The number of leaves in the subtree rooted here.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Branch { children, .. } => {
                children.values()
                    .map(Self::leaf_count)
                    .sum()
            },
            Self::Leaf { .. } => 1,
        }
    }

    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch { feature, children, .. } => {
                let decl = format!(
                    "\tnode_{id} [ label = \"{feature} = ?\" ];\n",
                );

                let mut info = vec![decl];
                let mut next_id = id + 1;
                for (value, child) in children {
                    let child_id = next_id;
                    let (mut sub, return_id) = child.to_dot_info(child_id);
                    info.append(&mut sub);
                    next_id = return_id;

                    let edge = format!(
                        "\tnode_{id} -- node_{child_id} \
                         [ label = \"{value}\" ];\n",
                    );
                    info.push(edge);
                }

                (info, next_id)
            },
            Node::Leaf { label } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            },
        }
    }

    fn write_at(&self, f: &mut fmt::Formatter<'_>, depth: usize)
        -> fmt::Result
    {
        let pad = "│   ".repeat(depth);
        match self {
            Self::Branch { feature, label, children } => {
                writeln!(f, "{pad}├── [{feature}] default: {label}")?;
                let pad = "│   ".repeat(depth + 1);
                for (value, child) in children {
                    writeln!(f, "{pad}├── {value}:")?;
                    child.write_at(f, depth + 2)?;
                }
                Ok(())
            },
            Self::Leaf { label } => {
                writeln!(f, "{pad}├── {label}")
            },
        }
    }
}

impl Classifier for Node {
    fn predict(&self, sample: &Sample, row: usize) -> String {
        match self {
            Self::Branch { feature, label, children } => {
                let value = &sample[feature][row];
                match children.get(value) {
                    Some(child) => child.predict(sample, row),
                    // A value never seen during training is not an
                    // error; fall back to the majority label here.
                    None => label.clone(),
                }
            },
            Self::Leaf { label } => label.clone(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_at(f, 0)
    }
}
