//! This directory defines the decision tree induction algorithm
//! and the classifier it grows.

/// Defines the decision tree induction algorithm.
pub mod dtree;
/// Defines a struct that builds `DecisionTree`.
pub mod builder;
/// Defines the classifier produced by `DecisionTree`.
pub mod classifier;
/// Defines the nodes of a grown tree.
mod node;
/// Split quality measures.
mod split;

pub use dtree::DecisionTree;
pub use builder::DecisionTreeBuilder;
pub use classifier::DecisionTreeClassifier;
pub use node::Node;
