//! Exports the structs and traits of this crate.
//!
pub use crate::sample::{
    // Training/test data
    Sample,
    SampleReader,
    Feature,
};


pub use crate::tree::{
    // Tree induction
    DecisionTree,
    DecisionTreeBuilder,


    // The grown classifier
    DecisionTreeClassifier,
    Node,
};


pub use crate::hypothesis::Classifier;


pub use crate::error::{
    Result,
    TreeError,
};
