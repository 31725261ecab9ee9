#![warn(missing_docs)]

//!
//! A crate that grows decision trees over categorical data.
//!
//! Every feature column and the target column are treated as
//! unordered string categories,
//! so no encoding step is needed before fitting:
//! read a CSV file, name the target column, and fit.
//!
//! The tree is grown by recursive greedy splitting.
//! At every node the feature with the largest *gain ratio*
//! (Gini impurity reduction normalized by split information)
//! is chosen,
//! one child is grown per observed value of that feature,
//! and growth stops once a node becomes pure
//! or no split makes progress.
//!
//! # Example
//!
//! ```no_run
//! use minitrees::prelude::*;
//!
//! // Read a CSV file and mark the `class` column as the target.
//! let sample = SampleReader::default()
//!     .file("/path/to/data/file.csv")
//!     .has_header(true)
//!     .target_feature("class")
//!     .read()
//!     .unwrap();
//!
//! // Grow a tree over the training rows.
//! let tree = DecisionTreeBuilder::new(&sample)
//!     .verbose(true)
//!     .build();
//! let f = tree.fit(&sample).unwrap();
//!
//! // Print the grown tree and classify the training rows.
//! println!("{f}");
//! let predictions = f.predict_all(&sample);
//! ```

pub mod constants;
pub mod error;
pub mod sample;
pub mod hypothesis;
pub mod tree;
pub mod prelude;

mod report;


pub use sample::{
    Sample,
    SampleReader,
    Feature,
};

pub use hypothesis::Classifier;

pub use tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
};

pub use error::{
    Result,
    TreeError,
};
