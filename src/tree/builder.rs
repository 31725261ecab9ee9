//! A struct that builds [`DecisionTree`](crate::tree::dtree::DecisionTree).

use fixedbitset::FixedBitSet;

use crate::Sample;
use super::dtree::DecisionTree;

/// The default value of `parallel` for `DecisionTreeBuilder`.
/// Sibling subtrees are grown sequentially unless requested otherwise.
pub const DEFAULT_PARALLEL: bool = false;

/// The default value of `verbose` for `DecisionTreeBuilder`.
pub const DEFAULT_VERBOSE: bool = false;

/// A struct that builds [`DecisionTree`].
/// The knobs are set by the methods of the same name,
/// each of which consumes `self` so that calls chain.
///
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
///
/// let file = "/path/to/data/file.csv";
/// let sample = SampleReader::default()
///     .file(file)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let tree = DecisionTreeBuilder::new(&sample)
///     .parallel(true)
///     .verbose(true)
///     .build();
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder<'a> {
    sample: &'a Sample,
    parallel: bool,
    verbose: bool,
}

impl<'a> DecisionTreeBuilder<'a> {
    /// Construct a new instance of `DecisionTreeBuilder`
    /// with the default knobs.
    pub fn new(sample: &'a Sample) -> Self {
        Self {
            sample,
            parallel: DEFAULT_PARALLEL,
            verbose: DEFAULT_VERBOSE,
        }
    }

    /// Grow sibling subtrees in parallel.
    /// The grown tree does not depend on this flag.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Print a short summary of the grown tree to stdout
    /// once `DecisionTree::fit` finishes.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Build a [`DecisionTree`] over every feature of the sample.
    pub fn build(self) -> DecisionTree {
        let (_, n_feature) = self.sample.shape();

        // Initially, every feature column is a split candidate.
        let mut features = FixedBitSet::with_capacity(n_feature);
        features.set_range(.., true);

        DecisionTree::new(features, self.parallel, self.verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Classifier;
    use std::io::BufReader;

    fn training_examples() -> Sample {
        let bytes = &b"\
            weather,wind,class\n\
            Sunny,Weak,Yes\n\
            Rainy,Strong,No\n\
        "[..];
        Sample::from_reader(BufReader::new(bytes), true)
            .unwrap()
            .set_target("class")
            .unwrap()
    }

    #[test]
    fn test_build_01() {
        let sample = training_examples();
        let tree = DecisionTreeBuilder::new(&sample).build();
        let f = tree.fit(&sample).unwrap();

        let result = f.predict(&sample, 0);
        let expect = "Yes";
        assert_eq!(result, expect, "expected {expect}, got {result}.");
    }
}
