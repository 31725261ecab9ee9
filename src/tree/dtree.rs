//! Defines the decision tree induction algorithm.

use rayon::prelude::*;
use fixedbitset::FixedBitSet;

use crate::Sample;
use crate::error::{Result, TreeError};
use crate::report::FitReport;
use super::split::{self, LabelCount};
use super::node::Node;
use super::classifier::DecisionTreeClassifier;

use std::collections::BTreeMap;
use std::time::Instant;

/// The decision tree algorithm for categorical rows.
/// Given a training sample whose columns are all string-valued,
/// [`DecisionTree`] grows a classifier tree by recursive greedy
/// splitting on the feature with the best gain ratio,
/// and outputs it as a [`DecisionTreeClassifier`].
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::tree::builder::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
///
/// // Read the training data from the CSV file.
/// let file = "/path/to/data/file.csv";
/// let sample = SampleReader::default()
///     .file(file)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// // Grow a tree on the training rows.
/// let tree = DecisionTreeBuilder::new(&sample)
///     .build();
/// let f = tree.fit(&sample).unwrap();
///
/// let predictions = f.predict_all(&sample);
///
/// let loss = sample.target()
///     .iter()
///     .zip(&predictions)
///     .filter(|(ty, py)| ty != py)
///     .count();
/// println!("{loss} training rows are misclassified");
/// ```
pub struct DecisionTree {
    features: FixedBitSet,
    parallel: bool,
    verbose: bool,
}

impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(crate) fn new(
        features: FixedBitSet,
        parallel: bool,
        verbose: bool,
    ) -> Self
    {
        Self { features, parallel, verbose, }
    }

    /// Grow a decision tree over the whole training sample.
    ///
    /// # Errors
    /// - [`TreeError::EmptyDataset`] when `sample` has zero rows;
    ///   the majority label is undefined there.
    /// - [`TreeError::InvalidTarget`] when a node must be scored for
    ///   a split but its rows carry more than two distinct target
    ///   labels. A sample whose rows all share one label never
    ///   reaches a split, so it grows a single leaf instead.
    pub fn fit(&self, sample: &Sample) -> Result<DecisionTreeClassifier> {
        let now = Instant::now();

        let (n_sample, n_feature) = sample.shape();
        if n_sample == 0 {
            return Err(TreeError::EmptyDataset);
        }
        assert_eq!(
            self.features.len(), n_feature,
            "The sample does not match the schema \
             given to `DecisionTreeBuilder`",
        );
        assert_eq!(
            sample.target().len(), n_sample,
            "The target column is not set. Use `Sample::set_target` \
             or `SampleReader::target_feature`.",
        );

        let indices = (0..n_sample).collect::<Vec<_>>();
        let root = self.grow(sample, indices, self.features.clone())?;

        if self.verbose {
            FitReport {
                n_sample,
                n_feature,
                depth: root.depth(),
                n_leaves: root.leaf_count(),
                elapsed: now.elapsed(),
            }
            .print_stats();
        }

        Ok(DecisionTreeClassifier::from(root))
    }

    /// Recursively grow the subtree over the rows in `indices`,
    /// splitting only on the columns set in `remaining`.
    fn grow(
        &self,
        sample: &Sample,
        indices: Vec<usize>,
        remaining: FixedBitSet,
    ) -> Result<Node>
    {
        let target = sample.target();
        let counts = split::label_counts(target, &indices);
        let label = majority_label(&counts);

        // Every row carries the same label.
        if counts.len() == 1 {
            return Ok(Node::leaf(label));
        }

        // Every remaining feature is constant over these rows,
        // so no split can separate anything.
        let featureless = remaining.ones()
            .all(|k| sample.features()[k].is_constant_on(&indices));
        if featureless {
            return Ok(Node::leaf(label));
        }

        // Splitting beyond this point scores impurities,
        // and the contract restricts scoring to two-label targets.
        if counts.len() != 2 {
            return Err(TreeError::InvalidTarget { found: counts.len() });
        }

        let (split_at, gain_ratio) =
            split::best_split(sample, &indices, &remaining);
        if gain_ratio == 0f64 {
            return Ok(Node::leaf(label));
        }

        // Partition the rows by the chosen feature's value.
        let feature = &sample.features()[split_at];
        let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for i in indices {
            groups.entry(feature[i].to_string())
                .or_default()
                .push(i);
        }

        // Each branch receives its own copy of the remaining set,
        // so consuming a feature here never leaks into a sibling.
        let mut rest = remaining;
        rest.set(split_at, false);

        let children = if self.parallel {
            groups.into_par_iter()
                .map(|(value, group)| {
                    let child = self.grow(sample, group, rest.clone())?;
                    Ok((value, child))
                })
                .collect::<Result<BTreeMap<_, _>>>()?
        } else {
            groups.into_iter()
                .map(|(value, group)| {
                    let child = self.grow(sample, group, rest.clone())?;
                    Ok((value, child))
                })
                .collect::<Result<BTreeMap<_, _>>>()?
        };

        Ok(Node::branch(feature.name(), label, children))
    }
}

/// The most frequent label in `counts`;
/// ties go to the lexicographically smallest label.
#[inline]
fn majority_label(counts: &LabelCount<'_>) -> String {
    let mut majority = ("", 0_usize);
    for (&label, &count) in counts.iter() {
        // Strict comparison: on a tie the earlier key wins,
        // and `BTreeMap` iterates keys in lexicographic order.
        if count > majority.1 {
            majority = (label, count);
        }
    }
    majority.0.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_majority_label_01() {
        let counts = LabelCount::from([("No", 1), ("Yes", 3)]);
        let result = majority_label(&counts);
        let expect = "Yes";
        assert_eq!(result, expect, "expected {expect}, got {result}.");
    }

    #[test]
    fn test_majority_label_02() {
        let counts = LabelCount::from([("Yes", 2), ("No", 2)]);
        let result = majority_label(&counts);
        let expect = "No";
        assert_eq!(result, expect, "expected {expect}, got {result}.");
    }

    #[test]
    fn test_majority_label_03() {
        let counts = LabelCount::from([("a", 1), ("b", 2), ("c", 2)]);
        let result = majority_label(&counts);
        let expect = "b";
        assert_eq!(result, expect, "expected {expect}, got {result}.");
    }
}
