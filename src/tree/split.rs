//! Gain-ratio scoring for candidate splits.

use rayon::prelude::*;
use fixedbitset::FixedBitSet;

use std::collections::{BTreeMap, HashMap};

use crate::Sample;
use crate::sample::Feature;

/// Maps a target label to the number of rows carrying it.
/// A `BTreeMap` so that iteration order is the lexicographic
/// label order, which the majority tie-break relies on.
pub(crate) type LabelCount<'a> = BTreeMap<&'a str, usize>;

/// Count the target labels over the rows in `indices`.
pub(crate) fn label_counts<'a>(target: &'a [String], indices: &[usize])
    -> LabelCount<'a>
{
    let mut counts = LabelCount::new();
    for &i in indices {
        *counts.entry(target[i].as_str()).or_insert(0) += 1;
    }
    counts
}

/// Returns the gini impurity of the given label counts.
#[inline(always)]
pub(crate) fn gini_impurity(counts: &LabelCount<'_>) -> f64 {
    let total = counts.values().sum::<usize>();
    if total == 0 { return 0f64; }

    let total = total as f64;
    let correct = counts.values()
        .map(|&c| (c as f64 / total).powi(2))
        .sum::<f64>();

    (1f64 - correct).max(0f64)
}

/// Gain ratio of splitting the rows in `indices` on `feature`.
///
/// Partition the rows by the feature value; the gain ratio is the
/// drop from `parent_gini` to the size-weighted child impurity,
/// normalized by the entropy of the partition sizes.
/// A partition whose split information is zero (the feature is
/// constant over `indices`) scores `0` rather than dividing by zero.
fn gain_ratio(
    feature: &Feature,
    target: &[String],
    indices: &[usize],
    parent_gini: f64,
) -> f64
{
    let n = indices.len() as f64;

    let mut groups: HashMap<&str, LabelCount<'_>> = HashMap::new();
    for &i in indices {
        let value = &feature[i];
        *groups.entry(value)
            .or_default()
            .entry(target[i].as_str())
            .or_insert(0) += 1;
    }

    let mut weighted_gini = 0f64;
    let mut split_info = 0f64;
    for counts in groups.values() {
        let group_size = counts.values().sum::<usize>();
        let w = group_size as f64 / n;
        weighted_gini += w * gini_impurity(counts);
        if w > 0f64 {
            split_info -= w * w.log2();
        }
    }

    if split_info != 0f64 {
        (parent_gini - weighted_gini) / split_info
    } else {
        0f64
    }
}

/// Returns the candidate feature with the maximal gain ratio,
/// as a pair of column index and score.
///
/// Ties are broken towards the lexicographically smallest feature
/// name. The comparator below is a total order over the candidates
/// (scores are finite and names are distinct), so the parallel
/// reduction is deterministic.
pub(crate) fn best_split(
    sample: &Sample,
    indices: &[usize],
    remaining: &FixedBitSet,
) -> (usize, f64)
{
    let target = sample.target();
    let parent_counts = label_counts(target, indices);
    let parent_gini = gini_impurity(&parent_counts);

    sample.features()
        .par_iter()
        .enumerate()
        .filter(|(k, _)| remaining.contains(*k))
        .map(|(k, feature)| {
            let score = gain_ratio(feature, target, indices, parent_gini);
            (score, feature.name(), k)
        })
        .max_by(|x, y| {
            x.0.partial_cmp(&y.0)
                .unwrap()
                .then_with(|| y.1.cmp(x.1))
        })
        .map(|(score, _, k)| (k, score))
        .expect("No candidate feature to split on")
}
