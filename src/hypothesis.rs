//! The `Classifier` trait implemented by every hypothesis in this crate.

use crate::Sample;

/// A trait that defines the behavior of a classifier
/// over categorical rows.
/// You only need to implement the `predict` method.
pub trait Classifier {
    /// Predicts the label of the `row`-th row of `sample`.
    fn predict(&self, sample: &Sample, row: usize) -> String;

    /// Predicts the labels of all rows of `sample`,
    /// in row order, one label per row.
    fn predict_all(&self, sample: &Sample) -> Vec<String> {
        let n_sample = sample.shape().0;
        (0..n_sample).map(|row| self.predict(sample, row))
            .collect::<Vec<_>>()
    }
}
