use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::collections::HashMap;
use std::ops::Index;

use rand::prelude::*;

use crate::error::{Result, TreeError};
use super::feature::Feature;

/// A batch of rows stored column-wise.
/// Every column is a categorical [`Feature`];
/// one column may be designated as the target via [`Sample::set_target`].
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<String>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}

impl Sample {
    /// Read a CSV format file to [`Sample`] type.
    /// This method returns `Err` if the file does not exist.
    pub(crate) fn from_csv<P>(file: P, has_header: bool) -> Result<Self>
        where P: AsRef<Path>,
    {
        let file = File::open(file)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader, has_header)
    }

    /// Read a CSV from [`BufReader`].
    /// Every cell is kept as a (trimmed) string; nothing is parsed
    /// as a number.
    ///
    /// If the CSV file does not have a header row,
    /// this method assigns a default name for each column:
    /// `Feat. [1]`, `Feat. [2]`, ..., `Feat. [n]`.
    ///
    /// **Do not forget** to call [`Sample::set_target`] to
    /// assign the class label column of a training sample.
    pub fn from_reader<R>(reader: BufReader<R>, mut has_header: bool)
        -> Result<Self>
        where R: Read,
    {
        // 1-based file line of the first data row.
        let offset = if has_header { 2 } else { 1 };
        let mut lines = reader.lines();

        let mut features = Vec::new();
        if has_header {
            if let Some(line) = lines.next() {
                features = line?.split(',')
                    .map(|name| Feature::new(name.trim()))
                    .collect::<Vec<_>>();
            }
        }
        let mut n_sample = 0_usize;

        for (i, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() { continue; }

            // If the header does not exist,
            // construct a dummy header from the first data row.
            if !has_header {
                let n_feature = line.split(',').count();
                features = (1..=n_feature)
                    .map(|k| Feature::new(format!("Feat. [{k}]")))
                    .collect::<Vec<_>>();
                has_header = true;
            }

            let expected = features.len();
            let found = line.split(',').count();
            if found != expected {
                return Err(TreeError::MalformedRow {
                    line: i + offset,
                    expected,
                    found,
                });
            }

            line.split(',')
                .zip(features.iter_mut())
                .for_each(|(value, feat)| {
                    feat.append(value.trim().to_string());
                });

            n_sample += 1;
        }

        let n_feature = features.len();
        let target = Vec::with_capacity(0);

        let name_to_index = features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        let sample = Self {
            name_to_index, features, target, n_sample, n_feature,
        };

        Ok(sample)
    }

    /// Returns the slice of target values.
    /// Empty until [`Sample::set_target`] is called.
    pub fn target(&self) -> &[String] {
        &self.target[..]
    }

    /// Returns the distinct target values in lexicographic order.
    pub fn unique_target(&self) -> Vec<&str> {
        let mut target = self.target.iter()
            .map(|y| y.as_str())
            .collect::<Vec<_>>();
        target.sort_unstable();
        target.dedup();
        target
    }

    /// Returns a slice of the features.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }

    /// Move the column named `target` out of the feature set
    /// and assign it to `self.target`.
    /// The old value assigned to `self.target` will be dropped.
    pub fn set_target<S: AsRef<str>>(mut self, target: S) -> Result<Self> {
        let target = target.as_ref();
        let pos = self.features.iter()
            .position(|feat| feat.name() == target)
            .ok_or_else(|| TreeError::UnknownFeature {
                name: target.to_string(),
            })?;

        let target = self.features.remove(pos).into_vals();
        self.target = target;
        self.n_feature -= 1;

        self.name_to_index = self.features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        Ok(self)
    }

    /// Returns the pair of the number of rows and
    /// the number of feature columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }

    /// Set the feature (column) names.
    /// This method panics when the length of the given feature names is
    /// not equal to the one of `self.features`.
    pub fn replace_names<S, T>(&mut self, names: T) -> Vec<String>
        where S: ToString + std::fmt::Display,
              T: AsRef<[S]>,
    {
        let names = names.as_ref();

        let n_feature = self.shape().1;
        let n_name = names.len();
        assert_eq!(
            n_name, n_feature,
            "The number of names is \
            not equal to the one of `self.features.`"
        );

        let old_names = names.iter()
            .zip(&mut self.features[..])
            .map(|(name, feature)| feature.replace_name(name))
            .collect();

        self.name_to_index = self.features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        old_names
    }

    /// Returns the `idx`-th row `(x, y)`.
    /// Panics when the target column is not set.
    pub fn at(&self, idx: usize) -> (Vec<String>, String) {
        let x = self.features.iter()
            .map(|feat| feat[idx].to_string())
            .collect::<Vec<_>>();
        let y = self.target[idx].clone();

        (x, y)
    }

    /// Shuffle the rows with a seeded RNG and split them into
    /// a training sample and a holdout sample.
    /// `ratio` is the fraction of rows that lands in the first sample.
    /// This method panics when `ratio` is outside `(0, 1)`
    /// or when the target column is not set.
    pub fn shuffle_split(&self, ratio: f64, seed: u64) -> (Self, Self) {
        assert!(
            0f64 < ratio && ratio < 1f64,
            "Training ratio should be in `(0, 1)`."
        );

        let mut ix = (0..self.n_sample).collect::<Vec<_>>();
        let mut rng = StdRng::seed_from_u64(seed);
        ix.shuffle(&mut rng);

        let train_size = (ratio * self.n_sample as f64) as usize;

        let mut train = self.empty_like();
        for &i in &ix[..train_size] {
            let (x, y) = self.at(i);
            train.append(x, y);
        }

        let mut test = self.empty_like();
        for &i in &ix[train_size..] {
            let (x, y) = self.at(i);
            test.append(x, y);
        }

        (train, test)
    }

    /// A sample with the same schema and no rows.
    fn empty_like(&self) -> Self {
        let features = self.features.iter()
            .map(|feat| Feature::new(feat.name()))
            .collect();
        Self {
            name_to_index: self.name_to_index.clone(),
            features,
            target: Vec::new(),
            n_sample: 0,
            n_feature: self.n_feature,
        }
    }

    fn append(&mut self, x: Vec<String>, y: String) {
        self.features.iter_mut()
            .zip(x)
            .for_each(|(feat, value)| {
                feat.append(value);
            });
        self.target.push(y);
        self.n_sample += 1;
    }
}

impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Feature;

    fn index(&self, name: S) -> &Self::Output {
        let name: &str = name.as_ref();
        let k = *self.name_to_index.get(name)
            .unwrap_or_else(|| {
                panic!("The feature named \"{name}\" does not exist")
            });
        &self.features[k]
    }
}
