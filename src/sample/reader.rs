use std::path::Path;

use crate::error::Result;
use super::sample_struct::Sample;

/// A builder that reads a CSV file into a [`Sample`].
#[derive(Default)]
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
}

impl<P, S> SampleReader<P, S> {
    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}

impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}

impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for the target label.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}

impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments
    /// and returns the loaded [`Sample`].
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let file = match self.file {
            Some(file) => file,
            None => panic!(
                "The file name is not set. Use `SampleReader::file`."
            ),
        };
        let target = match self.target {
            Some(target) => target,
            None => panic!(
                "Target (class) column is not specified. \
                Use `SampleReader::target_feature`."
            ),
        };

        Sample::from_csv(file, self.has_header)?
            .set_target(target.as_ref())
    }
}
