//! Error types for tree induction and data loading.

use std::fmt;
use std::io;

/// Errors reported by tree induction and the data layer.
///
/// Induction-time errors abort the whole `fit` call;
/// no partial tree is ever returned.
#[derive(Debug)]
pub enum TreeError {
    /// Tree induction received zero rows,
    /// so the majority label is undefined.
    EmptyDataset,

    /// The target column does not carry exactly two distinct values.
    InvalidTarget {
        /// The number of distinct target values found.
        found: usize,
    },

    /// A column was designated by a name the schema does not contain.
    UnknownFeature {
        /// The requested column name.
        name: String,
    },

    /// A CSV row does not match the schema width.
    MalformedRow {
        /// 1-based line number in the file.
        line: usize,
        /// The number of fields the schema demands.
        expected: usize,
        /// The number of fields found on the line.
        found: usize,
    },

    /// I/O error while reading or writing a file.
    Io(io::Error),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDataset => {
                write!(
                    f,
                    "empty training set: tree induction needs at least one row"
                )
            },
            Self::InvalidTarget { found } => {
                write!(
                    f,
                    "invalid target column: expected 2 distinct labels, \
                     got {found}"
                )
            },
            Self::UnknownFeature { name } => {
                write!(f, "the feature named `{name}` does not exist")
            },
            Self::MalformedRow { line, expected, found } => {
                write!(
                    f,
                    "malformed row at line {line}: \
                     expected {expected} fields, got {found}"
                )
            },
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for TreeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for TreeError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TreeError>;
