//! Struct `Sample` represents a batch of categorical rows.

// Provides feature (column) struct.
pub(crate) mod feature;
// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod reader;


pub use reader::SampleReader;
pub use sample_struct::Sample;
pub use feature::Feature;
