//! Constants shared across the crate.

/// Initial capacity for column buffers while reading a file.
pub const BUFFER_SIZE: usize = 256;
