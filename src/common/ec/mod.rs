mod block;
mod encoder;
mod galois;

pub(crate) use block::*;
pub use encoder::*;

// Longest block in the version table holds 153 codewords
pub const MAX_BLOCK_SIZE: usize = 256;
