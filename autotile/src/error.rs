// error.rs - Errors raised by grid access and tile lookup

use thiserror::Error;

/// Errors raised by [`Grid`](crate::Grid) and the auto-tiler.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TileError {
    #[error("grid dimensions {width}x{height} must both be non-zero")]
    InvalidDimension { width: usize, height: usize },
    #[error("cell index {index} is outside a grid of {len} cells")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("neighbor signature {0:#06b} does not fit in 4 bits")]
    InvalidSignature(u8),
}
