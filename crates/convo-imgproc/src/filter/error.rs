use convo_image::ImageError;

use crate::parallel::ParallelError;

/// An error type for the filter module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FilterError {
    /// Error when the kernel does not have 9, 25 or 49 coefficients.
    #[error("Kernel must have 9, 25 or 49 coefficients, got {0}")]
    InvalidKernel(usize),

    /// Error when the divisor is zero.
    #[error("Divisor must not be zero")]
    InvalidDivisor,

    /// Error when the image has no pixels.
    #[error("Image dimensions must be positive, got {0}x{1}")]
    InvalidDimensions(usize, usize),

    /// Error when a kernel grid cell index is outside the grid.
    #[error("Kernel grid cell {0} is out of bounds")]
    GridIndexOutOfBounds(usize),

    /// Error when the operation was cancelled through its token.
    #[error("Convolution was cancelled")]
    Cancelled,

    /// Error from the image module.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error from the parallel execution module.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}
