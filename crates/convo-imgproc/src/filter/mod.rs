//! Filter operations
//!
//! This module provides integer kernel convolution for 8-bit four channel
//! pixel buffers, together with the kernels and the editing grid that feed it.

/// Border handling for kernel taps outside the image.
mod border;
pub use border::*;

/// Convolution operations
mod convolution;
pub use convolution::*;

/// Filter error types
mod error;
pub use error::FilterError;

/// The 7x7 kernel editing grid
pub mod grid;

/// Kernel type and sizes
mod kernel;
pub use kernel::*;

/// Filter kernels
pub mod kernels;
