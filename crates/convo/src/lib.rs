//! Integer kernel convolution for 8-bit four channel images.
//!
//! ```
//! use convo::image::{ImageSize, PixelBuffer, PixelFormat, Rgba8};
//! use convo::imgproc::filter::{convolve, grid::KernelGrid, KernelSize};
//!
//! let src = PixelBuffer::from_size_val(
//!     ImageSize { width: 4, height: 4 },
//!     Rgba8::new(100, 100, 100, 255),
//!     PixelFormat::Rgba8888,
//! ).unwrap();
//!
//! let kernel = KernelGrid::sharpen().kernel(KernelSize::ThreeByThree);
//! let dst = convolve(&src, &kernel, 4, Rgba8::TRANSPARENT).unwrap();
//!
//! assert_eq!(dst.size(), src.size());
//! ```

#[doc(inline)]
pub use convo_image as image;

#[doc(inline)]
pub use convo_imgproc as imgproc;
