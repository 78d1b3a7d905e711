/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Error when the row stride cannot hold a full row of pixels.
    #[error("Row stride ({0}) is smaller than the packed row size ({1})")]
    InvalidStride(usize, usize),

    /// Error when the data length does not match `stride * height`.
    #[error("Data length ({0}) does not match the buffer size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when the byte size of a buffer does not fit in `usize`.
    #[error("Buffer size ({0} x {1}) overflows usize")]
    SizeOverflow(usize, usize),

    /// Error when a pixel coordinate lies outside the image.
    #[error("Pixel index ({0}, {1}) is out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),
}
