use crate::color::{PixelFormat, Rgba8};
use crate::error::ImageError;

/// Number of channels of every pixel in a [`PixelBuffer`].
pub const CHANNELS: usize = 4;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use convo_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Whether the size covers no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// A strided buffer of 8-bit, four channel pixels.
///
/// The channel `ch` of the pixel at row `r`, column `c` lives at byte offset
/// `r * stride + c * 4 + ch`. Bytes between `width * 4` and `stride` at the end
/// of every row are padding and carry no pixel data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    size: ImageSize,
    stride: usize,
    format: PixelFormat,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new pixel buffer from raw bytes.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `stride` - The number of bytes per row, at least `width * 4`.
    /// * `data` - The pixel bytes, exactly `stride * height` long.
    /// * `format` - The byte order of the channels.
    ///
    /// # Errors
    ///
    /// If the stride is too small for a row, the data length does not match
    /// `stride * height`, or either product overflows, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use convo_image::{ImageSize, PixelBuffer, PixelFormat};
    ///
    /// let buffer = PixelBuffer::new(
    ///     ImageSize { width: 2, height: 3 },
    ///     12,
    ///     vec![0u8; 12 * 3],
    ///     PixelFormat::Rgba8888,
    /// ).unwrap();
    ///
    /// assert_eq!(buffer.width(), 2);
    /// assert_eq!(buffer.stride(), 12);
    /// ```
    pub fn new(
        size: ImageSize,
        stride: usize,
        data: Vec<u8>,
        format: PixelFormat,
    ) -> Result<Self, ImageError> {
        let packed = packed_stride(size.width)?;
        if stride < packed {
            return Err(ImageError::InvalidStride(stride, packed));
        }

        let len = stride
            .checked_mul(size.height)
            .ok_or(ImageError::SizeOverflow(stride, size.height))?;
        if data.len() != len {
            return Err(ImageError::InvalidDataLength(data.len(), len));
        }

        Ok(Self {
            size,
            stride,
            format,
            data,
        })
    }

    /// Create a tightly packed RGBA buffer.
    pub fn from_rgba(size: ImageSize, data: Vec<u8>) -> Result<Self, ImageError> {
        Self::new(size, packed_stride(size.width)?, data, PixelFormat::Rgba8888)
    }

    /// Create a tightly packed buffer with every pixel set to `color`.
    ///
    /// # Examples
    ///
    /// ```
    /// use convo_image::{ImageSize, PixelBuffer, PixelFormat, Rgba8};
    ///
    /// let buffer = PixelBuffer::from_size_val(
    ///     ImageSize { width: 2, height: 2 },
    ///     Rgba8::new(1, 2, 3, 4),
    ///     PixelFormat::Argb8888,
    /// ).unwrap();
    ///
    /// assert_eq!(buffer.pixel(1, 1), Some([4, 1, 2, 3]));
    /// ```
    pub fn from_size_val(
        size: ImageSize,
        color: Rgba8,
        format: PixelFormat,
    ) -> Result<Self, ImageError> {
        let stride = packed_stride(size.width)?;
        let len = stride
            .checked_mul(size.height)
            .ok_or(ImageError::SizeOverflow(stride, size.height))?;
        let px = color.to_bytes(format);
        let data = px.iter().copied().cycle().take(len).collect();
        Self::new(size, stride, data, format)
    }

    /// Create a zeroed buffer with the same size, stride and format as `self`.
    pub fn zeros_like(&self) -> Self {
        Self {
            size: self.size,
            stride: self.stride,
            format: self.format,
            data: vec![0u8; self.data.len()],
        }
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of bytes per row.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Get the byte order of the channels.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Get the raw bytes, row padding included.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get the raw bytes mutably, row padding included.
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return its bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Get the pixel bytes of a row, without the padding.
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.height() {
            return None;
        }
        let start = row * self.stride;
        Some(&self.data[start..start + self.width() * CHANNELS])
    }

    /// Get a single channel value at `[row, col, ch]`.
    pub fn get(&self, index: [usize; 3]) -> Option<&u8> {
        let [row, col, ch] = index;
        if row >= self.height() || col >= self.width() || ch >= CHANNELS {
            return None;
        }
        self.data.get(row * self.stride + col * CHANNELS + ch)
    }

    /// Get the four bytes of the pixel at `(row, col)`.
    pub fn pixel(&self, row: usize, col: usize) -> Option<[u8; 4]> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        let offset = row * self.stride + col * CHANNELS;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.data[offset..offset + CHANNELS]);
        Some(px)
    }

    /// Overwrite the four bytes of the pixel at `(row, col)`.
    ///
    /// # Errors
    ///
    /// If the coordinate is outside the image, an error is returned.
    pub fn set_pixel(&mut self, row: usize, col: usize, px: [u8; 4]) -> Result<(), ImageError> {
        if row >= self.height() || col >= self.width() {
            return Err(ImageError::PixelIndexOutOfBounds(
                col,
                row,
                self.width(),
                self.height(),
            ));
        }
        let offset = row * self.stride + col * CHANNELS;
        self.data[offset..offset + CHANNELS].copy_from_slice(&px);
        Ok(())
    }
}

/// Bytes in a row of `width` tightly packed pixels.
fn packed_stride(width: usize) -> Result<usize, ImageError> {
    width
        .checked_mul(CHANNELS)
        .ok_or(ImageError::SizeOverflow(width, CHANNELS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert!(!image_size.is_empty());
        assert!(ImageSize::from([0, 5]).is_empty());
    }

    #[test]
    fn buffer_smoke() -> Result<(), ImageError> {
        let buffer = PixelBuffer::from_rgba(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20 * 4],
        )?;
        assert_eq!(buffer.width(), 10);
        assert_eq!(buffer.height(), 20);
        assert_eq!(buffer.stride(), 40);
        assert_eq!(buffer.format(), PixelFormat::Rgba8888);
        assert_eq!(buffer.into_vec().len(), 10 * 20 * 4);

        Ok(())
    }

    #[test]
    fn buffer_invalid_stride() {
        let res = PixelBuffer::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            8,
            vec![0u8; 8],
            PixelFormat::Rgba8888,
        );
        assert_eq!(res, Err(ImageError::InvalidStride(8, 12)));
    }

    #[test]
    fn buffer_invalid_length() {
        let res = PixelBuffer::from_rgba(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0u8; 15],
        );
        assert_eq!(res, Err(ImageError::InvalidDataLength(15, 16)));
    }

    #[test]
    fn buffer_size_overflow() {
        let huge = 1usize << (usize::BITS - 1);
        let res = PixelBuffer::new(
            ImageSize {
                width: 1,
                height: 2,
            },
            huge,
            vec![],
            PixelFormat::Rgba8888,
        );
        assert_eq!(res, Err(ImageError::SizeOverflow(huge, 2)));

        let res = PixelBuffer::from_rgba(
            ImageSize {
                width: huge,
                height: 1,
            },
            vec![],
        );
        assert_eq!(res, Err(ImageError::SizeOverflow(huge, CHANNELS)));

        let res = PixelBuffer::from_size_val(
            ImageSize {
                width: 1 << (usize::BITS - 4),
                height: 4,
            },
            Rgba8::BLACK,
            PixelFormat::Rgba8888,
        );
        assert_eq!(
            res,
            Err(ImageError::SizeOverflow(1 << (usize::BITS - 2), 4))
        );
    }

    #[test]
    fn buffer_empty_is_valid() -> Result<(), ImageError> {
        let buffer = PixelBuffer::from_rgba(
            ImageSize {
                width: 0,
                height: 5,
            },
            vec![],
        )?;
        assert!(buffer.size().is_empty());
        assert_eq!(buffer.row(0), Some(&[][..]));

        Ok(())
    }

    #[test]
    fn buffer_strided_access() -> Result<(), ImageError> {
        // two pixels per row, two padding bytes at the end of each row
        let data = vec![
            1, 2, 3, 4, 5, 6, 7, 8, 99, 99, //
            9, 10, 11, 12, 13, 14, 15, 16, 99, 99,
        ];
        let mut buffer = PixelBuffer::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            10,
            data,
            PixelFormat::Rgba8888,
        )?;

        assert_eq!(buffer.get([1, 0, 2]), Some(&11));
        assert_eq!(buffer.pixel(0, 1), Some([5, 6, 7, 8]));
        assert_eq!(buffer.row(1), Some(&[9, 10, 11, 12, 13, 14, 15, 16][..]));
        assert_eq!(buffer.pixel(2, 0), None);
        assert_eq!(buffer.get([0, 0, 4]), None);

        buffer.set_pixel(1, 1, [0, 0, 0, 0])?;
        assert_eq!(buffer.pixel(1, 1), Some([0, 0, 0, 0]));
        assert_eq!(buffer.as_slice()[18..20], [99, 99]);

        assert_eq!(
            buffer.set_pixel(0, 2, [0; 4]),
            Err(ImageError::PixelIndexOutOfBounds(2, 0, 2, 2))
        );

        Ok(())
    }

    #[test]
    fn buffer_from_size_val() -> Result<(), ImageError> {
        let buffer = PixelBuffer::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            Rgba8::new(1, 2, 3, 4),
            PixelFormat::Bgra8888,
        )?;
        for px in buffer.as_slice().chunks_exact(CHANNELS) {
            assert_eq!(px, &[3, 2, 1, 4]);
        }

        let zeros = buffer.zeros_like();
        assert_eq!(zeros.size(), buffer.size());
        assert_eq!(zeros.format(), PixelFormat::Bgra8888);
        assert!(zeros.as_slice().iter().all(|&v| v == 0));

        Ok(())
    }
}
