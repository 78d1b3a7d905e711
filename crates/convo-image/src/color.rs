/// Byte order of the four channels of a pixel.
///
/// The convolution math treats all four channels the same way, so the format
/// only matters when a colour is written into, or read from, a buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Red, green, blue, alpha.
    #[default]
    Rgba8888,
    /// Alpha, red, green, blue.
    Argb8888,
    /// Blue, green, red, alpha.
    Bgra8888,
}

impl PixelFormat {
    /// Byte offsets of the red, green, blue and alpha channels inside a pixel.
    pub const fn channel_offsets(&self) -> [usize; 4] {
        match self {
            PixelFormat::Rgba8888 => [0, 1, 2, 3],
            PixelFormat::Argb8888 => [1, 2, 3, 0],
            PixelFormat::Bgra8888 => [2, 1, 0, 3],
        }
    }

    /// Byte offset of the alpha channel inside a pixel.
    pub const fn alpha_offset(&self) -> usize {
        self.channel_offsets()[3]
    }
}

/// An 8-bit RGBA colour in logical channel order.
///
/// # Examples
///
/// ```
/// use convo_image::{PixelFormat, Rgba8};
///
/// let red = Rgba8::new(255, 0, 0, 255);
///
/// assert_eq!(red.to_bytes(PixelFormat::Rgba8888), [255, 0, 0, 255]);
/// assert_eq!(red.to_bytes(PixelFormat::Argb8888), [255, 255, 0, 0]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba8 = Rgba8::new(0, 0, 0, 0);

    /// Opaque black.
    pub const BLACK: Rgba8 = Rgba8::new(0, 0, 0, 255);

    /// Opaque white.
    pub const WHITE: Rgba8 = Rgba8::new(255, 255, 255, 255);

    /// Create a colour from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Lay the colour out in the byte order of `format`.
    pub fn to_bytes(&self, format: PixelFormat) -> [u8; 4] {
        let mut bytes = [0u8; 4];
        let offsets = format.channel_offsets();
        for (value, offset) in [self.r, self.g, self.b, self.a].into_iter().zip(offsets) {
            bytes[offset] = value;
        }
        bytes
    }

    /// Read a colour from pixel bytes stored in the byte order of `format`.
    pub fn from_bytes(bytes: [u8; 4], format: PixelFormat) -> Self {
        let [r, g, b, a] = format.channel_offsets().map(|offset| bytes[offset]);
        Self { r, g, b, a }
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from(v: [u8; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Rgba8> for [u8; 4] {
    fn from(c: Rgba8) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}
