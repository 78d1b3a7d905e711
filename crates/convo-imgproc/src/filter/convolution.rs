use convo_image::{PixelBuffer, Rgba8, CHANNELS};

use super::{BorderMode, FilterError, Kernel};
use crate::parallel::{self, CancelToken, ExecutionStrategy};

/// How the alpha channel is treated by the convolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphaMode {
    /// Alpha goes through the same weighted sum, division and clamp as the
    /// colour channels.
    #[default]
    Convolve,

    /// Alpha is copied from the source pixel.
    Preserve,
}

/// Options for [`convolve_with`].
///
/// # Examples
///
/// ```
/// use convo_image::Rgba8;
/// use convo_imgproc::filter::{AlphaMode, BorderMode, ConvolveOptions};
/// use convo_imgproc::parallel::ExecutionStrategy;
///
/// let options = ConvolveOptions::default()
///     .with_border(BorderMode::Constant(Rgba8::WHITE))
///     .with_alpha(AlphaMode::Preserve)
///     .with_strategy(ExecutionStrategy::Serial);
///
/// assert_eq!(options.bias, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConvolveOptions {
    /// How taps outside the image are resolved.
    pub border: BorderMode,
    /// Value added to the weighted sum before the division.
    pub bias: i32,
    /// How the alpha channel is treated.
    pub alpha: AlphaMode,
    /// How the rows are scheduled.
    pub strategy: ExecutionStrategy,
    /// Token to abort the operation between rows.
    pub cancel: Option<CancelToken>,
}

impl ConvolveOptions {
    /// Set the border mode.
    pub fn with_border(mut self, border: BorderMode) -> Self {
        self.border = border;
        self
    }

    /// Set the bias.
    pub fn with_bias(mut self, bias: i32) -> Self {
        self.bias = bias;
        self
    }

    /// Set the alpha mode.
    pub fn with_alpha(mut self, alpha: AlphaMode) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the execution strategy.
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the cancellation token.
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

/// Convolve an image with an integer kernel.
///
/// Every channel of every output pixel is the weighted sum of the
/// `side x side` window centered on it, divided by `divisor` with truncation
/// and clamped to `[0, 255]`. Taps outside the image read `background`. The
/// alpha channel follows the same math as the colour channels.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `kernel` - The kernel to apply.
/// * `divisor` - The scalar that divides the weighted sum, must not be zero.
/// * `background` - The colour read by taps outside the image.
///
/// # Returns
///
/// A new image with the same size, stride and format as `src`.
///
/// # Errors
///
/// Returns [`FilterError::InvalidDivisor`] for a zero divisor and
/// [`FilterError::InvalidDimensions`] for an image without pixels.
///
/// # Examples
///
/// ```
/// use convo_image::{ImageSize, PixelBuffer, PixelFormat, Rgba8};
/// use convo_imgproc::filter::{convolve, Kernel};
///
/// let src = PixelBuffer::from_size_val(
///     ImageSize { width: 3, height: 3 },
///     Rgba8::new(100, 100, 100, 100),
///     PixelFormat::Rgba8888,
/// ).unwrap();
///
/// let kernel = Kernel::new(vec![0, -1, 0, -1, 7, -1, 0, -1, 0]).unwrap();
/// let dst = convolve(&src, &kernel, 4, Rgba8::TRANSPARENT).unwrap();
///
/// assert_eq!(dst.pixel(1, 1), Some([75, 75, 75, 75]));
/// ```
pub fn convolve(
    src: &PixelBuffer,
    kernel: &Kernel,
    divisor: i32,
    background: Rgba8,
) -> Result<PixelBuffer, FilterError> {
    let options = ConvolveOptions::default().with_border(BorderMode::Constant(background));
    convolve_with(src, kernel, divisor, &options)
}

/// Convolve an image with a kernel given as a plain coefficient slice.
///
/// # Errors
///
/// Returns [`FilterError::InvalidKernel`] unless there are 9, 25 or 49
/// coefficients, plus the errors of [`convolve`].
pub fn convolve_raw(
    src: &PixelBuffer,
    coefficients: &[i16],
    divisor: i32,
    background: Rgba8,
) -> Result<PixelBuffer, FilterError> {
    let kernel = Kernel::from_slice(coefficients)?;
    convolve(src, &kernel, divisor, background)
}

/// Convolve an image with an integer kernel using explicit options.
///
/// See [`convolve`] for the arithmetic. The options select the border mode,
/// a bias added before the division, the alpha handling, the execution
/// strategy and an optional cancellation token.
///
/// # Errors
///
/// Besides the errors of [`convolve`], returns [`FilterError::Parallel`] if the
/// execution strategy is invalid and [`FilterError::Cancelled`] if the token
/// was cancelled before every row was written.
pub fn convolve_with(
    src: &PixelBuffer,
    kernel: &Kernel,
    divisor: i32,
    options: &ConvolveOptions,
) -> Result<PixelBuffer, FilterError> {
    if divisor == 0 {
        return Err(FilterError::InvalidDivisor);
    }

    if src.size().is_empty() {
        return Err(FilterError::InvalidDimensions(src.width(), src.height()));
    }

    log::debug!(
        "convolve: {} kernel on {} with divisor {} ({:?}, {:?})",
        kernel.size(),
        src.size(),
        divisor,
        options.border,
        options.strategy
    );
    let now = std::time::Instant::now();

    let background = match options.border {
        BorderMode::Constant(color) => color.to_bytes(src.format()),
        BorderMode::Replicate | BorderMode::CopyInPlace => [0u8; CHANNELS],
    };
    let preserved_alpha = match options.alpha {
        AlphaMode::Convolve => None,
        AlphaMode::Preserve => Some(src.format().alpha_offset()),
    };

    let row_op = RowOp {
        src,
        kernel,
        divisor: divisor as i64,
        bias: options.bias as i64,
        border: options.border,
        background,
        preserved_alpha,
    };

    let mut dst = src.zeros_like();
    let row_bytes = src.width() * CHANNELS;
    let cancel = options.cancel.as_ref();

    parallel::for_each_row_mut(
        dst.as_slice_mut(),
        src.stride(),
        options.strategy,
        |row, dst_row| {
            if cancel.is_some_and(CancelToken::is_cancelled) {
                return;
            }
            row_op.run(row, &mut dst_row[..row_bytes]);
        },
    )?;

    if cancel.is_some_and(CancelToken::is_cancelled) {
        log::warn!("convolve: cancelled after {:?}", now.elapsed());
        return Err(FilterError::Cancelled);
    }

    log::debug!("convolve: elapsed {:?}", now.elapsed());

    Ok(dst)
}

/// Everything a worker needs to compute one output row.
struct RowOp<'a> {
    src: &'a PixelBuffer,
    kernel: &'a Kernel,
    divisor: i64,
    bias: i64,
    border: BorderMode,
    background: [u8; CHANNELS],
    preserved_alpha: Option<usize>,
}

impl RowOp<'_> {
    fn run(&self, row: usize, dst_row: &mut [u8]) {
        let width = self.src.width();
        let height = self.src.height();
        let stride = self.src.stride();
        let data = self.src.as_slice();

        let side = self.kernel.side();
        let half = side / 2;
        let coefficients = self.kernel.coefficients();

        let row_overhangs = row < half || row + half >= height;

        for (col, dst_px) in dst_row.chunks_exact_mut(CHANNELS).enumerate() {
            let src_offset = row * stride + col * CHANNELS;
            let src_px = &data[src_offset..src_offset + CHANNELS];

            let overhangs = row_overhangs || col < half || col + half >= width;
            if overhangs && self.border == BorderMode::CopyInPlace {
                dst_px.copy_from_slice(src_px);
                continue;
            }

            let mut acc = [0i32; CHANNELS];
            for (ky, kernel_row) in coefficients.chunks_exact(side).enumerate() {
                let sy = self
                    .border
                    .map_index(row as isize + ky as isize - half as isize, height);

                for (kx, &k) in kernel_row.iter().enumerate() {
                    if k == 0 {
                        continue;
                    }

                    let sx = self
                        .border
                        .map_index(col as isize + kx as isize - half as isize, width);

                    let tap = match (sy, sx) {
                        (Some(sy), Some(sx)) => {
                            let offset = sy * stride + sx * CHANNELS;
                            &data[offset..offset + CHANNELS]
                        }
                        _ => &self.background[..],
                    };

                    let k = k as i32;
                    for (a, &v) in acc.iter_mut().zip(tap) {
                        *a += k * v as i32;
                    }
                }
            }

            for (out, &a) in dst_px.iter_mut().zip(acc.iter()) {
                *out = ((a as i64 + self.bias) / self.divisor).clamp(0, 255) as u8;
            }

            if let Some(alpha) = self.preserved_alpha {
                dst_px[alpha] = src_px[alpha];
            }
        }
    }
}
