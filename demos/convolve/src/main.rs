use argh::FromArgs;

use convo::{
    image::{ImageSize, PixelBuffer, Rgba8, CHANNELS},
    imgproc::{
        filter::{
            convolve_with, grid, kernels, BorderMode, ConvolveOptions, FilterError, KernelSize,
        },
        parallel::{CancelToken, ExecutionStrategy},
    },
};

#[derive(FromArgs)]
/// Apply an integer convolution kernel to a synthetic test image
struct Args {
    /// the kernel preset: editor, identity, box, gaussian, sharpen, edge or emboss
    #[argh(option, default = "String::from(\"editor\")")]
    preset: String,

    /// the kernel side for the editor, identity and box presets (3, 5 or 7)
    #[argh(option, default = "3")]
    side: usize,

    /// override the divisor of the preset
    #[argh(option)]
    divisor: Option<i32>,

    /// the border mode: constant, replicate or copy
    #[argh(option, default = "String::from(\"constant\")")]
    border: String,

    /// the image width in pixels
    #[argh(option, default = "640")]
    width: usize,

    /// the image height in pixels
    #[argh(option, default = "480")]
    height: usize,

    /// how many times to run the convolution
    #[argh(option, default = "10")]
    iterations: usize,

    /// run on a local pool with this many threads
    #[argh(option)]
    threads: Option<usize>,
}

/// Build a test image with a horizontal red ramp, a vertical green ramp and a
/// checkerboard in the blue channel.
fn synthetic_image(size: ImageSize) -> Result<PixelBuffer, Box<dyn std::error::Error>> {
    let mut data = Vec::with_capacity(size.width * size.height * CHANNELS);
    for y in 0..size.height {
        for x in 0..size.width {
            let r = (x * 255 / size.width.max(1)) as u8;
            let g = (y * 255 / size.height.max(1)) as u8;
            let b = if (x / 16 + y / 16) % 2 == 0 { 255 } else { 0 };
            data.extend_from_slice(&[r, g, b, 255]);
        }
    }
    Ok(PixelBuffer::from_rgba(size, data)?)
}

fn channel_means(image: &PixelBuffer) -> [f64; CHANNELS] {
    let mut sum = [0u64; CHANNELS];
    for row in 0..image.height() {
        for px in image.row(row).unwrap_or_default().chunks_exact(CHANNELS) {
            for (s, &v) in sum.iter_mut().zip(px) {
                *s += v as u64;
            }
        }
    }
    let n = (image.width() * image.height()).max(1) as f64;
    sum.map(|s| s as f64 / n)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let size = KernelSize::from_len(args.side * args.side)
        .ok_or_else(|| format!("Invalid kernel side: {}", args.side))?;

    let preset = match args.preset.to_lowercase().as_str() {
        "editor" => {
            let divisor = grid::divisor_preset(grid::DEFAULT_DIVISOR_INDEX).unwrap_or(1);
            kernels::Preset {
                kernel: grid::KernelGrid::sharpen().kernel(size),
                divisor,
            }
        }
        "identity" => kernels::identity(size),
        "box" => kernels::box_blur(size),
        "gaussian" => kernels::gaussian_blur_5x5(),
        "sharpen" => kernels::sharpen(),
        "edge" => kernels::edge_detect(),
        "emboss" => kernels::emboss(),
        _ => {
            return Err(format!("Invalid preset: {}", args.preset).into());
        }
    };
    let divisor = args.divisor.unwrap_or(preset.divisor);

    let border = match args.border.to_lowercase().as_str() {
        "constant" => BorderMode::Constant(Rgba8::TRANSPARENT),
        "replicate" => BorderMode::Replicate,
        "copy" => BorderMode::CopyInPlace,
        _ => {
            return Err(format!("Invalid border: {}", args.border).into());
        }
    };

    let strategy = match args.threads {
        Some(n) => ExecutionStrategy::Fixed(n),
        None => ExecutionStrategy::ParallelRows,
    };

    // create a cancel token to stop the loop
    let cancel_token = CancelToken::new();

    ctrlc::set_handler({
        let cancel_token = cancel_token.clone();
        move || {
            println!("Received Ctrl-C signal. Sending cancel signal !!");
            cancel_token.cancel();
        }
    })?;

    let image = synthetic_image(ImageSize {
        width: args.width,
        height: args.height,
    })?;
    log::info!(
        "applying {} {} kernel with divisor {} to {}",
        args.preset,
        preset.kernel.size(),
        divisor,
        image.size()
    );

    let options = ConvolveOptions::default()
        .with_border(border)
        .with_strategy(strategy)
        .with_cancel_token(cancel_token);

    let mut filtered = None;
    for i in 0..args.iterations {
        let now = std::time::Instant::now();
        match convolve_with(&image, &preset.kernel, divisor, &options) {
            Ok(dst) => {
                log::info!("iteration {}: {:?}", i, now.elapsed());
                filtered = Some(dst);
            }
            Err(FilterError::Cancelled) => {
                log::info!("cancelled at iteration {}", i);
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    if let Some(dst) = filtered {
        log::info!("input channel means: {:?}", channel_means(&image));
        log::info!("output channel means: {:?}", channel_means(&dst));
    }

    Ok(())
}
