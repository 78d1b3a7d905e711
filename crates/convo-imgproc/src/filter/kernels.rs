use super::{Kernel, KernelSize};

/// A kernel together with the divisor it is meant to be used with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    /// The kernel coefficients.
    pub kernel: Kernel,
    /// The divisor that normalizes the weighted sum.
    pub divisor: i32,
}

impl Preset {
    fn new(size: KernelSize, coefficients: Vec<i16>, divisor: i32) -> Self {
        Self {
            kernel: Kernel::from_size(size, coefficients),
            divisor,
        }
    }
}

/// Create an identity kernel.
///
/// # Arguments
///
/// * `size` - The size of the kernel.
pub fn identity(size: KernelSize) -> Preset {
    Preset {
        kernel: Kernel::identity(size),
        divisor: 1,
    }
}

/// Create a box blur kernel.
///
/// # Arguments
///
/// * `size` - The size of the kernel.
///
/// # Returns
///
/// All ones, divided by the number of taps.
pub fn box_blur(size: KernelSize) -> Preset {
    Preset::new(size, vec![1; size.count()], size.count() as i32)
}

/// Create a 5x5 gaussian blur kernel from the binomial row `[1, 4, 6, 4, 1]`.
pub fn gaussian_blur_5x5() -> Preset {
    let row = [1i16, 4, 6, 4, 1];
    let coefficients = row
        .iter()
        .flat_map(|&y| row.iter().map(move |&x| y * x))
        .collect();
    Preset::new(KernelSize::FiveByFive, coefficients, 256)
}

/// Create a 3x3 sharpen kernel.
pub fn sharpen() -> Preset {
    Preset::new(
        KernelSize::ThreeByThree,
        vec![0, -1, 0, -1, 5, -1, 0, -1, 0],
        1,
    )
}

/// Create a 3x3 edge detection (laplacian) kernel.
pub fn edge_detect() -> Preset {
    Preset::new(
        KernelSize::ThreeByThree,
        vec![-1, -1, -1, -1, 8, -1, -1, -1, -1],
        1,
    )
}

/// Create a 3x3 emboss kernel.
pub fn emboss() -> Preset {
    Preset::new(
        KernelSize::ThreeByThree,
        vec![-2, -1, 0, -1, 1, 1, 0, 1, 2],
        1,
    )
}
