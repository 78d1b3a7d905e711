use super::FilterError;

/// The supported kernel sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KernelSize {
    /// A 3x3 kernel.
    #[default]
    ThreeByThree,
    /// A 5x5 kernel.
    FiveByFive,
    /// A 7x7 kernel.
    SevenBySeven,
}

impl KernelSize {
    /// All the supported sizes, smallest first.
    pub const ALL: [KernelSize; 3] = [
        KernelSize::ThreeByThree,
        KernelSize::FiveByFive,
        KernelSize::SevenBySeven,
    ];

    /// The number of rows (and columns) of the kernel.
    pub const fn side(&self) -> usize {
        match self {
            KernelSize::ThreeByThree => 3,
            KernelSize::FiveByFive => 5,
            KernelSize::SevenBySeven => 7,
        }
    }

    /// The number of coefficients of the kernel.
    pub const fn count(&self) -> usize {
        self.side() * self.side()
    }

    /// Get the size for a coefficient count, if it is supported.
    pub fn from_len(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.count() == len)
    }
}

impl std::fmt::Display for KernelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} x {}", self.side(), self.side())
    }
}

/// A square kernel of signed integer coefficients in row-major order.
///
/// # Examples
///
/// ```
/// use convo_imgproc::filter::{Kernel, KernelSize};
///
/// let kernel = Kernel::new(vec![0, -1, 0, -1, 7, -1, 0, -1, 0]).unwrap();
///
/// assert_eq!(kernel.size(), KernelSize::ThreeByThree);
/// assert_eq!(kernel.center(), 7);
/// assert_eq!(kernel.get(0, 1), Some(-1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    size: KernelSize,
    coefficients: Vec<i16>,
}

impl Kernel {
    /// Create a kernel from its coefficients, inferring the side.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] unless there are exactly 9, 25 or
    /// 49 coefficients.
    pub fn new(coefficients: Vec<i16>) -> Result<Self, FilterError> {
        let size = KernelSize::from_len(coefficients.len())
            .ok_or(FilterError::InvalidKernel(coefficients.len()))?;
        Ok(Self { size, coefficients })
    }

    /// Create a kernel by copying the coefficients out of a slice.
    pub fn from_slice(coefficients: &[i16]) -> Result<Self, FilterError> {
        Self::new(coefficients.to_vec())
    }

    /// Build a kernel whose coefficient count is already known to match `size`.
    pub(crate) fn from_size(size: KernelSize, coefficients: Vec<i16>) -> Self {
        debug_assert_eq!(coefficients.len(), size.count());
        Self { size, coefficients }
    }

    /// A kernel with 1 at the center tap and 0 elsewhere.
    pub fn identity(size: KernelSize) -> Self {
        let mut coefficients = vec![0; size.count()];
        coefficients[size.count() / 2] = 1;
        Self::from_size(size, coefficients)
    }

    /// Get the size of the kernel.
    pub fn size(&self) -> KernelSize {
        self.size
    }

    /// Get the number of rows (and columns) of the kernel.
    pub fn side(&self) -> usize {
        self.size.side()
    }

    /// Get the coefficients in row-major order.
    pub fn coefficients(&self) -> &[i16] {
        &self.coefficients
    }

    /// Get the coefficient at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Option<i16> {
        if row >= self.side() || col >= self.side() {
            return None;
        }
        self.coefficients.get(row * self.side() + col).copied()
    }

    /// Get the coefficient of the center tap.
    pub fn center(&self) -> i16 {
        self.coefficients[self.coefficients.len() / 2]
    }

    /// Sum of all coefficients.
    pub fn sum(&self) -> i32 {
        self.coefficients.iter().map(|&k| k as i32).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_size_from_len() {
        assert_eq!(KernelSize::from_len(9), Some(KernelSize::ThreeByThree));
        assert_eq!(KernelSize::from_len(25), Some(KernelSize::FiveByFive));
        assert_eq!(KernelSize::from_len(49), Some(KernelSize::SevenBySeven));
        assert_eq!(KernelSize::from_len(16), None);
        assert_eq!(KernelSize::from_len(0), None);
        assert_eq!(KernelSize::FiveByFive.to_string(), "5 x 5");
    }

    #[test]
    fn kernel_invalid_count() {
        assert_eq!(
            Kernel::new(vec![0; 16]),
            Err(FilterError::InvalidKernel(16))
        );
        assert_eq!(Kernel::from_slice(&[]), Err(FilterError::InvalidKernel(0)));
    }

    #[test]
    fn kernel_identity() {
        for size in KernelSize::ALL {
            let kernel = Kernel::identity(size);
            let half = size.side() / 2;
            assert_eq!(kernel.get(half, half), Some(1));
            assert_eq!(kernel.center(), 1);
            assert_eq!(kernel.sum(), 1);
        }
    }

    #[test]
    fn kernel_get() -> Result<(), FilterError> {
        let kernel = Kernel::new((0..25).collect())?;
        assert_eq!(kernel.side(), 5);
        assert_eq!(kernel.get(1, 3), Some(8));
        assert_eq!(kernel.get(5, 0), None);
        assert_eq!(kernel.center(), 12);
        Ok(())
    }
}
