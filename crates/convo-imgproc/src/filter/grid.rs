//! The kernel editing grid.
//!
//! Kernels are edited on a fixed 7x7 grid. The selected [`KernelSize`] decides
//! which centred window of the grid is active; [`KernelGrid::kernel`] crops
//! that window into a [`Kernel`] ready for convolution.

use super::{FilterError, Kernel, KernelSize};

/// Number of rows (and columns) of the editing grid.
pub const GRID_SIDE: usize = 7;

/// Number of cells of the editing grid.
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// The divisors offered by the editor, one per selector position.
pub const DIVISOR_PRESETS: [i32; 6] = [1, 2, 4, 8, 16, 32];

/// Selector position of the divisor the editor starts with.
pub const DEFAULT_DIVISOR_INDEX: usize = 2;

/// Get the divisor for a selector position, `2^index`.
pub fn divisor_preset(index: usize) -> Option<i32> {
    DIVISOR_PRESETS.get(index).copied()
}

/// A 7x7 grid of kernel coefficients in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelGrid {
    cells: [i16; GRID_CELLS],
}

impl Default for KernelGrid {
    fn default() -> Self {
        Self {
            cells: [0; GRID_CELLS],
        }
    }
}

impl KernelGrid {
    /// Create a grid with every cell set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The grid the editor starts with: 7 in the center, -1 on its four
    /// direct neighbours and 0 elsewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use convo_imgproc::filter::grid::KernelGrid;
    /// use convo_imgproc::filter::KernelSize;
    ///
    /// let kernel = KernelGrid::sharpen().kernel(KernelSize::ThreeByThree);
    ///
    /// assert_eq!(kernel.coefficients(), &[0, -1, 0, -1, 7, -1, 0, -1, 0]);
    /// ```
    pub fn sharpen() -> Self {
        let mut grid = Self::new();
        for index in [17, 23, 25, 31] {
            grid.cells[index] = -1;
        }
        grid.cells[24] = 7;
        grid
    }

    /// Get all the cells in row-major order.
    pub fn cells(&self) -> &[i16; GRID_CELLS] {
        &self.cells
    }

    /// Get the value of a cell.
    pub fn get(&self, index: usize) -> Option<i16> {
        self.cells.get(index).copied()
    }

    /// Set the value of a cell.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::GridIndexOutOfBounds`] if the cell does not exist.
    pub fn set(&mut self, index: usize, value: i16) -> Result<(), FilterError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(FilterError::GridIndexOutOfBounds(index))?;
        *cell = value;
        Ok(())
    }

    /// Set every listed cell to `value`.
    ///
    /// Nothing is written unless every index is valid.
    pub fn fill_cells(&mut self, indices: &[usize], value: i16) -> Result<(), FilterError> {
        if let Some(&bad) = indices.iter().find(|&&i| i >= GRID_CELLS) {
            return Err(FilterError::GridIndexOutOfBounds(bad));
        }
        for &index in indices {
            self.cells[index] = value;
        }
        Ok(())
    }

    /// Truncated mean of the listed cells, `None` when no cell is listed.
    pub fn mean_of_cells(&self, indices: &[usize]) -> Result<Option<i16>, FilterError> {
        if indices.is_empty() {
            return Ok(None);
        }
        // duplicates are allowed, so the sum is not bounded by the grid size
        let mut sum = 0i64;
        for &index in indices {
            sum += self
                .get(index)
                .ok_or(FilterError::GridIndexOutOfBounds(index))? as i64;
        }
        Ok(Some((sum / indices.len() as i64) as i16))
    }

    /// Whether a cell lies inside the centred window used by `size`.
    pub fn is_active(index: usize, size: KernelSize) -> bool {
        if index >= GRID_CELLS {
            return false;
        }
        let margin = (GRID_SIDE - size.side()) / 2;
        let (row, col) = (index / GRID_SIDE, index % GRID_SIDE);
        let window = margin..GRID_SIDE - margin;
        window.contains(&row) && window.contains(&col)
    }

    /// Crop the centred `side x side` window into a kernel.
    pub fn kernel(&self, size: KernelSize) -> Kernel {
        let coefficients = self
            .cells
            .iter()
            .enumerate()
            .filter(|(index, _)| Self::is_active(*index, size))
            .map(|(_, &value)| value)
            .collect();
        Kernel::from_size(size, coefficients)
    }
}
