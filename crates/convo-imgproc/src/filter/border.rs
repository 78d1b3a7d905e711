use convo_image::Rgba8;

/// How kernel taps that fall outside the image are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderMode {
    /// Out-of-bounds taps read a single, constant colour.
    ///
    /// Example: ...d c b a | x x x x...
    Constant(Rgba8),

    /// Out-of-bounds taps read the outermost row or column of pixels.
    ///
    /// Example: ...d c b a | a a a a...
    Replicate,

    /// Pixels whose kernel window overhangs the border are copied from the
    /// source unchanged; only the interior is convolved.
    CopyInPlace,
}

impl Default for BorderMode {
    fn default() -> Self {
        BorderMode::Constant(Rgba8::TRANSPARENT)
    }
}

impl BorderMode {
    /// Maps index `i` to a valid index within `[0, len)` according to the border mode.
    ///
    /// In-range indices map to themselves. Out-of-range indices are clamped for
    /// [`BorderMode::Replicate`] and have no source pixel for the other modes.
    ///
    /// # Arguments
    /// - `i`: The (possibly out-of-range) coordinate index.
    /// - `len`: The valid length of the dimension, at least 1.
    #[inline]
    pub fn map_index(&self, i: isize, len: usize) -> Option<usize> {
        if i >= 0 && (i as usize) < len {
            return Some(i as usize);
        }
        match self {
            BorderMode::Replicate => Some(i.clamp(0, len as isize - 1) as usize),
            BorderMode::Constant(_) | BorderMode::CopyInPlace => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_index_in_range() {
        for mode in [
            BorderMode::Constant(Rgba8::BLACK),
            BorderMode::Replicate,
            BorderMode::CopyInPlace,
        ] {
            assert_eq!(mode.map_index(0, 4), Some(0));
            assert_eq!(mode.map_index(3, 4), Some(3));
        }
    }

    #[test]
    fn map_index_replicate() {
        assert_eq!(BorderMode::Replicate.map_index(-3, 4), Some(0));
        assert_eq!(BorderMode::Replicate.map_index(4, 4), Some(3));
        assert_eq!(BorderMode::Replicate.map_index(9, 1), Some(0));
    }

    #[test]
    fn map_index_constant() {
        let mode = BorderMode::default();
        assert_eq!(mode, BorderMode::Constant(Rgba8::TRANSPARENT));
        assert_eq!(mode.map_index(-1, 4), None);
        assert_eq!(mode.map_index(4, 4), None);
    }
}
