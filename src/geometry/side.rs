//! Side classification of a point against a directed line.
//!
//! Every geometric decision the clipper makes funnels through a [`SideTest`]:
//! the sign of a 2×2 determinant for side queries, and a zero test on the
//! denominator for parallel lines. [`Exact`] is the default and compares
//! against zero with no tolerance, so near-collinear points can be
//! misclassified. [`Tolerance`] widens both zero tests by an epsilon.

/// Which side of a directed line a point lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Counter-clockwise of the line direction (positive determinant).
    Left,
    /// Clockwise of the line direction (negative determinant).
    Right,
    /// Exactly on the line.
    On,
}

impl Side {
    /// The classification seen from the reversed line. `On` is unchanged.
    pub fn flipped(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::On => Self::On,
        }
    }
}

/// Zero tests used for side classification and parallel detection.
pub trait SideTest {
    /// Classify a signed doubled triangle area.
    fn side(&self, det: f32) -> Side;

    /// Whether the cross-parameter denominator means the lines are parallel.
    fn is_parallel(&self, denom: f32) -> bool;
}

/// Exact floating-point comparison against zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Exact;

impl SideTest for Exact {
    #[inline]
    fn side(&self, det: f32) -> Side {
        if det == 0.0 {
            Side::On
        } else if det > 0.0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    #[inline]
    fn is_parallel(&self, denom: f32) -> bool {
        denom == 0.0
    }
}

/// Treats anything within `epsilon` of zero as zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub epsilon: f32,
}

impl Tolerance {
    pub fn new(epsilon: f32) -> Self {
        Self { epsilon }
    }
}

impl SideTest for Tolerance {
    #[inline]
    fn side(&self, det: f32) -> Side {
        if det.abs() <= self.epsilon {
            Side::On
        } else if det > 0.0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    #[inline]
    fn is_parallel(&self, denom: f32) -> bool {
        denom.abs() <= self.epsilon
    }
}

impl<T: SideTest + ?Sized> SideTest for &T {
    fn side(&self, det: f32) -> Side {
        (**self).side(det)
    }

    fn is_parallel(&self, denom: f32) -> bool {
        (**self).is_parallel(denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_only_zero_is_on() {
        assert_eq!(Exact.side(0.0), Side::On);
        assert_eq!(Exact.side(-0.0), Side::On);
        assert_eq!(Exact.side(f32::MIN_POSITIVE), Side::Left);
        assert_eq!(Exact.side(-1e-30), Side::Right);
    }

    #[test]
    fn exact_nan_is_right() {
        // NaN fails both the == 0 and > 0 compares.
        assert_eq!(Exact.side(f32::NAN), Side::Right);
        assert!(!Exact.is_parallel(f32::NAN));
    }

    #[test]
    fn tolerance_widens_zero_band() {
        let test = Tolerance::new(1e-3);
        assert_eq!(test.side(5e-4), Side::On);
        assert_eq!(test.side(-5e-4), Side::On);
        assert_eq!(test.side(2e-3), Side::Left);
        assert!(test.is_parallel(-1e-4));
        assert!(!test.is_parallel(0.1));
    }

    #[test]
    fn flipped_swaps_left_and_right() {
        assert_eq!(Side::Left.flipped(), Side::Right);
        assert_eq!(Side::Right.flipped(), Side::Left);
        assert_eq!(Side::On.flipped(), Side::On);
    }
}
