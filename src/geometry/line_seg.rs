//! Directed 2-D line segments.

use super::side::{Exact, Side, SideTest};
use crate::math::vec2::Vec2;

/// Parameter reported for parallel lines by [`Crossing::param`].
///
/// Large enough that any crossing point built from it lands far outside the
/// maze, so extent comparisons against it fail the same way an infinitely
/// distant crossing would.
pub const PARALLEL_SENTINEL: f32 = 1.0e20;

/// Where another line crosses this segment's supporting line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Crossing {
    /// Crosses at `start + s * (end - start)`. `s` may fall outside [0, 1].
    At(f32),
    /// The two lines are parallel (or collinear).
    Parallel,
}

impl Crossing {
    /// The crossing parameter, with [`PARALLEL_SENTINEL`] standing in for
    /// parallel lines.
    pub fn param(self) -> f32 {
        match self {
            Self::At(s) => s,
            Self::Parallel => PARALLEL_SENTINEL,
        }
    }

    pub fn is_parallel(self) -> bool {
        matches!(self, Self::Parallel)
    }
}

/// A directed segment from `start` to `end`.
///
/// The direction sets the sign convention for [`LineSeg::point_side`].
/// Zero-length segments are not rejected, but every query on one is
/// meaningless.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSeg {
    pub start: Vec2,
    pub end: Vec2,
}

impl LineSeg {
    pub const fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    pub const fn from_coords(xs: f32, ys: f32, xe: f32, ye: f32) -> Self {
        Self {
            start: Vec2::new(xs, ys),
            end: Vec2::new(xe, ye),
        }
    }

    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    pub fn length(&self) -> f32 {
        self.direction().length()
    }

    pub fn midpoint(&self) -> Vec2 {
        self.start.lerp(self.end, 0.5)
    }

    /// The same segment running the other way.
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Point at parameter `s` along the segment (0 = start, 1 = end).
    pub fn point_at(&self, s: f32) -> Vec2 {
        let distance_x = self.end.x - self.start.x;
        let distance_y = self.end.y - self.start.y;
        Vec2::new(
            self.start.x + distance_x * s,
            self.start.y + distance_y * s,
        )
    }

    /// Signed, doubled area of the triangle (start, end, (x, y)).
    #[inline]
    pub fn determinant(&self, x: f32, y: f32) -> f32 {
        self.start.x * (self.end.y - y) - self.start.y * (self.end.x - x) + self.end.x * y
            - self.end.y * x
    }

    /// Which side of this segment's supporting line `(x, y)` lies on, using
    /// exact comparison against zero.
    #[inline]
    pub fn point_side(&self, x: f32, y: f32) -> Side {
        self.point_side_with(x, y, &Exact)
    }

    #[inline]
    pub fn point_side_with<T: SideTest>(&self, x: f32, y: f32, test: &T) -> Side {
        test.side(self.determinant(x, y))
    }

    /// Where the infinite line through `other` crosses the infinite line
    /// through `self`, as a parameter along `self`.
    ///
    /// This does not say whether `other` is entering or leaving; combine it
    /// with [`LineSeg::point_side`] for that.
    pub fn cross_param(&self, other: &LineSeg) -> Crossing {
        self.cross_param_with(other, &Exact)
    }

    pub fn cross_param_with<T: SideTest>(&self, other: &LineSeg, test: &T) -> Crossing {
        let dx1 = other.end.x - other.start.x;
        let dy1 = other.end.y - other.start.y;
        let dx2 = self.end.x - self.start.x;
        let dy2 = self.end.y - self.start.y;

        let denom = dx2 * dy1 - dy2 * dx1;
        if test.is_parallel(denom) {
            return Crossing::Parallel;
        }

        let s = (other.start.x - self.start.x) * dy1 - (other.start.y - self.start.y) * dx1;
        Crossing::At(s / denom)
    }
}
