//! 2-D view frustum: a wedge bounded by two directed rays.
//!
//! A point is inside the wedge when it lies on the LEFT of `left` and on the
//! RIGHT of `right`. Boundary rays built by [`crate::viewer::Viewer`] run from
//! the far end of the view cone back to the eye, which gives exactly that
//! orientation.
//!
//! # Clipping
//!
//! [`Frustum::clip_edge`] intersects both boundary lines with the edge's own
//! line and then cross-classifies the two crossing points: where the right
//! crossing lies relative to `left`, and where the left crossing lies
//! relative to `right`. That pair picks one of the [`ClipCase`]s below.
//!
//! ```text
//!   left crossing vs right   right crossing vs left    case
//!   RIGHT                    LEFT                      Spanning
//!   LEFT                     LEFT                      CrossesRight
//!   RIGHT                    RIGHT                     CrossesLeft
//!   anything else                                      Unhandled (rejected)
//! ```
//!
//! Extent checks compare against `edge.start` and `edge.end` as ordered
//! bounds, so an edge whose coordinates decrease from start to end can be
//! rejected even when part of it is visible.

use log::trace;

use crate::geometry::{Exact, LineSeg, Side, SideTest};
use crate::math::vec2::Vec2;

/// Which branch of the clip case table an edge falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipCase {
    /// Both crossings lie on the inner side of the opposite boundary; the edge
    /// may span the whole window.
    Spanning,
    /// Only the crossing with the `right` boundary matters.
    CrossesRight,
    /// Only the crossing with the `left` boundary matters.
    CrossesLeft,
    /// Any `On` classification, or the right crossing outside `left` while
    /// the left crossing is outside `right`. Never visible.
    Unhandled,
}

/// Crossing points of both boundary lines with an edge's line, plus the
/// case they select.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub left_cross: Vec2,
    pub right_cross: Vec2,
    pub case: ClipCase,
}

/// A wedge borrowed from two caller-owned boundary segments.
#[derive(Clone, Copy, Debug)]
pub struct Frustum<'a, T: SideTest = Exact> {
    left: &'a LineSeg,
    right: &'a LineSeg,
    test: T,
}

impl<'a> Frustum<'a, Exact> {
    pub fn new(left: &'a LineSeg, right: &'a LineSeg) -> Self {
        Self {
            left,
            right,
            test: Exact,
        }
    }
}

impl<'a, T: SideTest> Frustum<'a, T> {
    /// A frustum that classifies sides and parallel lines with `test`.
    pub fn with_test(left: &'a LineSeg, right: &'a LineSeg, test: T) -> Self {
        Self { left, right, test }
    }

    /// Whether `point` lies strictly inside the wedge.
    pub fn contains(&self, point: Vec2) -> bool {
        self.left.point_side_with(point.x, point.y, &self.test) == Side::Left
            && self.right.point_side_with(point.x, point.y, &self.test) == Side::Right
    }

    /// Computes both boundary crossings along `edge` and picks the clip case.
    pub fn classify(&self, edge: &LineSeg) -> Classification {
        let s = edge.cross_param_with(self.left, &self.test).param();
        let left_cross = edge.point_at(s);

        let s = edge.cross_param_with(self.right, &self.test).param();
        let right_cross = edge.point_at(s);

        let left_edge = self
            .left
            .point_side_with(right_cross.x, right_cross.y, &self.test);
        let right_edge = self
            .right
            .point_side_with(left_cross.x, left_cross.y, &self.test);

        let case = match (left_edge, right_edge) {
            (Side::Left, Side::Right) => ClipCase::Spanning,
            (Side::Left, Side::Left) => ClipCase::CrossesRight,
            (Side::Right, Side::Right) => ClipCase::CrossesLeft,
            _ => ClipCase::Unhandled,
        };

        Classification {
            left_cross,
            right_cross,
            case,
        }
    }

    /// Clips `edge` to the part inside the wedge.
    ///
    /// Returns `None` when the edge is rejected. The input is never modified.
    pub fn clip_edge(&self, edge: &LineSeg) -> Option<LineSeg> {
        let Classification {
            left_cross,
            right_cross,
            case,
        } = self.classify(edge);

        let clipped = match case {
            ClipCase::Spanning => clip_spanning(edge, left_cross, right_cross),
            ClipCase::CrossesRight => self.clip_one_side(edge, right_cross),
            ClipCase::CrossesLeft => self.clip_one_side(edge, left_cross),
            ClipCase::Unhandled => None,
        };

        if clipped.is_none() {
            trace!("culled edge {edge:?} ({case:?})");
        }
        clipped
    }

    /// Clips `edge` in place.
    ///
    /// On `true` the endpoints hold the visible portion. On `false` the edge
    /// is left as it was.
    pub fn clip_edge_in_place(&self, edge: &mut LineSeg) -> bool {
        match self.clip_edge(edge) {
            Some(clipped) => {
                *edge = clipped;
                true
            }
            None => false,
        }
    }

    /// Replaces the endpoint outside the wedge with `cross`. Rejects when the
    /// crossing falls outside the edge's ordered extent or neither endpoint
    /// is inside.
    fn clip_one_side(&self, edge: &LineSeg, cross: Vec2) -> Option<LineSeg> {
        if cross.x < edge.start.x || cross.x > edge.end.x {
            return None;
        }
        if cross.y < edge.start.y || cross.y > edge.end.y {
            return None;
        }

        if self.contains(edge.start) {
            Some(LineSeg::new(edge.start, cross))
        } else if self.contains(edge.end) {
            Some(LineSeg::new(cross, edge.end))
        } else {
            None
        }
    }
}

/// Shrinks `edge` per axis to the interval between the two crossings. Only
/// ever moves endpoints inward.
fn clip_spanning(edge: &LineSeg, left_cross: Vec2, right_cross: Vec2) -> Option<LineSeg> {
    let min_x = left_cross.x.min(right_cross.x);
    let max_x = left_cross.x.max(right_cross.x);
    let min_y = left_cross.y.min(right_cross.y);
    let max_y = left_cross.y.max(right_cross.y);

    if min_x > edge.end.x || max_x < edge.start.x {
        return None;
    }
    if min_y > edge.end.y || max_y < edge.start.y {
        return None;
    }

    let mut clipped = *edge;
    if min_x > clipped.start.x {
        clipped.start.x = min_x;
    }
    if max_x < clipped.end.x {
        clipped.end.x = max_x;
    }
    if min_y > clipped.start.y {
        clipped.start.y = min_y;
    }
    if max_y < clipped.end.y {
        clipped.end.y = max_y;
    }
    Some(clipped)
}
