//! Wall clipping against the 2-D view frustum.
//!
//! The maze is culled in the ground plane: the viewer's horizontal field of
//! view is a wedge bounded by two rays, and each candidate wall edge is
//! clipped to the part of it inside that wedge (see [`frustum`]).

pub mod frustum;

pub use frustum::{ClipCase, Classification, Frustum};
