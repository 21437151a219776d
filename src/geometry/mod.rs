//! 2-D line-segment geometry shared by the clipper and the maze.

pub mod line_seg;
pub mod side;

pub use line_seg::{Crossing, LineSeg, PARALLEL_SENTINEL};
pub use side::{Exact, Side, SideTest, Tolerance};
