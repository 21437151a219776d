//! Frustum culling and rendering for 2-D cell mazes.
//!
//! The core of this crate is the ground-plane clipper in [`clipper`]: the
//! viewer's field of view is a wedge bounded by two directed rays, and every
//! candidate wall edge is clipped to the part of it inside the wedge. The
//! [`visibility`] traversal uses it to walk from cell to cell through open
//! edges, and [`render`] draws the result as a map or a first-person view.
//!
//! # Quick Start
//!
//! ```ignore
//! use mazecull::prelude::*;
//!
//! let mut maze = Maze::grid(8, 8, 1.0, 1.0)?;
//! maze.open_interior();
//! let mut viewer = Viewer::from_config(&ViewConfig::default());
//! maze.move_viewer(&mut viewer, 0.5, 0.0, 0.0)?;
//! let config = RenderConfig::default();
//! let visible = VisibleWalls::collect(&maze, &viewer, &config)?;
//! ```

pub mod clipper;
pub mod colors;
pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod maze;
pub mod render;
pub mod viewer;
pub mod visibility;

// Re-export commonly needed types at crate root for convenience
pub use clipper::{ClipCase, Frustum};
pub use error::{Error, Result};
pub use geometry::{Crossing, LineSeg, Side};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use mazecull::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use crate::clipper::{ClipCase, Frustum};
    pub use crate::geometry::{Crossing, Exact, LineSeg, Side, SideTest, Tolerance};
    pub use crate::math::vec2::Vec2;

    // Maze & traversal
    pub use crate::maze::{Direction, Maze, BUFFER};
    pub use crate::viewer::Viewer;
    pub use crate::visibility::{VisibleWall, VisibleWalls};

    // Configuration
    pub use crate::config::{RenderConfig, ViewConfig};

    // Rendering
    pub use crate::render::{FirstPersonView, MapView, Renderer};
}
