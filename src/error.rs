//! Error type for maze construction, viewer placement and image export.
//!
//! Clipping never fails; only the parts around it can.

use thiserror::Error;

use crate::maze::EdgeId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("maze grid must have at least one cell (got {cols}x{rows})")]
    EmptyGrid { cols: usize, rows: usize },

    #[error("cell size must be positive and finite (got {width}x{height})")]
    InvalidCellSize { width: f32, height: f32 },

    #[error("edge {0} does not exist")]
    UnknownEdge(EdgeId),

    #[error("cell ({col}, {row}) is outside the maze")]
    UnknownCell { col: usize, row: usize },

    #[error("viewer at ({x}, {y}) is not inside any cell")]
    ViewerOutsideMaze { x: f32, y: f32 },

    #[error("viewer at ({x}, {y}) is on the edge of its cell")]
    ViewerOnEdge { x: f32, y: f32 },

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
