//! Maze topology: cells separated by edges.
//!
//! The maze lies in the xy ground plane. Every edge is a directed segment
//! between two vertices and knows the cell on each of its sides; an opaque
//! edge is a wall, a transparent one is a portal into the neighboring cell.
//!
//! Only the rectangular grid constructor is provided. Walls are opened by
//! the caller; nothing here generates or loads a maze.

use std::fmt;

use crate::colors;
use crate::error::{Error, Result};
use crate::geometry::{LineSeg, Side};
use crate::math::vec2::Vec2;
use crate::viewer::Viewer;

/// How far inside its cell, and inside the floor and ceiling, the viewer's
/// eye is kept.
pub const BUFFER: f32 = 0.01;

pub type VertexId = usize;
pub type EdgeId = usize;
pub type CellId = usize;

/// Compass direction of a cell's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::South,
        Direction::East,
        Direction::North,
        Direction::West,
    ];

    fn index(self) -> usize {
        match self {
            Self::South => 0,
            Self::East => 1,
            Self::North => 2,
            Self::West => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Self::North),
            "e" | "east" => Ok(Self::East),
            "s" | "south" => Ok(Self::South),
            "w" | "west" => Ok(Self::West),
            other => Err(format!("unknown direction `{other}`")),
        }
    }
}

/// A wall or portal between up to two cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub start: VertexId,
    pub end: VertexId,
    pub opaque: bool,
    pub color: u32,
    /// Cell on the LEFT of `start -> end`, if any.
    pub left: Option<CellId>,
    /// Cell on the RIGHT of `start -> end`, if any.
    pub right: Option<CellId>,
}

impl Edge {
    /// The cell across this edge from `cell`.
    pub fn neighbor(&self, cell: CellId) -> Option<CellId> {
        if self.left == Some(cell) {
            self.right
        } else if self.right == Some(cell) {
            self.left
        } else {
            None
        }
    }

    /// Which side of the edge `cell` lies on.
    pub fn side_of(&self, cell: CellId) -> Option<Side> {
        if self.left == Some(cell) {
            Some(Side::Left)
        } else if self.right == Some(cell) {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// A convex cell bounded by its edges, ordered south, east, north, west.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub edges: [EdgeId; 4],
}

impl Cell {
    pub fn edge(&self, direction: Direction) -> EdgeId {
        self.edges[direction.index()]
    }
}

#[derive(Clone, Debug)]
pub struct Maze {
    vertices: Vec<Vec2>,
    edges: Vec<Edge>,
    cells: Vec<Cell>,
    cols: usize,
    rows: usize,
}

impl Maze {
    /// Builds a `cols` x `rows` grid of `cell_width` x `cell_height` cells
    /// with its lower-left corner at the origin. Every edge starts opaque.
    ///
    /// Horizontal edges run toward +x and vertical edges toward +y, so each
    /// edge's start is its minimum corner.
    pub fn grid(cols: usize, rows: usize, cell_width: f32, cell_height: f32) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(Error::EmptyGrid { cols, rows });
        }
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(cell_width) || !valid(cell_height) {
            return Err(Error::InvalidCellSize {
                width: cell_width,
                height: cell_height,
            });
        }

        let vertex = |c: usize, r: usize| r * (cols + 1) + c;
        let cell = |c: usize, r: usize| r * cols + c;

        let mut vertices = Vec::with_capacity((cols + 1) * (rows + 1));
        for r in 0..=rows {
            for c in 0..=cols {
                vertices.push(Vec2::new(c as f32 * cell_width, r as f32 * cell_height));
            }
        }

        let mut edges = Vec::with_capacity((rows + 1) * cols + rows * (cols + 1));
        // Horizontal edges: the cell above is on the left.
        for r in 0..=rows {
            for c in 0..cols {
                edges.push(Edge {
                    start: vertex(c, r),
                    end: vertex(c + 1, r),
                    opaque: true,
                    color: colors::WALL_NORTH_SOUTH,
                    left: (r < rows).then(|| cell(c, r)),
                    right: (r > 0).then(|| cell(c, r - 1)),
                });
            }
        }
        let vertical_base = edges.len();
        // Vertical edges: the cell to the west is on the left.
        for r in 0..rows {
            for c in 0..=cols {
                edges.push(Edge {
                    start: vertex(c, r),
                    end: vertex(c, r + 1),
                    opaque: true,
                    color: colors::WALL_EAST_WEST,
                    left: (c > 0).then(|| cell(c - 1, r)),
                    right: (c < cols).then(|| cell(c, r)),
                });
            }
        }

        let horizontal = |c: usize, r: usize| r * cols + c;
        let vertical = |c: usize, r: usize| vertical_base + r * (cols + 1) + c;

        let mut cells = Vec::with_capacity(cols * rows);
        for r in 0..rows {
            for c in 0..cols {
                cells.push(Cell {
                    edges: [
                        horizontal(c, r),
                        vertical(c + 1, r),
                        horizontal(c, r + 1),
                        vertical(c, r),
                    ],
                });
            }
        }

        Ok(Self {
            vertices,
            edges,
            cells,
            cols,
            rows,
        })
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id)
    }

    /// Id of the cell at grid position (`col`, `row`).
    pub fn cell_id(&self, col: usize, row: usize) -> Result<CellId> {
        if col >= self.cols || row >= self.rows {
            return Err(Error::UnknownCell { col, row });
        }
        Ok(row * self.cols + col)
    }

    /// The edge on the `direction` side of cell (`col`, `row`).
    pub fn edge_between(&self, col: usize, row: usize, direction: Direction) -> Result<EdgeId> {
        let cell = self.cell_id(col, row)?;
        Ok(self.cells[cell].edge(direction))
    }

    pub fn set_opaque(&mut self, id: EdgeId, opaque: bool) -> Result<()> {
        let edge = self.edges.get_mut(id).ok_or(Error::UnknownEdge(id))?;
        edge.opaque = opaque;
        Ok(())
    }

    /// Makes the `direction` side of cell (`col`, `row`) a portal.
    pub fn open_wall(&mut self, col: usize, row: usize, direction: Direction) -> Result<EdgeId> {
        let id = self.edge_between(col, row, direction)?;
        self.set_opaque(id, false)?;
        Ok(id)
    }

    /// Opens every edge that has a cell on both sides.
    pub fn open_interior(&mut self) {
        for edge in &mut self.edges {
            if edge.left.is_some() && edge.right.is_some() {
                edge.opaque = false;
            }
        }
    }

    /// The cell across edge `edge` from `cell`.
    pub fn neighbor(&self, cell: CellId, edge: EdgeId) -> Option<CellId> {
        self.edges.get(edge)?.neighbor(cell)
    }

    /// The edge as a directed segment.
    ///
    /// # Panics
    /// Panics if `id` is not an edge of this maze.
    pub fn edge_segment(&self, id: EdgeId) -> LineSeg {
        let edge = &self.edges[id];
        LineSeg::new(self.vertices[edge.start], self.vertices[edge.end])
    }

    /// Whether `point` lies inside or on the boundary of `cell`.
    pub fn point_in_cell(&self, cell: CellId, point: Vec2) -> bool {
        let Some(cell_ref) = self.cells.get(cell) else {
            return false;
        };
        cell_ref.edges.iter().all(|&id| {
            let inner = self.edges[id].side_of(cell);
            let side = self.edge_segment(id).point_side(point.x, point.y);
            side == Side::On || Some(side) == inner
        })
    }

    /// The cell containing `point`.
    pub fn cell_at(&self, point: Vec2) -> Option<CellId> {
        (0..self.cells.len()).find(|&cell| self.point_in_cell(cell, point))
    }

    /// Whether `point` lies exactly on one of the edges of `cell`.
    pub fn on_cell_boundary(&self, cell: CellId, point: Vec2) -> bool {
        self.cells.get(cell).is_some_and(|cell_ref| {
            cell_ref
                .edges
                .iter()
                .any(|&id| self.edge_segment(id).point_side(point.x, point.y) == Side::On)
        })
    }

    /// Moves the viewer by (`dx`, `dy`, `dz`) without letting it pass through
    /// a wall.
    ///
    /// The move may cross portals into neighboring cells. Whatever cell it
    /// ends in, the eye is pushed at least [`BUFFER`] inside every edge of
    /// that cell and kept [`BUFFER`] away from the floor and ceiling, so it
    /// never sits on an edge. A zero move settles a viewer placed on a grid
    /// line. Returns the cell the viewer ends in.
    pub fn move_viewer(&self, viewer: &mut Viewer, dx: f32, dy: f32, dz: f32) -> Result<CellId> {
        let from = viewer.position();
        let mut cell = self.cell_at(from).ok_or(Error::ViewerOutsideMaze {
            x: from.x,
            y: from.y,
        })?;
        let target = from + Vec2::new(dx, dy);

        // A portal is only crossed when the target is strictly beyond it, so
        // the walk never returns through the edge it just used.
        for _ in 0..self.cells.len() {
            let next = self.cells[cell].edges.iter().find_map(|&id| {
                let beyond = self.inside_distance(cell, id, target) < 0.0;
                if beyond && !self.edges[id].opaque {
                    self.neighbor(cell, id)
                } else {
                    None
                }
            });
            match next {
                Some(next) => cell = next,
                None => break,
            }
        }

        let position = self.keep_inside(cell, target);
        let height = (viewer.height() + dz).clamp(-1.0 + BUFFER, 1.0 - BUFFER);
        viewer.set_position(position.x, position.y, height);
        Ok(cell)
    }

    /// Distance from `point` to the line of edge `id`, positive on the side
    /// where `cell` lies.
    fn inside_distance(&self, cell: CellId, id: EdgeId, point: Vec2) -> f32 {
        let segment = self.edge_segment(id);
        let distance = segment.determinant(point.x, point.y) / segment.length();
        match self.edges[id].side_of(cell) {
            Some(Side::Right) => -distance,
            _ => distance,
        }
    }

    /// Unit normal of edge `id` pointing into `cell`.
    fn inward_normal(&self, cell: CellId, id: EdgeId) -> Vec2 {
        let segment = self.edge_segment(id);
        let along = segment.direction() / segment.length();
        let left = Vec2::new(-along.y, along.x);
        match self.edges[id].side_of(cell) {
            Some(Side::Right) => -left,
            _ => left,
        }
    }

    /// Pushes `point` at least [`BUFFER`] inside every edge of `cell`.
    fn keep_inside(&self, cell: CellId, mut point: Vec2) -> Vec2 {
        for &id in &self.cells[cell].edges {
            let gap = BUFFER - self.inside_distance(cell, id, point);
            if gap > 0.0 {
                point = point + self.inward_normal(cell, id) * gap;
            }
        }
        point
    }

    /// Minimum and maximum corners of the maze.
    pub fn extents(&self) -> (Vec2, Vec2) {
        self.vertices.iter().fold(
            (
                Vec2::new(f32::INFINITY, f32::INFINITY),
                Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
            ),
            |(min, max), v| {
                (
                    Vec2::new(min.x.min(v.x), min.y.min(v.y)),
                    Vec2::new(max.x.max(v.x), max.y.max(v.y)),
                )
            },
        )
    }
}
