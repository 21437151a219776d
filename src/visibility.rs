//! Portal traversal: which walls the viewer can see this frame.
//!
//! Starting from the viewer's cell with the full view cone, every edge of
//! the cell is clipped against the current frustum. A surviving opaque edge
//! is a visible wall. A surviving transparent edge is a portal: the frustum
//! is narrowed to the rays through its clipped endpoints and the traversal
//! continues in the neighboring cell, never back through the same portal.

use log::debug;

use crate::clipper::Frustum;
use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::geometry::LineSeg;
use crate::maze::{CellId, EdgeId, Maze};
use crate::viewer::Viewer;

/// A wall clipped to the part the viewer can see.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleWall {
    pub edge: EdgeId,
    pub segment: LineSeg,
    /// Number of portals crossed to reach the wall.
    pub depth: usize,
}

/// Walls and cells reached by one traversal.
#[derive(Clone, Debug, Default)]
pub struct VisibleWalls {
    pub walls: Vec<VisibleWall>,
    pub cells: Vec<CellId>,
}

impl VisibleWalls {
    /// Traverses `maze` from the viewer's cell.
    ///
    /// The eye must lie strictly inside its cell; see [`Maze::move_viewer`]
    /// for settling a viewer placed on an edge.
    pub fn collect(maze: &Maze, viewer: &Viewer, config: &RenderConfig) -> Result<Self> {
        let position = viewer.position();
        let start = maze
            .cell_at(position)
            .ok_or(Error::ViewerOutsideMaze {
                x: position.x,
                y: position.y,
            })?;
        if maze.on_cell_boundary(start, position) {
            return Err(Error::ViewerOnEdge {
                x: position.x,
                y: position.y,
            });
        }

        let (left, right) = viewer.frustum_rays(viewer.far());
        let frustum = Frustum::new(&left, &right);

        let mut visible = Self::default();
        let mut traversal = Traversal {
            maze,
            viewer,
            max_depth: config.max_depth,
            visible: &mut visible,
        };
        traversal.visit(start, &frustum, None, 0);

        debug!(
            "traversal from cell {start}: {} cells, {} walls",
            visible.cells.len(),
            visible.walls.len()
        );
        Ok(visible)
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Whether any part of `edge` was found visible.
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        self.walls.iter().any(|wall| wall.edge == edge)
    }
}

struct Traversal<'a> {
    maze: &'a Maze,
    viewer: &'a Viewer,
    max_depth: usize,
    visible: &'a mut VisibleWalls,
}

impl Traversal<'_> {
    fn visit(&mut self, cell: CellId, frustum: &Frustum<'_>, entered: Option<EdgeId>, depth: usize) {
        let Some(edges) = self.maze.cell(cell).map(|c| c.edges) else {
            return;
        };
        self.visible.cells.push(cell);

        for edge_id in edges {
            if Some(edge_id) == entered {
                continue;
            }
            let Some(segment) = frustum.clip_edge(&self.maze.edge_segment(edge_id)) else {
                continue;
            };

            if self.maze.edges()[edge_id].opaque {
                self.visible.walls.push(VisibleWall {
                    edge: edge_id,
                    segment,
                    depth,
                });
                continue;
            }

            if depth >= self.max_depth {
                debug!("portal {edge_id} skipped at depth limit {}", self.max_depth);
                continue;
            }
            let Some(next) = self.maze.neighbor(cell, edge_id) else {
                continue;
            };
            let Some((left, right)) = self.viewer.rays_through(segment.start, segment.end) else {
                continue;
            };
            let narrowed = Frustum::new(&left, &right);
            self.visit(next, &narrowed, Some(edge_id), depth + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Direction;
    use crate::math::vec2::Vec2;

    fn view_at(x: f32, y: f32, dir: f32, fov: f32) -> Viewer {
        Viewer::new(Vec2::new(x, y), dir, fov)
    }

    #[test]
    fn closed_cell_shows_only_facing_wall() {
        let maze = Maze::grid(3, 3, 1.0, 1.0).unwrap();
        let viewer = view_at(1.5, 1.5, 0.0, 60.0);
        let visible = VisibleWalls::collect(&maze, &viewer, &RenderConfig::default()).unwrap();

        let east = maze.edge_between(1, 1, Direction::East).unwrap();
        assert_eq!(visible.cells, vec![maze.cell_id(1, 1).unwrap()]);
        assert_eq!(visible.walls.len(), 1);
        assert_eq!(visible.walls[0].edge, east);

        let wall = visible.walls[0].segment;
        assert_eq!(wall.start.x, 2.0);
        assert_eq!(wall.end.x, 2.0);
        assert!(wall.start.y > 1.0 && wall.end.y < 2.0);
    }

    #[test]
    fn open_portal_reveals_next_cell() {
        let mut maze = Maze::grid(3, 1, 1.0, 1.0).unwrap();
        maze.open_wall(0, 0, Direction::East).unwrap();
        let viewer = view_at(0.5, 0.5, 0.0, 60.0);
        let visible = VisibleWalls::collect(&maze, &viewer, &RenderConfig::default()).unwrap();

        let far_wall = maze.edge_between(1, 0, Direction::East).unwrap();
        assert_eq!(
            visible.cells,
            vec![maze.cell_id(0, 0).unwrap(), maze.cell_id(1, 0).unwrap()]
        );
        assert!(visible.contains_edge(far_wall));
        assert!(visible.walls.iter().all(|w| w.edge != maze.edge_between(0, 0, Direction::East).unwrap()));
        assert!(visible.walls.iter().any(|w| w.depth == 1));
    }

    #[test]
    fn depth_limit_stops_at_portal() {
        let mut maze = Maze::grid(3, 1, 1.0, 1.0).unwrap();
        maze.open_interior();
        let viewer = view_at(0.5, 0.5, 0.0, 60.0);
        let config = RenderConfig::default().with_max_depth(0);
        let visible = VisibleWalls::collect(&maze, &viewer, &config).unwrap();

        assert_eq!(visible.cells.len(), 1);
        assert!(visible.is_empty());
    }

    #[test]
    fn viewer_outside_maze_is_an_error() {
        let maze = Maze::grid(2, 2, 1.0, 1.0).unwrap();
        let viewer = view_at(-3.0, 0.5, 0.0, 60.0);
        let result = VisibleWalls::collect(&maze, &viewer, &RenderConfig::default());
        assert!(matches!(result, Err(Error::ViewerOutsideMaze { .. })));
    }

    #[test]
    fn visible_walls_stay_inside_view_cone() {
        let mut maze = Maze::grid(5, 5, 1.0, 1.0).unwrap();
        maze.open_interior();
        let viewer = view_at(0.5, 0.5, 30.0, 60.0);
        let visible = VisibleWalls::collect(&maze, &viewer, &RenderConfig::default()).unwrap();

        assert!(!visible.is_empty());
        let (left, right) = viewer.frustum_rays(viewer.far());
        let frustum = Frustum::with_test(&left, &right, crate::geometry::Tolerance::new(1e-3));
        for wall in &visible.walls {
            let mid = wall.segment.midpoint();
            assert!(
                frustum.contains(mid) || (mid - Vec2::new(0.5, 0.5)).length() < 1e-3,
                "{wall:?} outside view cone"
            );
        }
    }

    #[test]
    fn eye_on_portal_is_rejected_until_settled() {
        let mut maze = Maze::grid(3, 1, 1.0, 1.0).unwrap();
        maze.open_interior();
        let mut viewer = view_at(1.0, 0.5, 0.0, 60.0);
        let config = RenderConfig::default();

        let result = VisibleWalls::collect(&maze, &viewer, &config);
        assert!(matches!(result, Err(Error::ViewerOnEdge { .. })));

        maze.move_viewer(&mut viewer, 0.0, 0.0, 0.0).unwrap();
        let visible = VisibleWalls::collect(&maze, &viewer, &config).unwrap();
        assert_eq!(visible.cells, vec![0, 1, 2]);
        assert!(visible.contains_edge(maze.edge_between(2, 0, Direction::East).unwrap()));
    }
}
