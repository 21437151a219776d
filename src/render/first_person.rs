//! First-person view of the visible walls.
//!
//! The floor is at z = -1 and the ceiling at z = 1. Each clipped wall is
//! projected onto the image plane and filled column by column; 1/depth is
//! interpolated linearly in screen space, so the depth test resolves walls
//! that overlap on screen.

use crate::colors;
use crate::config::RenderConfig;
use crate::maze::Maze;
use crate::math::vec2::Vec2;
use crate::viewer::Viewer;
use crate::visibility::{VisibleWall, VisibleWalls};

use super::framebuffer::FrameBuffer;
use super::renderer::Renderer;

/// Walls closer than this to the eye plane are cut off.
const NEAR: f32 = 0.01;

/// A wall endpoint after projection: screen x and 1/depth.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Projected {
    x: f32,
    inv_depth: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstPersonView {
    focal_length: f32,
    center_x: f32,
    center_y: f32,
}

impl FirstPersonView {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            focal_length: config.focal_length(),
            center_x: config.width as f32 / 2.0,
            center_y: config.height as f32 / 2.0,
        }
    }

    /// Draws ceiling, floor and every visible wall into `renderer`.
    pub fn draw(
        &self,
        renderer: &mut Renderer,
        maze: &Maze,
        viewer: &Viewer,
        visible: &VisibleWalls,
        config: &RenderConfig,
    ) {
        let horizon = self.center_y.round() as i32;
        let width = renderer.width() as i32;
        let height = renderer.height() as i32;
        renderer.draw_rect(0, 0, width, horizon, config.ceiling);
        renderer.draw_rect(0, horizon, width, height - horizon, config.floor);
        renderer.clear_depth();

        let mut fb = renderer.as_framebuffer();
        for wall in &visible.walls {
            let color = maze.edges()[wall.edge].color;
            self.draw_wall(&mut fb, viewer, wall, color);
        }
    }

    fn project(&self, lateral: f32, depth: f32) -> Projected {
        Projected {
            x: self.center_x + self.focal_length * lateral / depth,
            inv_depth: 1.0 / depth,
        }
    }

    /// Projects both endpoints, cutting the wall at the near plane.
    fn project_wall(&self, viewer: &Viewer, start: Vec2, end: Vec2) -> Option<(Projected, Projected)> {
        let (l0, d0) = viewer.to_view_space(start);
        let (l1, d1) = viewer.to_view_space(end);

        if d0 < NEAR && d1 < NEAR {
            return None;
        }
        let cut = |la: f32, da: f32, lb: f32, db: f32| {
            let t = (NEAR - da) / (db - da);
            (la + (lb - la) * t, NEAR)
        };
        let (l0, d0) = if d0 < NEAR { cut(l0, d0, l1, d1) } else { (l0, d0) };
        let (l1, d1) = if d1 < NEAR { cut(l1, d1, l0, d0) } else { (l1, d1) };

        let a = self.project(l0, d0);
        let b = self.project(l1, d1);
        Some(if a.x <= b.x { (a, b) } else { (b, a) })
    }

    fn draw_wall(&self, fb: &mut FrameBuffer, viewer: &Viewer, wall: &VisibleWall, color: u32) {
        let Some((a, b)) = self.project_wall(viewer, wall.segment.start, wall.segment.end) else {
            return;
        };

        let first = (a.x.round() as i32).max(0);
        let last = (b.x.round() as i32).min(fb.width() as i32 - 1);
        let span = b.x - a.x;
        let eye = viewer.height();

        for x in first..=last {
            let t = if span > 0.0 {
                ((x as f32 + 0.5 - a.x) / span).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let inv_depth = a.inv_depth + (b.inv_depth - a.inv_depth) * t;

            let top = self.center_y - self.focal_length * (1.0 - eye) * inv_depth;
            let bottom = self.center_y + self.focal_length * (1.0 + eye) * inv_depth;
            let shaded = colors::shade(color, 0.35 + 0.65 * inv_depth.min(1.0));

            fb.fill_column_with_depth(x, top.round() as i32, bottom.round() as i32, inv_depth, shaded);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewConfig;
    use crate::maze::Direction;

    fn render(maze: &Maze, view: &ViewConfig, config: &RenderConfig) -> Renderer {
        let viewer = Viewer::from_config(view);
        let visible = VisibleWalls::collect(maze, &viewer, config).unwrap();
        let mut renderer = Renderer::new(config.width, config.height);
        FirstPersonView::new(config).draw(&mut renderer, maze, &viewer, &visible, config);
        renderer
    }

    #[test]
    fn near_wall_fills_center_column() {
        let maze = Maze::grid(3, 3, 1.0, 1.0).unwrap();
        let view = ViewConfig {
            x: 1.5,
            y: 1.5,
            ..ViewConfig::default()
        };
        let config = RenderConfig::default().with_size(200, 100);
        let renderer = render(&maze, &view, &config);

        let wall = colors::shade(colors::WALL_EAST_WEST, 1.0);
        assert_eq!(renderer.get_pixel(100, 0), Some(wall));
        assert_eq!(renderer.get_pixel(100, 50), Some(wall));
        assert_eq!(renderer.get_pixel(100, 99), Some(wall));
    }

    #[test]
    fn distant_wall_leaves_ceiling_and_floor() {
        let mut maze = Maze::grid(3, 1, 1.0, 1.0).unwrap();
        maze.open_wall(0, 0, Direction::East).unwrap();
        maze.open_wall(1, 0, Direction::East).unwrap();
        let view = ViewConfig::default();
        let config = RenderConfig::default().with_size(200, 100);
        let renderer = render(&maze, &view, &config);

        assert_eq!(renderer.get_pixel(100, 2), Some(config.ceiling));
        assert_eq!(renderer.get_pixel(100, 97), Some(config.floor));
        let center = renderer.get_pixel(100, 50).unwrap();
        assert_ne!(center, config.ceiling);
        assert_ne!(center, config.floor);
    }

    #[test]
    fn wall_behind_near_plane_is_cut() {
        let config = RenderConfig::default().with_size(200, 100);
        let view = FirstPersonView::new(&config);
        let viewer = Viewer::default();

        let (a, b) = view
            .project_wall(&viewer, Vec2::new(-1.0, 1.0), Vec2::new(1.0, 1.0))
            .unwrap();
        assert!(a.inv_depth <= 1.0 / NEAR + 1e-3);
        assert!(b.inv_depth == 1.0);
        assert!(view
            .project_wall(&viewer, Vec2::new(-1.0, 1.0), Vec2::new(-2.0, -1.0))
            .is_none());
    }
}
