//! Top-down map of the maze.
//!
//! Draws every wall dimmed, the cells the traversal reached, the visible
//! portions of walls in their own color and the viewer's view cone.

use crate::colors;
use crate::config::RenderConfig;
use crate::geometry::LineSeg;
use crate::math::vec2::Vec2;
use crate::maze::Maze;
use crate::viewer::Viewer;
use crate::visibility::VisibleWalls;

use super::renderer::Renderer;

const VIEWER_SIZE: i32 = 5;

/// Maps maze coordinates onto the image, y up, keeping the aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    min: Vec2,
    scale: f32,
    origin_x: f32,
    origin_y: f32,
}

impl MapView {
    /// Fits the maze extents into the image, leaving `map_margin` pixels on
    /// every side and centering the short axis.
    pub fn new(maze: &Maze, config: &RenderConfig) -> Self {
        let (min, max) = maze.extents();
        let margin = config.map_margin as f32;
        let avail_w = (config.width as f32 - 2.0 * margin).max(1.0);
        let avail_h = (config.height as f32 - 2.0 * margin).max(1.0);
        let span = max - min;

        let scale = (avail_w / span.x).min(avail_h / span.y);
        let origin_x = margin + (avail_w - span.x * scale) / 2.0;
        // Image rows grow downward, so the maze's min.y sits at the bottom.
        let origin_y = margin + avail_h - (avail_h - span.y * scale) / 2.0;

        Self {
            min,
            scale,
            origin_x,
            origin_y,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn to_screen(&self, point: Vec2) -> (i32, i32) {
        let x = self.origin_x + (point.x - self.min.x) * self.scale;
        let y = self.origin_y - (point.y - self.min.y) * self.scale;
        (x.round() as i32, y.round() as i32)
    }

    fn draw_segment(&self, renderer: &mut Renderer, segment: &LineSeg, color: u32) {
        let (x0, y0) = self.to_screen(segment.start);
        let (x1, y1) = self.to_screen(segment.end);
        renderer.draw_line(x0, y0, x1, y1, color);
    }

    /// Draws the map into `renderer`.
    pub fn draw(
        &self,
        renderer: &mut Renderer,
        maze: &Maze,
        viewer: &Viewer,
        visible: &VisibleWalls,
        config: &RenderConfig,
    ) {
        renderer.clear(config.background);

        for (id, edge) in maze.edges().iter().enumerate() {
            if edge.opaque {
                self.draw_segment(renderer, &maze.edge_segment(id), colors::WALL_DIM);
            }
        }

        for &cell in &visible.cells {
            let Some(cell) = maze.cell(cell) else {
                continue;
            };
            for &id in &cell.edges {
                if !maze.edges()[id].opaque {
                    self.draw_segment(renderer, &maze.edge_segment(id), colors::GRID);
                }
            }
        }

        for wall in &visible.walls {
            let color = maze.edges()[wall.edge].color;
            self.draw_segment(renderer, &wall.segment, color);
        }

        // Rays only need to reach across the maze.
        let (min, max) = maze.extents();
        let (left, right) = viewer.frustum_rays((max - min).length());
        self.draw_segment(renderer, &left, colors::FRUSTUM);
        self.draw_segment(renderer, &right, colors::FRUSTUM);

        let (vx, vy) = self.to_screen(viewer.position());
        renderer.draw_rect(
            vx - VIEWER_SIZE / 2,
            vy - VIEWER_SIZE / 2,
            VIEWER_SIZE,
            VIEWER_SIZE,
            colors::VIEWER,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_fits_and_flips_y() {
        let maze = Maze::grid(4, 2, 1.0, 1.0).unwrap();
        let config = RenderConfig::default().with_size(440, 440).with_map_margin(20);
        let map = MapView::new(&maze, &config);

        assert_eq!(map.scale(), 100.0);
        // 200px tall map centered in 400px of room.
        assert_eq!(map.to_screen(Vec2::new(0.0, 0.0)), (20, 320));
        assert_eq!(map.to_screen(Vec2::new(4.0, 2.0)), (420, 120));
    }

    #[test]
    fn visible_wall_drawn_in_its_color() {
        let maze = Maze::grid(3, 3, 1.0, 1.0).unwrap();
        let viewer = Viewer::new(Vec2::new(1.5, 1.5), 0.0, 60.0);
        let config = RenderConfig::default().with_size(340, 340);
        let visible = VisibleWalls::collect(&maze, &viewer, &config).unwrap();

        let map = MapView::new(&maze, &config);
        let mut renderer = Renderer::new(config.width, config.height);
        map.draw(&mut renderer, &maze, &viewer, &visible, &config);

        let (x, y) = map.to_screen(Vec2::new(2.0, 1.5));
        assert_eq!(renderer.get_pixel(x, y), Some(colors::WALL_EAST_WEST));
        let (x, y) = map.to_screen(Vec2::new(2.0, 1.05));
        assert_eq!(renderer.get_pixel(x, y), Some(colors::WALL_DIM));
        let (x, y) = map.to_screen(viewer.position());
        assert_eq!(renderer.get_pixel(x, y), Some(colors::VIEWER));
    }
}
