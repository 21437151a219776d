//! Render and viewer settings.

use crate::colors;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
/// Largest accepted image side, in pixels.
pub const MAX_IMAGE_SIDE: u32 = 16_384;
pub const DEFAULT_FAR: f32 = 1000.0;

/// Output image and traversal settings shared by the map and first-person
/// views.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Border left empty around the map view, in pixels.
    pub map_margin: u32,
    /// Distance from the eye to the image plane, in pixels. Defaults to half
    /// the image width.
    pub focal_length: Option<f32>,
    /// Maximum number of portals followed from the viewer's cell.
    pub max_depth: usize,
    pub background: u32,
    pub floor: u32,
    pub ceiling: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            map_margin: 20,
            focal_length: None,
            max_depth: 64,
            background: colors::BACKGROUND,
            floor: colors::FLOOR,
            ceiling: colors::CEILING,
        }
    }
}

impl RenderConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_focal_length(mut self, focal_length: f32) -> Self {
        self.focal_length = Some(focal_length);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_map_margin(mut self, margin: u32) -> Self {
        self.map_margin = margin;
        self
    }

    pub fn focal_length(&self) -> f32 {
        self.focal_length.unwrap_or(self.width as f32 / 2.0)
    }
}

/// Where the viewer stands and looks.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    pub x: f32,
    pub y: f32,
    /// Eye height, between the floor (-1) and the ceiling (1).
    pub z: f32,
    /// Degrees counter-clockwise from +x.
    pub dir_degrees: f32,
    /// Full horizontal field of view, in degrees.
    pub fov_degrees: f32,
    /// Length of the view cone's boundary rays.
    pub far: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            x: 0.5,
            y: 0.5,
            z: 0.0,
            dir_degrees: 0.0,
            fov_degrees: 60.0,
            far: DEFAULT_FAR,
        }
    }
}
