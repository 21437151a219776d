//! Low-level rendering primitives.
//!
//! Provides the [`Renderer`] struct which owns the color and depth buffers,
//! implements line and rectangle drawing, and exports the result as PNG.

use std::path::Path;

use image::RgbaImage;
use log::info;

use super::framebuffer::{buffer_len, pixel_index, FrameBuffer};
use crate::colors;
use crate::error::Result;

pub struct Renderer {
    color_buffer: Vec<u32>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = buffer_len(width, height);
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            depth_buffer: vec![0.0; size], // 0.0 = infinitely far
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Clear the depth buffer to prepare for a new frame.
    #[inline]
    pub fn clear_depth(&mut self) {
        self.depth_buffer.fill(0.0);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(index) = pixel_index(x, y, self.width, self.height) {
            self.color_buffer[index] = color;
        }
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        pixel_index(x, y, self.width, self.height).map(|index| self.color_buffer[index])
    }

    #[inline]
    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        for dy in 0..height {
            for dx in 0..width {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Draws a line between two points using Bresenham's line algorithm.
    ///
    /// For each step along the major axis we decide whether to also step
    /// along the minor axis based on an integer error term, so no floating
    /// point is needed.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        let x_incr_direction = if x0 < x1 { 1 } else { -1 };
        let y_incr_direction = if y0 < y1 { 1 } else { -1 };

        // Positive error favors x movement, negative favors y.
        let mut err = dx - dy;

        let mut x = x0;
        let mut y = y0;

        loop {
            self.set_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;

            if e2 > -dy {
                err -= dy;
                x += x_incr_direction;
            }

            // Both conditions can hold, giving a diagonal step.
            if e2 < dx {
                err += dx;
                y += y_incr_direction;
            }
        }
    }

    /// Copies the color buffer into an RGBA image.
    pub fn to_image(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width, self.height);
        for (pixel, &color) in img.pixels_mut().zip(&self.color_buffer) {
            pixel.0 = colors::to_rgba(color);
        }
        img
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.to_image().save(path)?;
        info!("wrote {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }

    /// Get a mutable FrameBuffer view into the color and depth buffers.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(
            &mut self.color_buffer,
            &mut self.depth_buffer,
            self.width,
            self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_hits_both_endpoints() {
        let mut renderer = Renderer::new(10, 10);
        renderer.draw_line(1, 8, 7, 2, 0xFFFFFFFF);

        assert_eq!(renderer.get_pixel(1, 8), Some(0xFFFFFFFF));
        assert_eq!(renderer.get_pixel(7, 2), Some(0xFFFFFFFF));
        assert_eq!(renderer.get_pixel(4, 5), Some(0xFFFFFFFF));
    }

    #[test]
    fn image_uses_rgba_order() {
        let mut renderer = Renderer::new(2, 1);
        renderer.clear(0xFF102030);
        let img = renderer.to_image();
        assert_eq!(img.get_pixel(1, 0).0, [0x10, 0x20, 0x30, 0xFF]);
    }
}
