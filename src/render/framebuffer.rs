//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a safe view into color and depth buffers with bounds-checked access.
//! The depth buffer holds inverse view depth so nearer walls win.

/// Number of pixels in a `width` x `height` buffer. Computed in `usize` so
/// large images do not overflow `u32`.
pub(crate) fn buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// Row-major index of (x, y), or `None` outside a `width` x `height` buffer.
#[inline]
pub(crate) fn pixel_index(x: i32, y: i32, width: u32, height: u32) -> Option<usize> {
    if x < 0 || y < 0 || x as u32 >= width || y as u32 >= height {
        return None;
    }
    Some(y as usize * width as usize + x as usize)
}

/// A view into color and depth buffers.
///
/// Wraps 1D slices with width/height metadata to enable safe 2D pixel access.
/// This is a borrowed view, not an owning type - it's meant to be created
/// temporarily when you need to pass buffers + dimensions together.
///
/// # Depth Buffer
///
/// The depth buffer stores 1/depth for each pixel, where depth is the
/// distance along the view direction. 1/depth interpolates linearly across
/// the screen, and larger values are closer to the eye. 0.0 means empty.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    depth_buffer: &'a mut [f32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from buffer slices and dimensions.
    ///
    /// # Panics
    /// Panics in debug builds if buffer lengths don't match width * height
    pub fn new(
        color_buffer: &'a mut [u32],
        depth_buffer: &'a mut [f32],
        width: u32,
        height: u32,
    ) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            buffer_len(width, height),
            "Color buffer size doesn't match dimensions"
        );
        debug_assert_eq!(
            depth_buffer.len(),
            buffer_len(width, height),
            "Depth buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            depth_buffer,
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

    /// Set a pixel at (x, y) if `inv_depth` is nearer than what is stored.
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, inv_depth: f32, color: u32) {
        if let Some(idx) = pixel_index(x, y, self.width, self.height) {
            if inv_depth > self.depth_buffer[idx] {
                self.depth_buffer[idx] = inv_depth;
                self.color_buffer[idx] = color;
            }
        }
    }

    /// Fills column `x` from row `y0` to `y1` inclusive with depth testing.
    /// Rows outside the buffer are skipped.
    pub fn fill_column_with_depth(&mut self, x: i32, y0: i32, y1: i32, inv_depth: f32, color: u32) {
        let (top, bottom) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        let top = top.max(0);
        let bottom = bottom.min(self.height as i32 - 1);
        for y in top..=bottom {
            self.set_pixel_with_depth(x, y, inv_depth, color);
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        pixel_index(x, y, self.width, self.height).map(|idx| self.color_buffer[idx])
    }

    /// Get the stored inverse depth at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_depth(&self, x: i32, y: i32) -> Option<f32> {
        pixel_index(x, y, self.width, self.height).map(|idx| self.depth_buffer[idx])
    }
}
