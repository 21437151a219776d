//! ARGB8888 colors and helpers.

pub const BACKGROUND: u32 = 0xFF1E1E1E;
pub const GRID: u32 = 0xFF333333;
pub const FLOOR: u32 = 0xFF3A3024;
pub const CEILING: u32 = 0xFF202838;

pub const WALL_DIM: u32 = 0xFF505050;
pub const WALL_NORTH_SOUTH: u32 = 0xFFC8A050;
pub const WALL_EAST_WEST: u32 = 0xFF5090C8;
pub const FRUSTUM: u32 = 0xFFFF00FF;
pub const VIEWER: u32 = 0xFFFFFFFF;

/// Splits a packed color into (r, g, b) in [0, 1].
pub fn unpack_color(color: u32) -> (f32, f32, f32) {
    let r = ((color >> 16) & 0xFF) as f32 / 255.0;
    let g = ((color >> 8) & 0xFF) as f32 / 255.0;
    let b = (color & 0xFF) as f32 / 255.0;
    (r, g, b)
}

/// Packs (r, g, b, a) in [0, 1] into ARGB8888.
pub fn pack_color(r: f32, g: f32, b: f32, a: f32) -> u32 {
    let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
    (to_byte(a) << 24) | (to_byte(r) << 16) | (to_byte(g) << 8) | to_byte(b)
}

/// Scales the RGB channels of `color` by `factor`, keeping it opaque.
pub fn shade(color: u32, factor: f32) -> u32 {
    let (r, g, b) = unpack_color(color);
    pack_color(r * factor, g * factor, b * factor, 1.0)
}

/// ARGB8888 to the RGBA byte order `image` expects.
pub fn to_rgba(color: u32) -> [u8; 4] {
    let [a, r, g, b] = color.to_be_bytes();
    [r, g, b, a]
}
