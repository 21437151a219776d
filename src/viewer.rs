//! The maze viewer's eye.
//!
//! # Coordinate System
//!
//! The maze lives in the xy ground plane with z up:
//! - X: positive east
//! - Y: positive north
//! - Z: positive up, floor at z = -1, ceiling at z = 1
//!
//! The view direction is measured in degrees counter-clockwise about +z,
//! starting from +x. The field of view is the full horizontal angle.

use crate::config::{ViewConfig, DEFAULT_FAR};
use crate::geometry::{LineSeg, Side};
use crate::math::vec2::Vec2;

/// Viewer position and horizontal view cone.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewer {
    position: Vec2,
    height: f32,
    dir_degrees: f32,
    fov_degrees: f32,
    /// Length of the view cone's boundary rays.
    far: f32,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 0.0, 60.0)
    }
}

impl Viewer {
    pub fn new(position: Vec2, dir_degrees: f32, fov_degrees: f32) -> Self {
        Self {
            position,
            height: 0.0,
            dir_degrees,
            fov_degrees,
            far: DEFAULT_FAR,
        }
    }

    pub fn from_config(config: &ViewConfig) -> Self {
        let mut viewer = Self::new(
            Vec2::new(config.x, config.y),
            config.dir_degrees,
            config.fov_degrees,
        );
        viewer.height = config.z;
        viewer.far = config.far;
        viewer
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Eye height between floor (-1) and ceiling (1).
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn direction(&self) -> f32 {
        self.dir_degrees
    }

    pub fn fov(&self) -> f32 {
        self.fov_degrees
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.position = Vec2::new(x, y);
        self.height = z;
    }

    /// Sets the view direction, wrapped to [0, 360).
    pub fn set_direction(&mut self, degrees: f32) {
        self.dir_degrees = degrees.rem_euclid(360.0);
    }

    /// Unit vector along the view direction.
    pub fn forward(&self) -> Vec2 {
        Vec2::from_angle(self.dir_degrees.to_radians())
    }

    /// Unit vector pointing to the viewer's right.
    pub fn right(&self) -> Vec2 {
        let forward = self.forward();
        Vec2::new(forward.y, -forward.x)
    }

    /// Boundary rays of the full view cone, `far` units long. Traversal uses
    /// the viewer's own [`Viewer::far`]; the map view passes a shorter length.
    ///
    /// Both rays run from their far point back to the eye, so the inside of
    /// the cone is LEFT of the left ray and RIGHT of the right ray.
    pub fn frustum_rays(&self, far: f32) -> (LineSeg, LineSeg) {
        let half_fov = (self.fov_degrees / 2.0).to_radians();
        let dir = self.dir_degrees.to_radians();

        let left_far = self.position + Vec2::from_angle(dir + half_fov) * far;
        let right_far = self.position + Vec2::from_angle(dir - half_fov) * far;

        (
            LineSeg::new(left_far, self.position),
            LineSeg::new(right_far, self.position),
        )
    }

    /// Boundary rays of the narrower cone through a portal from `a` to `b`.
    ///
    /// Returns `None` when the eye and both endpoints are collinear, since
    /// no wedge can be built.
    pub fn rays_through(&self, a: Vec2, b: Vec2) -> Option<(LineSeg, LineSeg)> {
        let through_a = LineSeg::new(a, self.position);
        let through_b = LineSeg::new(b, self.position);

        match through_a.point_side(b.x, b.y) {
            Side::Left => Some((through_a, through_b)),
            Side::Right => Some((through_b, through_a)),
            Side::On => None,
        }
    }

    /// Transforms a ground-plane point into `(lateral, depth)`: distance to
    /// the right of the view axis and distance along it.
    pub fn to_view_space(&self, point: Vec2) -> (f32, f32) {
        let offset = point - self.position;
        (offset.dot(self.right()), offset.dot(self.forward()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipper::Frustum;
    use approx::assert_relative_eq;

    #[test]
    fn frustum_rays_contain_forward_point() {
        let viewer = Viewer::new(Vec2::new(2.0, 3.0), 135.0, 60.0);
        let (left, right) = viewer.frustum_rays(100.0);
        let frustum = Frustum::new(&left, &right);

        assert!(frustum.contains(viewer.position() + viewer.forward() * 5.0));
        assert!(!frustum.contains(viewer.position() - viewer.forward() * 5.0));
        assert!(!frustum.contains(viewer.position() + viewer.right() * 5.0));
    }

    #[test]
    fn frustum_rays_end_at_eye() {
        let viewer = Viewer::new(Vec2::new(1.0, 1.0), 0.0, 90.0);
        let (left, right) = viewer.frustum_rays(10.0);

        assert_eq!(left.end, viewer.position());
        assert_eq!(right.end, viewer.position());
        assert_relative_eq!(left.start, Vec2::new(1.0 + 50f32.sqrt(), 1.0 + 50f32.sqrt()), epsilon = 1e-4);
        assert_relative_eq!(right.start, Vec2::new(1.0 + 50f32.sqrt(), 1.0 - 50f32.sqrt()), epsilon = 1e-4);
    }

    #[test]
    fn rays_through_orders_endpoints() {
        let viewer = Viewer::default();
        let a = Vec2::new(5.0, 2.0);
        let b = Vec2::new(5.0, -2.0);

        let (left, right) = viewer.rays_through(a, b).unwrap();
        assert_eq!(left.start, a);
        assert_eq!(right.start, b);

        let (left, right) = viewer.rays_through(b, a).unwrap();
        assert_eq!(left.start, a);
        assert_eq!(right.start, b);
    }

    #[test]
    fn rays_through_collinear_portal_is_none() {
        let viewer = Viewer::default();
        assert!(viewer
            .rays_through(Vec2::new(2.0, 0.0), Vec2::new(6.0, 0.0))
            .is_none());
    }

    #[test]
    fn view_space_axes() {
        let viewer = Viewer::new(Vec2::new(1.0, 1.0), 90.0, 60.0);
        let (lateral, depth) = viewer.to_view_space(Vec2::new(3.0, 5.0));
        assert_relative_eq!(depth, 4.0, epsilon = 1e-5);
        assert_relative_eq!(lateral, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn far_comes_from_config() {
        let view = ViewConfig {
            far: 25.0,
            ..ViewConfig::default()
        };
        assert_eq!(Viewer::from_config(&view).far(), 25.0);
        assert_eq!(Viewer::default().far(), DEFAULT_FAR);
    }

    #[test]
    fn direction_wraps() {
        let mut viewer = Viewer::default();
        viewer.set_direction(-90.0);
        assert_relative_eq!(viewer.direction(), 270.0);
        viewer.set_direction(725.0);
        assert_relative_eq!(viewer.direction(), 5.0, epsilon = 1e-4);
    }
}
