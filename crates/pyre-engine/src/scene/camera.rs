use glam::{Mat4, Vec3};

/// Perspective camera.
///
/// The view matrix is recomputed by [`update`](Self::update) from the
/// current position/target/up; the projection matrix is cached and refreshed
/// by [`update_projection_matrix`](Self::update_projection_matrix) after the
/// aspect ratio changes (window resize).
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,

    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,

    view: Mat4,
    projection: Mat4,
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        let mut camera = Self {
            position,
            target,
            up: Vec3::Y,
            fov_y: 45f32.to_radians(),
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        };
        camera.update();
        camera.update_projection_matrix();
        camera
    }

    /// Recomputes the view matrix from position/target/up.
    pub fn update(&mut self) {
        self.view = Mat4::look_at_rh(self.position, self.target, self.up);
    }

    /// Stores a new aspect ratio. Must be > 0; the projection matrix is not
    /// refreshed until [`update_projection_matrix`] is called.
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        debug_assert!(aspect > 0.0, "aspect ratio must be > 0, got {aspect}");
        self.aspect = aspect;
    }

    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect
    }

    /// Recomputes the cached projection matrix from fov/aspect/near/far.
    pub fn update_projection_matrix(&mut self) {
        self.projection = Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far);
    }

    /// Rotates the camera position around the target's Y axis.
    pub fn orbit(&mut self, yaw: f32) {
        let offset = self.position - self.target;
        self.position = self.target + Mat4::from_rotation_y(yaw).transform_vector3(offset);
    }

    #[inline]
    pub fn view(&self) -> Mat4 {
        self.view
    }

    #[inline]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Combined projection · view matrix for uniform upload.
    #[inline]
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_aspect_ratio() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        camera.set_aspect_ratio(800.0 / 600.0);
        camera.update_projection_matrix();
        assert!((camera.aspect_ratio() - 800.0 / 600.0).abs() < 1e-6);
        assert!(camera.projection().is_finite());
    }

    #[test]
    fn update_tracks_position_changes() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let before = camera.view();
        camera.position = Vec3::new(3.0, 1.0, 5.0);
        camera.update();
        assert_ne!(before, camera.view());
    }

    #[test]
    fn orbit_preserves_distance_to_target() {
        let mut camera = Camera::new(Vec3::new(0.0, 1.0, 5.0), Vec3::ZERO);
        let before = (camera.position - camera.target).length();
        camera.orbit(0.7);
        let after = (camera.position - camera.target).length();
        assert!((before - after).abs() < 1e-5);
    }

    #[test]
    fn orbit_keeps_height() {
        let mut camera = Camera::new(Vec3::new(0.0, 2.0, 5.0), Vec3::ZERO);
        camera.orbit(1.3);
        assert!((camera.position.y - 2.0).abs() < 1e-5);
    }
}
