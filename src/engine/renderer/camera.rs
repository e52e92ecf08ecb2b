// Camera and viewport system for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// 2D orthographic camera. One world unit spans `zoom` pixels.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec2,
    /// Pixels per world unit
    pub zoom: f32,
    viewport_width: f32,
    viewport_height: f32,
    /// World-space area kept fully visible on resize, if any
    fit_target: Option<(Vec2, Vec2)>,
    view_proj: Mat4,
}

impl Camera {
    /// Create a new camera
    pub fn new(position: Vec2, viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            position,
            zoom: 1.0,
            viewport_width,
            viewport_height,
            fit_target: None,
            view_proj: Mat4::IDENTITY,
        };
        camera.update_view_proj();
        camera
    }

    /// Update the view-projection matrix
    fn update_view_proj(&mut self) {
        let half_width = (self.viewport_width / 2.0) / self.zoom;
        let half_height = (self.viewport_height / 2.0) / self.zoom;

        self.view_proj = Mat4::orthographic_rh(
            self.position.x - half_width,
            self.position.x + half_width,
            self.position.y - half_height,
            self.position.y + half_height,
            -100.0,
            100.0,
        );
    }

    /// Centre on `center` and zoom so the whole `size` area is visible.
    /// The fit is kept across resizes.
    pub fn fit(&mut self, center: Vec2, size: Vec2) {
        self.fit_target = Some((center, size));
        self.apply_fit();
    }

    fn apply_fit(&mut self) {
        let Some((center, size)) = self.fit_target else {
            return;
        };
        if size.x <= 0.0 || size.y <= 0.0 {
            return;
        }

        self.position = center;
        self.zoom = (self.viewport_width / size.x)
            .min(self.viewport_height / size.y)
            .max(0.1);
        self.update_view_proj();
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.update_view_proj();
        self.apply_fit();
    }

    /// Get the view-projection matrix
    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }
}

/// Camera uniform for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Create a new camera uniform from a camera
    pub fn new(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;
    use approx::assert_relative_eq;

    #[test]
    fn test_fit_shows_whole_area() {
        let mut camera = Camera::new(Vec2::ZERO, 1280.0, 720.0);
        camera.fit(Vec2::new(10.0, 6.0), Vec2::new(20.0, 12.0));

        // 720 / 12 = 60 is tighter than 1280 / 20 = 64
        assert_relative_eq!(camera.zoom, 60.0);
        for corner in [Vec2::new(0.0, 0.0), Vec2::new(20.0, 12.0)] {
            let clip = camera.view_proj_matrix() * Vec4::new(corner.x, corner.y, 0.0, 1.0);
            assert!(clip.x.abs() <= 1.0 + 1e-5);
            assert!(clip.y.abs() <= 1.0 + 1e-5);
        }
    }

    #[test]
    fn test_fit_survives_resize() {
        let mut camera = Camera::new(Vec2::ZERO, 1280.0, 720.0);
        camera.fit(Vec2::new(10.0, 6.0), Vec2::new(20.0, 12.0));
        camera.resize(400.0, 800.0);

        assert_relative_eq!(camera.zoom, 20.0);
        assert_eq!(camera.position, Vec2::new(10.0, 6.0));
    }

    #[test]
    fn test_degenerate_fit_keeps_view() {
        let mut camera = Camera::new(Vec2::ZERO, 800.0, 600.0);
        camera.fit(Vec2::new(5.0, 5.0), Vec2::new(0.0, 10.0));

        assert_relative_eq!(camera.zoom, 1.0);
        assert_eq!(camera.position, Vec2::ZERO);
    }

    #[test]
    fn test_view_proj_maps_center_to_origin() {
        let mut camera = Camera::new(Vec2::ZERO, 800.0, 600.0);
        camera.fit(Vec2::new(10.0, 6.0), Vec2::new(20.0, 12.0));

        let clip = camera.view_proj_matrix() * Vec4::new(10.0, 6.0, 0.0, 1.0);
        assert_relative_eq!(clip.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(clip.y, 0.0, epsilon = 1e-5);
    }
}
