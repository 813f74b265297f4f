// Screen-space camera for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// Fixed camera over the logical play area
///
/// World coordinates are pixels with the origin in the top-left corner and
/// y pointing down. The play area is stretched over the whole surface,
/// whatever the physical window size.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Logical width and height of the visible area
    size: Vec2,
    view_proj: Mat4,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        let mut camera = Self {
            size: Vec2::new(width, height),
            view_proj: Mat4::IDENTITY,
        };
        camera.update_view_proj();
        camera
    }

    fn update_view_proj(&mut self) {
        // Top and bottom swapped so y grows downward
        self.view_proj = Mat4::orthographic_rh(0.0, self.size.x, self.size.y, 0.0, -1.0, 1.0);
    }

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
    pub fn new(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}
