use crate::player::ViewTransform;
use glam::Mat4;

pub struct Camera {
    pub fov_y: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            fov_y: 70.0_f32.to_radians(),
            z_near: 0.05,
            z_far: 200.0,
        }
    }

    pub fn projection(&self, width: u32, height: u32) -> Mat4 {
        let aspect = (width.max(1) as f32) / (height.max(1) as f32);
        // Right-handed, clip-space Z 0..1 (wgpu)
        Mat4::perspective_rh(self.fov_y, aspect, self.z_near, self.z_far)
    }

    pub fn view_proj(&self, view: &ViewTransform, width: u32, height: u32) -> Mat4 {
        self.projection(width, height) * view.matrix()
    }
}
