use crate::geom::Aabb;
use crate::mesh::{Vertex, push_cuboid};
use crate::portal::{PORTAL_SIZE, Portal, PortalColor};
use crate::shot::Shot;
use glam::Vec3;

/// Opaque texture handle, owned by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureId(pub u32);

/// What the player asks the renderer to draw.
pub trait SceneRenderer {
    fn draw_stencil(&mut self, portal: &Portal);
    fn draw_outline(&mut self, portal: &Portal, color: PortalColor, textures: &[TextureId]);
    fn draw_shot(&mut self, shot: &Shot, textures: &[TextureId], pitch: f32, yaw: f32);
}

const WALL_COLOR: [f32; 3] = [0.55, 0.55, 0.58];
const STENCIL_COLOR: [f32; 3] = [0.03, 0.03, 0.05];
const SHOT_HALF: f32 = 0.08;

// Abstand von der Wand gegen Z-Fighting
const SURFACE_EPS: f32 = 0.01;
const OUTLINE_EPS: f32 = 0.005;
const OUTLINE_BORDER: f32 = 0.08;

/// Debug-Szene: alles als einfarbige Quader in einem Mesh.
#[derive(Default)]
pub struct SceneMesh {
    pub verts: Vec<Vertex>,
    pub inds: Vec<u32>,
}

impl SceneMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.verts.clear();
        self.inds.clear();
    }

    pub fn push_walls(&mut self, walls: &[Aabb]) {
        for w in walls {
            push_cuboid(&mut self.verts, &mut self.inds, w.min, w.max, WALL_COLOR);
        }
    }

    /// Flat slab for the portal opening, lifted `lift` off the wall and grown
    /// by `grow` along the wall plane.
    fn push_portal_slab(&mut self, portal: &Portal, lift: f32, grow: f32, color: [f32; 3]) {
        let n = portal.normal();
        let (w, h) = PORTAL_SIZE;

        // Portale auf Boden/Decke liegen flach: "Höhe" entlang Z
        let half = if n.y != 0.0 {
            Vec3::new(w * 0.5 + grow, 0.0, h * 0.5 + grow)
        } else if n.x != 0.0 {
            Vec3::new(0.0, h * 0.5 + grow, w * 0.5 + grow)
        } else {
            Vec3::new(w * 0.5 + grow, h * 0.5 + grow, 0.0)
        };

        let center = portal.position + n * (lift + SURFACE_EPS * 0.5);
        let thickness = n.abs() * SURFACE_EPS * 0.5;
        push_cuboid(
            &mut self.verts,
            &mut self.inds,
            center - half - thickness,
            center + half + thickness,
            color,
        );
    }
}

impl SceneRenderer for SceneMesh {
    fn draw_stencil(&mut self, portal: &Portal) {
        self.push_portal_slab(portal, SURFACE_EPS, 0.0, STENCIL_COLOR);
    }

    // Texturen braucht der Debug-Renderer nicht
    fn draw_outline(&mut self, portal: &Portal, color: PortalColor, _textures: &[TextureId]) {
        self.push_portal_slab(portal, OUTLINE_EPS, OUTLINE_BORDER, color.rgb());
    }

    fn draw_shot(&mut self, shot: &Shot, _textures: &[TextureId], _pitch: f32, _yaw: f32) {
        let half = Vec3::splat(SHOT_HALF);
        push_cuboid(
            &mut self.verts,
            &mut self.inds,
            shot.position - half,
            shot.position + half,
            shot.color.rgb(),
        );
    }
}
