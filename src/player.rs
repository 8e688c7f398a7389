use crate::geom::Aabb;
use crate::input::{Key, KeyState, MouseButton};
use crate::map::Map;
use crate::portal::{Portal, PortalColor, PortalDirection};
use crate::render::{SceneRenderer, TextureId};
use crate::shot::Shot;
use glam::{Mat4, Vec3};
use log::debug;

pub const PLAYER_MOVESPEED: f32 = 6.0;
pub const GRAVITY: f32 = 16.0;
pub const MAXSPEED: f32 = 12.0;
pub const JUMPPOWER: f32 = 7.0;

pub const MOUSE_SENSITIVITY: f32 = 0.0015;
pub const PITCH_LIMIT: f32 = 1.5;
pub const EYE_HEIGHT: f32 = 1.7;

/// Halbe Ausdehnung der Spieler-Hitbox (1 × 1.8 × 1), Position = Fußpunkt.
const BODY_HALF: Vec3 = Vec3::new(0.5, 0.9, 0.5);

/// Ein Portal-Slot: Schuss und das Portal, das er setzt, gehören zusammen.
#[derive(Debug, Clone)]
pub struct PortalSlot {
    pub color: PortalColor,
    pub shot: Shot,
    pub portal: Portal,
}

impl PortalSlot {
    fn new(color: PortalColor) -> Self {
        Self {
            color,
            shot: Shot::new(color),
            portal: Portal::new(color),
        }
    }
}

/// Inverse camera transform parameters, applied by the renderer before any
/// world geometry.
#[derive(Debug, Clone, Copy)]
pub struct ViewTransform {
    pub pitch: f32,
    pub yaw: f32,
    pub eye: Vec3,
}

impl ViewTransform {
    /// rotate(-pitch, X) · rotate(-yaw, Y) · translate(-eye)
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(-self.pitch)
            * Mat4::from_rotation_y(-self.yaw)
            * Mat4::from_translation(-self.eye)
    }
}

#[derive(Debug)]
pub struct Player {
    pub position: Vec3,

    // Blickwinkel in Radiant
    pub pitch: f32,
    pub yaw: f32,

    pub velocity: Vec3,
    pub on_ground: bool,

    slots: [PortalSlot; 2],
}

impl Player {
    pub fn new() -> Self {
        let mut slots = [
            PortalSlot::new(PortalColor::Blue),
            PortalSlot::new(PortalColor::Orange),
        ];
        slots[0]
            .portal
            .set(Vec3::new(1.75, 1.45, 0.0), PortalDirection::Front);
        slots[1]
            .portal
            .set(Vec3::new(0.0, 2.45, 1.75), PortalDirection::Right);

        Self {
            position: Vec3::ZERO,
            pitch: 0.0,
            yaw: 0.0,
            velocity: Vec3::ZERO,
            on_ground: false,
            slots,
        }
    }

    /// Setzt den Spieler für ein neues Spiel an `pos`.
    pub fn create(&mut self, pos: Vec3) {
        self.position = pos;
        self.velocity = Vec3::ZERO;
        self.on_ground = false;
    }

    pub fn eye_position(&self) -> Vec3 {
        self.position + Vec3::new(0.0, EYE_HEIGHT, 0.0)
    }

    pub fn look_direction(&self) -> Vec3 {
        Shot::direction_from(self.pitch, self.yaw)
    }

    pub fn portal(&self, index: usize) -> &Portal {
        &self.slots[index].portal
    }

    pub fn shot(&self, index: usize) -> &Shot {
        &self.slots[index].shot
    }

    /// Advances the player by one frame.
    ///
    /// Collision is resolved one axis at a time in the order X, Z, Y. Each
    /// axis tests its candidate box against the coordinates already committed
    /// by the axes before it, which is what lets the player slide along walls.
    /// A blocked X or Z move only rejects the position; a blocked Y move also
    /// zeroes the vertical speed and lands the player if it was falling.
    pub fn update(
        &mut self,
        dt: f32,
        keys: &KeyState,
        mouse_dx: f32,
        mouse_dy: f32,
        map: &impl Map,
    ) {
        self.yaw += mouse_dx * MOUSE_SENSITIVITY;
        self.pitch += mouse_dy * MOUSE_SENSITIVITY;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);

        self.velocity.x = 0.0;
        self.velocity.z = 0.0;
        self.velocity.y -= GRAVITY * dt;
        if self.velocity.y < -MAXSPEED {
            self.velocity.y = -MAXSPEED;
        }

        // Diagonal absichtlich nicht normalisiert
        let (sin, cos) = self.yaw.sin_cos();
        if keys.is_down(Key::W) {
            self.velocity.z -= cos * PLAYER_MOVESPEED;
            self.velocity.x -= sin * PLAYER_MOVESPEED;
        }
        if keys.is_down(Key::S) {
            self.velocity.z += cos * PLAYER_MOVESPEED;
            self.velocity.x += sin * PLAYER_MOVESPEED;
        }
        if keys.is_down(Key::A) {
            self.velocity.x -= cos * PLAYER_MOVESPEED;
            self.velocity.z += sin * PLAYER_MOVESPEED;
        }
        if keys.is_down(Key::D) {
            self.velocity.x += cos * PLAYER_MOVESPEED;
            self.velocity.z -= sin * PLAYER_MOVESPEED;
        }

        if keys.is_down(Key::Space) && self.on_ground {
            self.velocity.y = JUMPPOWER;
        }

        let target = self.position + self.velocity * dt;

        // erst X ...
        let candidate = Vec3::new(target.x, self.position.y, self.position.z);
        if !map.collides_with_wall(&body_box(candidate)) {
            self.position.x = target.x;
        }

        // ... dann Z mit dem neuen X ...
        let candidate = Vec3::new(self.position.x, self.position.y, target.z);
        if !map.collides_with_wall(&body_box(candidate)) {
            self.position.z = target.z;
        }

        // ... zuletzt Y
        let candidate = Vec3::new(self.position.x, target.y, self.position.z);
        self.on_ground = false;
        if !map.collides_with_wall(&body_box(candidate)) {
            self.position.y = target.y;
        } else {
            if self.velocity.y < 0.0 {
                self.on_ground = true;
            }
            self.velocity.y = 0.0;
        }

        for slot in &mut self.slots {
            if !slot.shot.active {
                continue;
            }
            if let Some(wall) = slot.shot.update(dt, map) {
                slot.shot.place_portal(&wall, &mut slot.portal);
            }
        }
    }

    pub fn mouse_pressed(&mut self, button: MouseButton) {
        match button {
            MouseButton::Left => self.fire(0),
            MouseButton::Right => self.fire(1),
            MouseButton::Middle => {
                debug!("portals reset");
                for slot in &mut self.slots {
                    slot.portal.deactivate();
                }
            }
            MouseButton::Other => {}
        }
    }

    fn fire(&mut self, index: usize) {
        // Start auf Augenhöhe statt am Fußpunkt: nicht gegen eine Vorlage
        // geprüft, nur so trifft der Schuss, worauf das Fadenkreuz zeigt.
        let origin = self.eye_position();
        let (pitch, yaw) = (self.pitch, self.yaw);
        self.slots[index].shot.shoot(origin, pitch, yaw);
    }

    pub fn view_transform(&self) -> ViewTransform {
        ViewTransform {
            pitch: self.pitch,
            yaw: self.yaw,
            eye: self.eye_position(),
        }
    }

    pub fn portals_active(&self) -> bool {
        self.slots[0].portal.active && self.slots[1].portal.active
    }

    pub fn draw_portal_stencils(&self, r: &mut impl SceneRenderer) {
        for slot in &self.slots {
            if slot.portal.active {
                r.draw_stencil(&slot.portal);
            }
        }
    }

    pub fn draw_portal_outlines(&self, r: &mut impl SceneRenderer, textures: &[TextureId]) {
        for slot in &self.slots {
            if slot.portal.active {
                r.draw_outline(&slot.portal, slot.color, textures);
            }
        }
    }

    pub fn draw_shots(&self, r: &mut impl SceneRenderer, textures: &[TextureId]) {
        for slot in &self.slots {
            if slot.shot.active {
                r.draw_shot(&slot.shot, textures, self.pitch, self.yaw);
            }
        }
    }
}

fn body_box(feet: Vec3) -> Aabb {
    Aabb::from_center(feet + Vec3::new(0.0, BODY_HALF.y, 0.0), BODY_HALF)
}
