use crate::input::{KeyState, MouseButton};
use crate::map::BoxMap;
use crate::player::{Player, ViewTransform};
use crate::render::{SceneMesh, TextureId};
use glam::Vec3;
use log::debug;

const SPAWN: Vec3 = Vec3::new(0.0, 0.5, 2.0);

// Der Debug-Renderer hat keine Texturen
const NO_TEXTURES: [TextureId; 0] = [];

pub struct Game {
    frame: u64,
    map: BoxMap,
    player: Player,
    scene: SceneMesh,
}

impl Game {
    pub fn new() -> Self {
        let mut player = Player::new();
        player.create(SPAWN);

        Self {
            frame: 0,
            map: BoxMap::test_room(),
            player,
            scene: SceneMesh::new(),
        }
    }

    pub fn update(&mut self, dt: f32, keys: &KeyState, mouse_dx: f32, mouse_dy: f32) {
        self.frame += 1;
        self.player
            .update(dt, keys, mouse_dx, mouse_dy, &self.map);

        // Debug: jede Sekunde (bei 60 fps) Position ausgeben
        if self.frame % 60 == 0 {
            let p = &self.player;
            let look = p.look_direction();
            debug!(
                "POS x={:.2} y={:.2} z={:.2} vy={:.2} ground={} look=({:.2},{:.2},{:.2})",
                p.position.x,
                p.position.y,
                p.position.z,
                p.velocity.y,
                p.on_ground,
                look.x,
                look.y,
                look.z
            );
            debug!(
                "PORTALS blue={}/{} orange={}/{} (shot/portal)",
                p.shot(0).active,
                p.portal(0).active,
                p.shot(1).active,
                p.portal(1).active
            );
        }
    }

    pub fn mouse_pressed(&mut self, button: MouseButton) {
        self.player.mouse_pressed(button);
    }

    pub fn view_transform(&self) -> ViewTransform {
        self.player.view_transform()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Baut das Debug-Mesh neu: Wände, Portale (Rahmen, dann Öffnung), Schüsse.
    pub fn build_scene(&mut self) -> &SceneMesh {
        self.scene.clear();
        self.scene.push_walls(self.map.walls());
        self.player
            .draw_portal_outlines(&mut self.scene, &NO_TEXTURES);
        self.player.draw_portal_stencils(&mut self.scene);
        self.player.draw_shots(&mut self.scene, &NO_TEXTURES);
        &self.scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::PortalDirection;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn player_lands_after_spawn() {
        let mut game = Game::new();
        for _ in 0..60 {
            game.update(DT, &KeyState::default(), 0.0, 0.0);
        }
        assert_eq!(game.frame(), 60);
        assert!(game.player().on_ground);
        assert!(game.player().position.y < 0.05);
    }

    #[test]
    fn shooting_the_far_wall_places_both_portals() {
        let mut game = Game::new();
        game.mouse_pressed(MouseButton::Left);
        for _ in 0..60 {
            game.update(DT, &KeyState::default(), 0.0, 0.0);
        }
        assert!(game.player().portal(0).active);
        assert!(!game.player().portals_active());

        // Nach rechts drehen (yaw = -pi/2 schaut nach +X)
        let turn = -std::f32::consts::FRAC_PI_2 / crate::player::MOUSE_SENSITIVITY;
        game.update(DT, &KeyState::default(), turn, 0.0);
        game.mouse_pressed(MouseButton::Right);
        for _ in 0..60 {
            game.update(DT, &KeyState::default(), 0.0, 0.0);
        }
        assert!(game.player().portals_active());

        let blue = game.player().portal(0);
        let orange = game.player().portal(1);
        assert_eq!(blue.position.z, -10.0);
        assert_eq!(orange.position.x, 10.0);
    }

    #[test]
    fn steep_shot_at_longest_frame_lands_on_floor() {
        let mut game = Game::new();
        for _ in 0..60 {
            game.update(DT, &KeyState::default(), 0.0, 0.0);
        }

        // ganz nach unten schauen, Pitch wird auf -1.5 geklemmt
        game.update(DT, &KeyState::default(), 0.0, -2000.0);
        assert_eq!(game.player().pitch, -crate::player::PITCH_LIMIT);

        game.mouse_pressed(MouseButton::Left);
        for _ in 0..100 {
            game.update(0.05, &KeyState::default(), 0.0, 0.0);
        }

        let blue = game.player().portal(0);
        assert!(blue.active);
        assert!(!game.player().shot(0).active);
        assert_eq!(blue.direction, PortalDirection::Up);
        assert_eq!(blue.position.y, 0.0);
    }

    #[test]
    fn scene_grows_with_portals_and_shots() {
        let mut game = Game::new();
        let walls_only = game.build_scene().verts.len();
        assert!(walls_only > 0);

        game.mouse_pressed(MouseButton::Left);
        let with_shot = game.build_scene().verts.len();
        assert_eq!(with_shot, walls_only + 24);

        for _ in 0..60 {
            game.update(DT, &KeyState::default(), 0.0, 0.0);
        }
        // Schuss weg, Portal da: Rahmen + Öffnung
        let with_portal = game.build_scene().verts.len();
        assert_eq!(with_portal, walls_only + 48);
    }
}
