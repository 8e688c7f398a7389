use crate::geom::Aabb;
use crate::map::Map;
use crate::portal::{Portal, PortalColor, PortalDirection};
use glam::Vec3;
use log::debug;

pub const SHOT_SPEED: f32 = 30.0;
/// Sekunden, bis ein Schuss ohne Treffer verfällt.
pub const SHOT_LIFETIME: f32 = 4.0;
/// Longest distance moved between two wall checks. Must stay below the
/// thinnest wall, or shots tunnel.
pub const SHOT_STEP: f32 = 0.25;

#[derive(Debug, Clone)]
pub struct Shot {
    pub color: PortalColor,
    pub active: bool,
    pub position: Vec3,
    pub direction: Vec3,

    prev_position: Vec3,
    age: f32,
}

impl Shot {
    pub fn new(color: PortalColor) -> Self {
        Self {
            color,
            active: false,
            position: Vec3::ZERO,
            direction: Vec3::NEG_Z,
            prev_position: Vec3::ZERO,
            age: 0.0,
        }
    }

    /// Unit direction for a view rotation; pitch > 0 looks up, yaw = 0 looks down -Z.
    pub fn direction_from(pitch: f32, yaw: f32) -> Vec3 {
        let (sp, cp) = pitch.sin_cos();
        let (sy, cy) = yaw.sin_cos();
        Vec3::new(-sy * cp, sp, -cy * cp)
    }

    pub fn shoot(&mut self, origin: Vec3, pitch: f32, yaw: f32) {
        self.active = true;
        self.position = origin;
        self.prev_position = origin;
        self.direction = Self::direction_from(pitch, yaw);
        self.age = 0.0;
        debug!(
            "shot {:?} fired from {:.2} dir {:.2}",
            self.color, origin, self.direction
        );
    }

    /// Moves the shot along its direction, checking `map` every
    /// `SHOT_STEP` units like a ray march. Stops inside the first wall hit and
    /// returns it; `prev_position` is then the last point outside.
    pub fn update(&mut self, dt: f32, map: &impl Map) -> Option<Aabb> {
        self.age += dt;

        let dist = SHOT_SPEED * dt;
        let steps = ((dist / SHOT_STEP).ceil() as usize).max(1);
        let step = self.direction * (dist / steps as f32);

        for _ in 0..steps {
            self.prev_position = self.position;
            self.position += step;
            if let Some(wall) = map.point_in_wall(self.position) {
                return Some(wall);
            }
        }

        if self.age > SHOT_LIFETIME {
            self.active = false;
            debug!("shot {:?} expired at {:.2}", self.color, self.position);
        }
        None
    }

    /// Puts `portal` on the face of `wall` this shot entered through and
    /// retires the shot.
    pub fn place_portal(&mut self, wall: &Aabb, portal: &mut Portal) {
        let (axis, sign) = self.entry_face(wall);

        let mut pos = wall.center();
        pos[axis] = if sign > 0.0 { wall.max[axis] } else { wall.min[axis] };

        let direction = match (axis, sign > 0.0) {
            (0, true) => PortalDirection::Right,
            (0, false) => PortalDirection::Left,
            (1, true) => PortalDirection::Up,
            (1, false) => PortalDirection::Down,
            (_, true) => PortalDirection::Back,
            (_, false) => PortalDirection::Front,
        };

        portal.place(pos, direction);
        self.active = false;
        debug!("portal {:?} placed at {:.2} facing {:?}", portal.color, pos, direction);
    }

    /// Axis and outward normal sign of the face crossed between the previous
    /// and current position (slab entry). Falls back to the face opposing the
    /// dominant travel axis when the segment started inside the wall.
    fn entry_face(&self, wall: &Aabb) -> (usize, f32) {
        let delta = self.position - self.prev_position;
        let mut best: Option<(usize, f32)> = None;

        for axis in 0..3 {
            let d = delta[axis];
            if d.abs() < 1e-6 {
                continue;
            }
            let plane = if d > 0.0 { wall.min[axis] } else { wall.max[axis] };
            let t = (plane - self.prev_position[axis]) / d;
            if (0.0..=1.0).contains(&t) && best.is_none_or(|(_, bt)| t > bt) {
                best = Some((axis, t));
            }
        }

        let axis = match best {
            Some((axis, _)) => axis,
            None => {
                let a = self.direction.abs();
                if a.x >= a.y && a.x >= a.z {
                    0
                } else if a.y >= a.z {
                    1
                } else {
                    2
                }
            }
        };

        (axis, -self.direction[axis].signum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::BoxMap;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn new_shot_is_inactive() {
        let s = Shot::new(PortalColor::Blue);
        assert!(!s.active);
    }

    #[test]
    fn direction_follows_view_rotation() {
        assert!(approx(Shot::direction_from(0.0, 0.0), Vec3::NEG_Z));
        assert!(approx(
            Shot::direction_from(0.0, std::f32::consts::FRAC_PI_2),
            Vec3::NEG_X
        ));
        let up = Shot::direction_from(1.0, 0.0);
        assert!(up.y > 0.8);
        assert!((up.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn update_advances_along_direction() {
        let mut s = Shot::new(PortalColor::Orange);
        s.shoot(Vec3::new(0.0, 1.7, 0.0), 0.0, 0.0);
        assert!(s.update(0.1, &BoxMap::new(Vec::new())).is_none());
        assert!(s.active);
        assert!(approx(s.position, Vec3::new(0.0, 1.7, -SHOT_SPEED * 0.1)));
    }

    #[test]
    fn shot_expires_after_lifetime() {
        let mut s = Shot::new(PortalColor::Blue);
        let open = BoxMap::new(Vec::new());
        s.shoot(Vec3::ZERO, 0.0, 0.0);
        for _ in 0..((SHOT_LIFETIME / 0.5) as usize) {
            s.update(0.5, &open);
            assert!(s.active);
        }
        s.update(0.5, &open);
        assert!(!s.active);
    }

    #[test]
    fn place_portal_on_struck_face() {
        // Wand vor dem Spieler bei z in [-6, -5]
        let wall = Aabb::new(Vec3::new(-2.0, 0.0, -6.0), Vec3::new(2.0, 3.0, -5.0));
        let mut s = Shot::new(PortalColor::Blue);
        let mut portal = Portal::new(PortalColor::Blue);

        s.shoot(Vec3::new(0.5, 1.7, -4.5), 0.0, 0.0);
        let hit = s.update(0.04, &BoxMap::new(vec![wall]));
        assert_eq!(hit, Some(wall));
        assert!(wall.contains_point(s.position));

        s.place_portal(&wall, &mut portal);
        assert!(!s.active);
        assert!(portal.active);
        assert_eq!(portal.direction, PortalDirection::Back);
        assert!(approx(portal.position, Vec3::new(0.0, 1.5, -5.0)));
    }

    #[test]
    fn entry_face_uses_segment_not_dominant_axis() {
        // Flacher Schuss von oben auf einen Block: Eintritt durch die Oberseite.
        let block = Aabb::new(Vec3::new(-1.0, 0.0, -10.0), Vec3::new(1.0, 1.0, 0.0));
        let mut s = Shot::new(PortalColor::Orange);
        let mut portal = Portal::new(PortalColor::Orange);

        s.shoot(Vec3::new(0.0, 1.1, -1.0), -0.3, 0.0);
        assert_eq!(s.update(0.05, &BoxMap::new(vec![block])), Some(block));
        assert!(block.contains_point(s.position));

        s.place_portal(&block, &mut portal);
        assert_eq!(portal.direction, PortalDirection::Up);
        assert!(approx(portal.position, Vec3::new(0.0, 1.0, -5.0)));
    }

    #[test]
    fn fast_shot_stops_in_thin_slab() {
        // 0.5 dicke Platte, ein Frame bewegt den Schuss 1.5 weit
        let slab = Aabb::new(Vec3::new(-5.0, -0.5, -5.0), Vec3::new(5.0, 0.0, 5.0));
        let mut s = Shot::new(PortalColor::Blue);
        let mut portal = Portal::new(PortalColor::Blue);

        s.shoot(Vec3::new(0.0, 0.2, 0.0), -std::f32::consts::FRAC_PI_2, 0.0);
        let hit = s.update(0.05, &BoxMap::new(vec![slab]));
        assert_eq!(hit, Some(slab));
        assert!(s.position.y < 0.0 && s.position.y >= -0.5);

        s.place_portal(&slab, &mut portal);
        assert_eq!(portal.direction, PortalDirection::Up);
    }

    #[test]
    fn shot_starting_inside_wall_uses_travel_axis() {
        let wall = Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let mut s = Shot::new(PortalColor::Blue);
        let mut portal = Portal::new(PortalColor::Blue);

        s.shoot(Vec3::ZERO, 0.0, std::f32::consts::FRAC_PI_2);
        s.place_portal(&wall, &mut portal);
        assert_eq!(portal.direction, PortalDirection::Right);
        assert!(approx(portal.position, Vec3::new(1.0, 0.0, 0.0)));
    }
}
