use crate::geom::Aabb;
use glam::Vec3;

/// Kollisions-Orakel der Welt. Der Player fragt nur, er verändert nichts.
pub trait Map {
    fn collides_with_wall(&self, b: &Aabb) -> bool;

    /// Wall box containing the point, if any.
    fn point_in_wall(&self, p: Vec3) -> Option<Aabb>;
}

pub struct BoxMap {
    walls: Vec<Aabb>,
}

impl BoxMap {
    pub fn new(walls: Vec<Aabb>) -> Self {
        Self { walls }
    }

    /// Testraum: 20×20 Boden, Decke, vier Wände, ein paar Säulen und Stufen.
    pub fn test_room() -> Self {
        let half = 10.0_f32;
        let height = 6.0_f32;
        let thick = 1.0_f32;

        let mut walls = vec![
            // Boden und Decke
            Aabb::new(
                Vec3::new(-half, -thick, -half),
                Vec3::new(half, 0.0, half),
            ),
            Aabb::new(
                Vec3::new(-half, height, -half),
                Vec3::new(half, height + thick, half),
            ),
            // Wände
            Aabb::new(
                Vec3::new(-half, 0.0, -half - thick),
                Vec3::new(half, height, -half),
            ),
            Aabb::new(
                Vec3::new(-half, 0.0, half),
                Vec3::new(half, height, half + thick),
            ),
            Aabb::new(
                Vec3::new(-half - thick, 0.0, -half),
                Vec3::new(-half, height, half),
            ),
            Aabb::new(
                Vec3::new(half, 0.0, -half),
                Vec3::new(half + thick, height, half),
            ),
        ];

        // Säulen
        for &(x, z) in &[(-4.0_f32, -4.0_f32), (4.0, -4.0), (-4.0, 4.0)] {
            walls.push(Aabb::new(
                Vec3::new(x - 0.75, 0.0, z - 0.75),
                Vec3::new(x + 0.75, height, z + 0.75),
            ));
        }

        // Stufen in der Ecke +X/+Z
        for i in 0..3 {
            let h = (i + 1) as f32 * 0.5;
            let x0 = 4.0 + i as f32 * 1.5;
            walls.push(Aabb::new(
                Vec3::new(x0, 0.0, 4.0),
                Vec3::new(x0 + 1.5, h, 7.0),
            ));
        }

        Self::new(walls)
    }

    pub fn walls(&self) -> &[Aabb] {
        &self.walls
    }
}

impl Map for BoxMap {
    fn collides_with_wall(&self, b: &Aabb) -> bool {
        self.walls.iter().any(|w| w.intersects(b))
    }

    fn point_in_wall(&self, p: Vec3) -> Option<Aabb> {
        self.walls.iter().copied().find(|w| w.contains_point(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_standing_on_floor_is_free() {
        let map = BoxMap::test_room();
        let body = Aabb::from_center(Vec3::new(0.0, 0.9, 0.0), Vec3::new(0.5, 0.9, 0.5));
        assert!(!map.collides_with_wall(&body));

        let below = Aabb::from_center(Vec3::new(0.0, 0.8, 0.0), Vec3::new(0.5, 0.9, 0.5));
        assert!(map.collides_with_wall(&below));
    }

    #[test]
    fn point_in_wall_reports_the_containing_box() {
        let map = BoxMap::new(vec![
            Aabb::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0)),
            Aabb::new(Vec3::new(5.0, 0.0, 0.0), Vec3::new(6.0, 3.0, 1.0)),
        ]);

        let hit = map.point_in_wall(Vec3::new(5.5, 2.0, 0.5));
        assert_eq!(hit, Some(map.walls()[1]));
        assert_eq!(map.point_in_wall(Vec3::new(3.0, 0.5, 0.5)), None);
    }

    #[test]
    fn empty_map_never_collides() {
        let map = BoxMap::new(Vec::new());
        assert!(!map.collides_with_wall(&Aabb::new(Vec3::splat(-100.0), Vec3::splat(100.0))));
        assert!(map.point_in_wall(Vec3::ZERO).is_none());
    }
}
