use glam::Vec3;

/// Axis-aligned box given by its min and max corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Overlap test with open intervals: boxes that only touch do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    pub fn contains_point(&self, p: Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_boxes_do_not_intersect() {
        let floor = Aabb::new(Vec3::new(-5.0, -1.0, -5.0), Vec3::new(5.0, 0.0, 5.0));
        let body = Aabb::from_center(Vec3::new(0.0, 0.9, 0.0), Vec3::new(0.5, 0.9, 0.5));
        assert!(!floor.intersects(&body));

        let sunk = Aabb::from_center(Vec3::new(0.0, 0.89, 0.0), Vec3::new(0.5, 0.9, 0.5));
        assert!(floor.intersects(&sunk));
        assert!(sunk.intersects(&floor));
    }

    #[test]
    fn separated_on_one_axis_is_enough() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::new(0.5, 0.5, 2.0), Vec3::new(1.5, 1.5, 3.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn point_containment_includes_faces() {
        let b = Aabb::new(Vec3::ZERO, Vec3::new(2.0, 1.0, 1.0));
        assert!(b.contains_point(Vec3::new(1.0, 0.5, 0.5)));
        assert!(b.contains_point(Vec3::new(2.0, 1.0, 1.0)));
        assert!(!b.contains_point(Vec3::new(2.01, 0.5, 0.5)));
        assert_eq!(b.center(), Vec3::new(1.0, 0.5, 0.5));
    }
}
