use crate::materials::Material;
use crate::math::*;

use ordered_float::OrderedFloat;
use smallvec::SmallVec;

/// Hits at or below this time are dropped, so rays leaving a surface don't hit it again.
pub const INTERSECTION_EPSILON: f32 = 0.001;

#[derive(Copy, Clone, Debug)]
pub struct Intersection {
    pub normal: Vec3,
    pub point: Point3,
    pub ray: Ray,
    pub material: Material,
}

impl Intersection {
    pub fn new(normal: Vec3, point: Point3, ray: Ray, material: Material) -> Self {
        Intersection {
            normal,
            point,
            ray,
            material,
        }
    }
}

/// `(time, intersection)` pairs produced by a single shape, in no particular order.
pub type Hits = SmallVec<[(f32, Intersection); 2]>;

pub trait Hittable {
    fn intersect(&self, ray: Ray) -> Hits;
}

/// Earliest hit in `hits`, or `None` when there is nothing to pick from.
pub fn closest<'a, I>(hits: I) -> Option<Intersection>
where
    I: IntoIterator<Item = &'a (f32, Intersection)>,
{
    hits.into_iter()
        .min_by_key(|(time, _)| OrderedFloat(*time))
        .map(|(_, intersection)| *intersection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest() {
        let ray = Ray::new(Point3::ORIGIN, Vec3::Z);
        let material = Material::default();
        let hits = vec![
            (5.0, Intersection::new(-Vec3::Z, Point3::new(0.0, 0.0, 5.0), ray, material)),
            (2.0, Intersection::new(-Vec3::Z, Point3::new(0.0, 0.0, 2.0), ray, material)),
            (9.0, Intersection::new(-Vec3::Z, Point3::new(0.0, 0.0, 9.0), ray, material)),
        ];
        let nearest = closest(&hits).unwrap();
        assert_eq!(nearest.point, Point3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_closest_empty() {
        let hits: Vec<(f32, Intersection)> = Vec::new();
        assert!(closest(&hits).is_none());
    }
}
