use crate::hittable::{Hits, Hittable, Intersection, INTERSECTION_EPSILON};
use crate::math::*;
use crate::texture::Texture;

#[derive(Copy, Clone, Debug)]
pub struct Sphere {
    pub radius: f32,
    pub origin: Point3,
    pub texture: Texture,
}

impl Sphere {
    pub fn new(radius: f32, origin: Point3, texture: Texture) -> Sphere {
        Sphere {
            radius,
            origin,
            texture,
        }
    }
}

impl Hittable for Sphere {
    fn intersect(&self, r: Ray) -> Hits {
        let oc: Vec3 = r.origin - self.origin;
        let a = r.direction.norm_squared();
        let b = 2.0 * (r.direction * oc);
        let c = oc.norm_squared() - self.radius * self.radius;
        quadratic_roots(a, b, c)
            .into_iter()
            .filter(|&time| time > INTERSECTION_EPSILON)
            .map(|time| {
                let point = r.point_at_parameter(time);
                let normal = (point - self.origin).normalized();
                let material = self.texture.material_at(point);
                (time, Intersection::new(normal, point, r, material))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::closest;
    use crate::materials::Material;

    fn sphere() -> Sphere {
        Sphere::new(
            60.0,
            Point3::new(0.0, 0.0, 100.0),
            Material::default().into(),
        )
    }

    #[test]
    fn test_sphere_two_hits() {
        let ray = Ray::new(Point3::new(0.0, 0.0, -100.0), Vec3::Z);
        let hits = sphere().intersect(ray);
        assert_eq!(hits.len(), 2);
        let nearest = closest(&hits).unwrap();
        assert!((nearest.point.z - 40.0).abs() < 1e-3, "{:?}", nearest.point);
        assert!((nearest.normal - (-Vec3::Z)).norm() < 1e-5);
        assert_eq!(nearest.ray, ray);
    }

    #[test]
    fn test_sphere_miss() {
        let ray = Ray::new(Point3::new(0.0, 100.0, -100.0), Vec3::Z);
        assert!(sphere().intersect(ray).is_empty());
    }

    #[test]
    fn test_sphere_from_inside() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 100.0), Vec3::Z);
        let hits = sphere().intersect(ray);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].0 - 60.0).abs() < 1e-3);
    }

    #[test]
    fn test_sphere_ignores_hit_at_origin() {
        // a ray leaving the surface must not report the surface it starts on
        let ray = Ray::new(Point3::new(0.0, 0.0, 40.0), -Vec3::Z);
        assert!(sphere().intersect(ray).is_empty());
        let inward = Ray::new(Point3::new(0.0, 0.0, 40.0), Vec3::Z);
        let hits = sphere().intersect(inward);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].0 - 120.0).abs() < 1e-3);
    }
}
