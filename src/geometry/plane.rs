use crate::hittable::{Hits, Hittable, Intersection, INTERSECTION_EPSILON};
use crate::math::*;
use crate::texture::Texture;

/// Infinite plane `{p : normal * p == distance}`.
#[derive(Copy, Clone, Debug)]
pub struct Plane {
    pub normal: Vec3,
    pub distance: f32,
    pub texture: Texture,
}

impl Plane {
    pub fn new(normal: Vec3, distance: f32, texture: Texture) -> Plane {
        Plane {
            normal: normal.normalized(),
            distance,
            texture,
        }
    }
}

impl Hittable for Plane {
    fn intersect(&self, r: Ray) -> Hits {
        let mut hits = Hits::new();
        let normal = self.normal.normalized();
        let vd = normal * r.direction;
        if vd == 0.0 {
            // parallel ray, will never intersect
            return hits;
        }
        let time = (self.distance - normal * r.origin) / vd;
        if time <= INTERSECTION_EPSILON {
            return hits;
        }
        let point = r.point_at_parameter(time);
        // face the incoming ray
        let hit_normal = if vd > 0.0 { -normal } else { normal };
        let material = self.texture.material_at(point);
        hits.push((time, Intersection::new(hit_normal, point, r, material)));
        hits
    }
}
