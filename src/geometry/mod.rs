mod plane;
mod sphere;

pub use plane::Plane;
pub use sphere::Sphere;

use crate::hittable::{Hits, Hittable};
use crate::math::*;

#[derive(Copy, Clone, Debug)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
}

impl From<Sphere> for Shape {
    fn from(data: Sphere) -> Self {
        Shape::Sphere(data)
    }
}

impl From<Plane> for Shape {
    fn from(data: Plane) -> Self {
        Shape::Plane(data)
    }
}

impl Hittable for Shape {
    fn intersect(&self, r: Ray) -> Hits {
        match self {
            Shape::Sphere(sphere) => sphere.intersect(r),
            Shape::Plane(plane) => plane.intersect(r),
        }
    }
}
