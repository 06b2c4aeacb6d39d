mod reference;

use crate::geometry::Shape;
use crate::hittable::{Hits, Hittable};
use crate::light::Light;
use crate::math::*;

/// Everything the tracer reads while shading. Built once, read-only during a render.
#[derive(Clone, Debug)]
pub struct World {
    pub shapes: Vec<Shape>,
    pub lights: Vec<Light>,
    pub ambient: RGBColor,
    pub background: RGBColor,
}

impl World {
    pub fn new(
        shapes: Vec<Shape>,
        lights: Vec<Light>,
        ambient: RGBColor,
        background: RGBColor,
    ) -> Self {
        World {
            shapes,
            lights,
            ambient,
            background,
        }
    }
}

impl Hittable for World {
    // linear scan, every shape is tested against every ray
    fn intersect(&self, r: Ray) -> Hits {
        self.shapes
            .iter()
            .flat_map(|shape| shape.intersect(r))
            .collect()
    }
}
