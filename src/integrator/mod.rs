mod whitted;

pub use whitted::{
    diffuse_coefficient, is_lit, local_light, overall_lighting, raytrace, reflected_ray,
    WhittedIntegrator, MAX_DEPTH,
};

use crate::math::*;

pub trait Integrator: Sync + Send {
    fn color(&self, camera_ray: Ray) -> RGBColor;
}
