use crate::hittable::{closest, Hittable, Intersection};
use crate::integrator::Integrator;
use crate::light::Light;
use crate::math::*;
use crate::world::World;

/// Bounce depth at which reflections stop being traced.
/// A pixel therefore costs at most three ray casts, the primary ray plus two bounces.
pub const MAX_DEPTH: u8 = 2;

/// Direct diffuse lighting with hard shadows plus depth limited mirror reflections.
pub struct WhittedIntegrator<'a> {
    pub world: &'a World,
}

impl<'a> WhittedIntegrator<'a> {
    pub fn new(world: &'a World) -> Self {
        WhittedIntegrator { world }
    }
}

impl Integrator for WhittedIntegrator<'_> {
    fn color(&self, camera_ray: Ray) -> RGBColor {
        raytrace(0, camera_ray, self.world)
    }
}

/// Color seen along `ray`, or the background when it escapes the scene.
pub fn raytrace(depth: u8, ray: Ray, world: &World) -> RGBColor {
    let hits = world.intersect(ray);
    match closest(&hits) {
        Some(intersection) => overall_lighting(depth, &intersection, world),
        None => world.background,
    }
}

/// Whether nothing sits between `point` and `light_position`.
pub fn is_lit(point: Point3, light_position: Point3, world: &World) -> bool {
    let to_light = light_position - point;
    let distance = to_light.norm();
    let shadow_ray = Ray::new(point, to_light.normalized());
    world
        .intersect(shadow_ray)
        .iter()
        .all(|(time, _)| *time >= distance)
}

/// Lambertian factor for light travelling along `light_direction` onto a surface with `normal`.
pub fn diffuse_coefficient(light_direction: Vec3, normal: Vec3) -> f32 {
    (-(light_direction.normalized() * normal.normalized())).max(0.0)
}

pub fn local_light(intersection: &Intersection, light: &Light, world: &World) -> RGBColor {
    let material = intersection.material;
    let diffuse = |light_direction: Vec3, color: RGBColor| {
        material.color.combine(color)
            * (diffuse_coefficient(light_direction, intersection.normal) * material.diffuseness)
    };
    match *light {
        Light::Directional { direction, color } => diffuse(direction, color),
        Light::Spot { position, color } => {
            if is_lit(intersection.point, position, world) {
                diffuse(intersection.point - position, color)
            } else {
                RGBColor::BLACK
            }
        }
    }
}

/// Mirror contribution, traced one bounce deeper.
pub fn reflected_ray(depth: u8, intersection: &Intersection, world: &World) -> RGBColor {
    let diffuseness = intersection.material.diffuseness;
    if diffuseness == 0.0 {
        return RGBColor::BLACK;
    }
    let normal = intersection.normal;
    let incoming = -intersection.ray.direction;
    let direction = 2.0 * (normal * incoming) * normal - incoming;
    let bounce = Ray::new(intersection.point, direction);
    raytrace(depth + 1, bounce, world) * diffuseness
}

/// Ambient plus direct light from every light, plus reflections while `depth < MAX_DEPTH`.
pub fn overall_lighting(depth: u8, intersection: &Intersection, world: &World) -> RGBColor {
    let local: RGBColor = world
        .lights
        .iter()
        .map(|light| local_light(intersection, light, world))
        .sum();
    let global = if depth < MAX_DEPTH {
        reflected_ray(depth, intersection, world)
    } else {
        RGBColor::BLACK
    };
    (world.ambient + local + global).clamp()
}
