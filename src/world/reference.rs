use super::World;
use crate::camera::View;
use crate::geometry::{Plane, Sphere};
use crate::light::Light;
use crate::materials::Material;
use crate::math::*;
use crate::texture::Texture;

const SHINY_RED: Material = Material::new(RGBColor::new(1.0, 0.0, 0.0), 0.7, 0.6);
const SEMI_SHINY_GREEN: Material = Material::new(RGBColor::new(0.0, 1.0, 0.0), 0.3, 0.4);
const CHECKER_BLACK: Material = Material::new(RGBColor::BLACK, 0.0, 0.8);
const CHECKER_WHITE: Material = Material::new(RGBColor::WHITE, 0.0, 0.8);

impl World {
    /// Red ground plane with a green sphere and a checkered sphere resting on it,
    /// lit by two near white spot lights.
    pub fn reference() -> Self {
        let checkerboard = Texture::Checkerboard {
            even: CHECKER_BLACK,
            odd: CHECKER_WHITE,
            size: 20.0,
        };
        World::new(
            vec![
                // y grows downward, so the ground sits at y = 50
                Plane::new(Vec3::new(0.0, -1.0, 0.0), -50.0, SHINY_RED.into()).into(),
                Sphere::new(
                    50.0,
                    Point3::new(-60.0, 0.0, 150.0),
                    SEMI_SHINY_GREEN.into(),
                )
                .into(),
                Sphere::new(50.0, Point3::new(60.0, 0.0, 150.0), checkerboard).into(),
            ],
            vec![
                Light::Spot {
                    position: Point3::new(-200.0, -300.0, -200.0),
                    color: RGBColor::new(0.9, 0.9, 0.9),
                },
                Light::Spot {
                    position: Point3::new(250.0, -250.0, -150.0),
                    color: RGBColor::new(0.8, 0.8, 0.8),
                },
            ],
            RGBColor::new(0.1, 0.1, 0.1),
            RGBColor::BLACK,
        )
    }
}

impl View {
    pub fn reference() -> Self {
        View::new(
            Point3::new(0.0, 0.0, -100.0),
            500.0,
            Point3::new(0.0, 0.0, 100.0),
            Vec3::new(0.0, -1.0, 0.0),
        )
    }
}
