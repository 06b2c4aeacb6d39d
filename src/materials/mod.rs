use crate::math::RGBColor;

use serde::{Deserialize, Serialize};

/// Surface response at a single point.
///
/// `reflectivity` and `diffuseness` are independent and need not sum to 1.
/// Shading scales both the direct term and the mirrored term by `diffuseness`;
/// `reflectivity` is carried along for scene authors but does not enter the shading math.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub color: RGBColor,
    pub reflectivity: f32,
    pub diffuseness: f32,
}

impl Material {
    pub const fn new(color: RGBColor, reflectivity: f32, diffuseness: f32) -> Self {
        Material {
            color,
            reflectivity,
            diffuseness,
        }
    }

    pub const fn matte(color: RGBColor) -> Self {
        Material::new(color, 0.0, 1.0)
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::matte(RGBColor::WHITE)
    }
}
