use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Light {
    /// Light arriving from infinitely far away along `direction`. Never shadowed.
    Directional { direction: Vec3, color: RGBColor },
    /// Point light at `position`, shadow tested against every shape.
    Spot { position: Point3, color: RGBColor },
}

impl Light {
    pub fn color(&self) -> RGBColor {
        match self {
            Light::Directional { color, .. } | Light::Spot { color, .. } => *color,
        }
    }
}
