use crate::materials::Material;
use crate::math::Point3;

/// Procedural texture: maps a point on a surface to the material found there.
#[derive(Copy, Clone, Debug)]
pub enum Texture {
    Solid(Material),
    /// 3d checkerboard made of axis aligned cubes with edge length `size`.
    Checkerboard {
        even: Material,
        odd: Material,
        size: f32,
    },
    Function(fn(Point3) -> Material),
}

impl Texture {
    pub fn material_at(&self, point: Point3) -> Material {
        match self {
            Texture::Solid(material) => *material,
            Texture::Checkerboard { even, odd, size } => {
                let cell = (point.x / size).floor()
                    + (point.y / size).floor()
                    + (point.z / size).floor();
                if (cell as i64).rem_euclid(2) == 0 {
                    *even
                } else {
                    *odd
                }
            }
            Texture::Function(f) => f(point),
        }
    }
}

impl From<Material> for Texture {
    fn from(material: Material) -> Self {
        Texture::Solid(material)
    }
}
