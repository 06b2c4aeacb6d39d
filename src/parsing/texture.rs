use crate::materials::Material;
use crate::texture::Texture;

use serde::{Deserialize, Serialize};

use std::collections::HashMap;

use anyhow::anyhow;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "type")]
pub enum TextureData {
    Solid {
        material: String,
    },
    Checkerboard {
        even: String,
        odd: String,
        size: f32,
    },
}

fn lookup(materials: &HashMap<String, Material>, name: &str) -> anyhow::Result<Material> {
    materials
        .get(name)
        .copied()
        .ok_or_else(|| anyhow!("texture references unknown material \"{}\"", name))
}

pub fn parse_texture(
    data: TextureData,
    materials: &HashMap<String, Material>,
) -> anyhow::Result<Texture> {
    match data {
        TextureData::Solid { material } => Ok(Texture::Solid(lookup(materials, &material)?)),
        TextureData::Checkerboard { even, odd, size } => {
            if size <= 0.0 {
                return Err(anyhow!("checkerboard size must be positive, got {}", size));
            }
            Ok(Texture::Checkerboard {
                even: lookup(materials, &even)?,
                odd: lookup(materials, &odd)?,
                size,
            })
        }
    }
}
