use crate::geometry::*;
use crate::materials::Material;
use crate::parsing::texture::{parse_texture, TextureData};
use crate::parsing::{Point3Data, Vec3Data};

use serde::{Deserialize, Serialize};

use std::collections::HashMap;

use anyhow::Context;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SphereData {
    pub center: Point3Data,
    pub radius: f32,
    pub texture: TextureData,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlaneData {
    pub normal: Vec3Data,
    pub distance: f32,
    pub texture: TextureData,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "type")]
pub enum ShapeData {
    Sphere(SphereData),
    Plane(PlaneData),
}

pub fn parse_shape(
    data: ShapeData,
    materials: &HashMap<String, Material>,
    shape_id: usize,
) -> anyhow::Result<Shape> {
    let shape: Shape = match data {
        ShapeData::Sphere(data) => {
            let texture = parse_texture(data.texture, materials)
                .with_context(|| format!("in sphere #{}", shape_id))?;
            Sphere::new(data.radius, data.center.into(), texture).into()
        }
        ShapeData::Plane(data) => {
            let texture = parse_texture(data.texture, materials)
                .with_context(|| format!("in plane #{}", shape_id))?;
            Plane::new(data.normal.into(), data.distance, texture).into()
        }
    };
    debug!("parsed shape #{}: {:?}", shape_id, shape);
    Ok(shape)
}
