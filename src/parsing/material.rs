use crate::materials::Material;
use crate::parsing::ColorData;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct MaterialData {
    pub color: ColorData,
    pub reflectivity: Option<f32>, // defaults to 0.0
    pub diffuseness: Option<f32>,  // defaults to 1.0
}

impl From<MaterialData> for Material {
    fn from(data: MaterialData) -> Self {
        Material::new(
            data.color.into(),
            data.reflectivity.unwrap_or(0.0),
            data.diffuseness.unwrap_or(1.0),
        )
    }
}
