use crate::light::Light;
use crate::parsing::{ColorData, Point3Data, Vec3Data};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
#[serde(tag = "type")]
pub enum LightData {
    Directional { direction: Vec3Data, color: ColorData },
    Spot { position: Point3Data, color: ColorData },
}

impl From<LightData> for Light {
    fn from(data: LightData) -> Self {
        match data {
            LightData::Directional { direction, color } => Light::Directional {
                direction: direction.into(),
                color: color.into(),
            },
            LightData::Spot { position, color } => Light::Spot {
                position: position.into(),
                color: color.into(),
            },
        }
    }
}
