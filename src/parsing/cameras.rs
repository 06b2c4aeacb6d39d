use crate::camera::View;
use crate::parsing::{Point3Data, Vec3Data};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct CameraData {
    pub position: Point3Data,
    pub view_distance: f32,
    pub look_at: Point3Data,
    pub up: Option<Vec3Data>, // defaults to 0,-1,0 since y grows downward
}

impl From<CameraData> for View {
    fn from(data: CameraData) -> Self {
        View::new(
            data.position.into(),
            data.view_distance,
            data.look_at.into(),
            data.up.unwrap_or([0.0, -1.0, 0.0]).into(),
        )
    }
}
