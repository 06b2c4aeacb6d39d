pub mod cameras;
pub mod config;
pub mod lights;
pub mod material;
pub mod primitives;
pub mod texture;

use cameras::CameraData;
use config::TOMLConfig;
use lights::LightData;
use material::MaterialData;
use primitives::{parse_shape, ShapeData};

use crate::camera::View;
use crate::light::Light;
use crate::materials::Material;
use crate::world::World;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub type Vec3Data = [f32; 3];
pub type Point3Data = [f32; 3];
pub type ColorData = [f32; 3];

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SceneData {
    pub background: Option<ColorData>, // defaults to black
    pub ambient: ColorData,
    pub camera: CameraData,
    #[serde(default)]
    pub materials: HashMap<String, MaterialData>,
    #[serde(default)]
    pub lights: Vec<LightData>,
    #[serde(default)]
    pub shapes: Vec<ShapeData>,
}

pub fn load_arbitrary<T>(filepath: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    info!("loading file at {}", filepath.display());
    let input = fs::read_to_string(filepath)
        .with_context(|| format!("failed to read {}", filepath.display()))?;
    info!("done: {} bytes", input.len());
    let data: T = toml::from_str(&input)
        .with_context(|| format!("failed to parse {}", filepath.display()))?;
    Ok(data)
}

pub fn get_settings(filepath: &Path) -> anyhow::Result<TOMLConfig> {
    load_arbitrary(filepath)
}

pub fn parse_scene(scene: SceneData) -> anyhow::Result<(World, View)> {
    let materials: HashMap<String, Material> = scene
        .materials
        .into_iter()
        .map(|(name, data)| (name, data.into()))
        .collect();
    info!("parsed {} materials", materials.len());

    let shapes = scene
        .shapes
        .into_iter()
        .enumerate()
        .map(|(shape_id, data)| parse_shape(data, &materials, shape_id))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let lights: Vec<Light> = scene.lights.into_iter().map(Light::from).collect();

    if lights.is_empty() {
        warn!("the scene has no lights, only ambient light will show");
    }

    let world = World::new(
        shapes,
        lights,
        scene.ambient.into(),
        scene.background.unwrap_or([0.0; 3]).into(),
    );
    Ok((world, scene.camera.into()))
}

pub fn construct_world(scene_file: &Path) -> anyhow::Result<(World, View)> {
    let scene: SceneData = load_arbitrary(scene_file)?;
    parse_scene(scene).with_context(|| format!("invalid scene {}", scene_file.display()))
}
