use crate::camera::Projection;

use serde::Deserialize;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

#[derive(Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Ppm,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Ppm => "ppm",
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct RenderSettings {
    pub filename: Option<String>,
    pub resolution: Resolution,
    pub threads: Option<u16>,
    #[serde(default)]
    pub projection: Projection,
    #[serde(default)]
    pub output_format: OutputFormat,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    pub default_scene_file: Option<String>,
    pub render_settings: Vec<RenderSettings>,
}

#[derive(Clone, Debug)]
pub struct Config {
    // None renders the built in reference scene
    pub scene_file: Option<String>,
    pub render_settings: Vec<RenderSettings>,
}

impl From<TOMLConfig> for Config {
    fn from(data: TOMLConfig) -> Self {
        Config {
            scene_file: data.default_scene_file,
            render_settings: data.render_settings,
        }
    }
}

impl Config {
    /// Largest thread count any render asked for, falling back to one per core.
    pub fn max_threads(&self) -> usize {
        self.render_settings
            .iter()
            .filter_map(|settings| settings.threads)
            .map(|threads| threads as usize)
            .max()
            .unwrap_or_else(num_cpus::get)
            .max(1)
    }
}
