use super::Vec2D;

use crate::math::RGBColor;
use crate::parsing::config::RenderSettings;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

pub fn to_image(film: &Vec2D<RGBColor>) -> image::RgbImage {
    let mut img: image::RgbImage = image::ImageBuffer::new(film.width as u32, film.height as u32);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let color = film.at(x as usize, y as usize).clamp();
        *pixel = image::Rgb(color.to_rgb8());
    }
    img
}

pub fn output_path(settings: &RenderSettings) -> PathBuf {
    let filename = settings.filename.as_deref().unwrap_or("beauty");
    PathBuf::from("output").join(format!("{}.{}", filename, settings.output_format.extension()))
}

/// Quantizes the film to 8 bits per channel and writes it next to the other renders.
pub fn output_film(settings: &RenderSettings, film: &Vec2D<RGBColor>) -> anyhow::Result<()> {
    let path = output_path(settings);
    write_image(film, &path)
}

pub fn write_image(film: &Vec2D<RGBColor>, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory {}", parent.display()))?;
    }
    to_image(film)
        .save(path)
        .with_context(|| format!("failed to write image to {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::config::{OutputFormat, Resolution};

    #[test]
    fn test_to_image_preserves_raster_order() {
        let mut film = Vec2D::new(2, 2, RGBColor::BLACK);
        film.write_at(1, 0, RGBColor::new(1.0, 0.0, 0.0));
        film.write_at(0, 1, RGBColor::new(2.0, 0.5, -1.0));
        let img = to_image(&film);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0]);
        // out of range channels are clamped before quantizing
        assert_eq!(img.get_pixel(0, 1).0, [255, 128, 0]);
    }

    #[test]
    fn test_output_path() {
        let mut settings = RenderSettings {
            filename: None,
            resolution: Resolution {
                width: 1,
                height: 1,
            },
            threads: None,
            projection: Default::default(),
            output_format: OutputFormat::Png,
        };
        assert_eq!(output_path(&settings), PathBuf::from("output/beauty.png"));
        settings.filename = Some(String::from("scene"));
        settings.output_format = OutputFormat::Ppm;
        assert_eq!(output_path(&settings), PathBuf::from("output/scene.ppm"));
    }

    #[test]
    fn test_write_image() {
        let film = Vec2D::new(3, 2, RGBColor::new(0.2, 0.4, 0.6));
        let path = std::env::temp_dir()
            .join("rust_raytracer_test")
            .join("film.ppm");
        write_image(&film, &path).unwrap();
        let written = image::open(&path).unwrap().to_rgb8();
        assert_eq!(written.dimensions(), (3, 2));
        assert_eq!(
            written.get_pixel(2, 1).0,
            RGBColor::new(0.2, 0.4, 0.6).to_rgb8()
        );
        fs::remove_file(&path).unwrap();
    }
}
