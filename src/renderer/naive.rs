use super::{output_film, trace_pixels, Renderer, Vec2D};

use crate::camera::View;
use crate::integrator::WhittedIntegrator;
use crate::math::RGBColor;
use crate::parsing::config::{Config, RenderSettings};
use crate::world::World;

use std::sync::atomic::AtomicUsize;
#[cfg(feature = "pbr")]
use std::sync::atomic::Ordering;
use std::sync::Arc;
#[cfg(feature = "pbr")]
use std::thread;
#[cfg(feature = "pbr")]
use std::time::Duration;
use std::time::Instant;

#[cfg(feature = "pbr")]
use pbr::ProgressBar;

#[derive(Default)]
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }

    pub fn render_film(world: &World, view: &View, settings: &RenderSettings) -> Vec2D<RGBColor> {
        let (width, height) = (settings.resolution.width, settings.resolution.height);
        info!(
            "starting render with film resolution {}x{}, {:?} projection",
            width, height, settings.projection
        );
        let total_pixels = width * height;
        let now = Instant::now();

        let pixel_count = Arc::new(AtomicUsize::new(0));

        #[cfg(feature = "pbr")]
        let progress_thread = {
            let clone = Arc::clone(&pixel_count);
            let mut pb = ProgressBar::new(total_pixels as u64);
            thread::spawn(move || {
                let mut local_index = 0;
                while local_index < total_pixels {
                    let pixels_to_increment = clone.load(Ordering::Relaxed) - local_index;
                    pb.add(pixels_to_increment as u64);
                    local_index += pixels_to_increment;

                    thread::sleep(Duration::from_millis(250));
                }
                pb.finish();
            })
        };

        let integrator = WhittedIntegrator::new(world);
        let buffer = trace_pixels(
            &integrator,
            view,
            width,
            height,
            settings.projection,
            &pixel_count,
        );

        #[cfg(feature = "pbr")]
        {
            if let Err(panic) = progress_thread.join() {
                warn!("progress bar thread panicked: {:?}", panic);
            }
        }

        let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
        info!("took {}s to trace {} pixels", elapsed, total_pixels);
        Vec2D::from_buffer(width, height, buffer)
    }
}

impl Renderer for NaiveRenderer {
    fn render(&self, world: World, view: View, config: &Config) -> anyhow::Result<()> {
        info!(
            "rendering {} shapes lit by {} lights",
            world.shapes.len(),
            world.lights.len()
        );
        for settings in config.render_settings.iter() {
            let film = NaiveRenderer::render_film(&world, &view, settings);
            output_film(settings, &film)?;
        }
        Ok(())
    }
}
