mod naive;
mod output;
mod vec2d;

pub use naive::NaiveRenderer;
pub use output::{output_film, to_image};
pub use vec2d::Vec2D;

use crate::camera::{Projection, View};
use crate::integrator::{Integrator, WhittedIntegrator};
use crate::math::RGBColor;
use crate::parsing::config::Config;
use crate::world::World;

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

pub trait Renderer {
    fn render(&self, world: World, view: View, config: &Config) -> anyhow::Result<()>;
}

/// Traces one primary ray per pixel and returns the colors in raster order.
pub fn render(
    view: &View,
    width: usize,
    height: usize,
    world: &World,
    projection: Projection,
) -> Vec<RGBColor> {
    let integrator = WhittedIntegrator::new(world);
    trace_pixels(&integrator, view, width, height, projection, &AtomicUsize::new(0))
}

/// Pixels are independent, so they're traced in parallel and reassembled in raster order.
/// `pixel_count` is bumped once per finished pixel.
pub fn trace_pixels<I: Integrator>(
    integrator: &I,
    view: &View,
    width: usize,
    height: usize,
    projection: Projection,
    pixel_count: &AtomicUsize,
) -> Vec<RGBColor> {
    view.pixel_grid(width, height)
        .into_par_iter()
        .map(|point| {
            let color = integrator.color(projection.project(view, point));
            debug_assert!(
                color.r.is_finite() && color.g.is_finite() && color.b.is_finite(),
                "{:?} resulted in {:?}",
                point,
                color
            );
            pixel_count.fetch_add(1, Ordering::Relaxed);
            color
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vec3};

    fn wide_view() -> View {
        View::new(
            Point3::new(0.0, 0.0, -100.0),
            1.0,
            Point3::new(0.0, 0.0, 100.0),
            Vec3::new(0.0, -1.0, 0.0),
        )
    }

    #[test]
    fn test_render_length() {
        let colors = render(
            &View::reference(),
            7,
            3,
            &World::reference(),
            Projection::Perspective,
        );
        assert_eq!(colors.len(), 21);
    }

    #[test]
    fn test_render_reference_scene_small() {
        let world = World::reference();
        let colors = render(&wide_view(), 4, 4, &world, Projection::Perspective);
        assert_eq!(colors.len(), 16);

        // the top three rows look up or straight ahead and miss everything
        for (index, color) in colors[..12].iter().enumerate() {
            assert_eq!(*color, world.background, "pixel {}", index);
        }
        // the bottom row only sees the red ground: ambient grey plus a red tint
        for (index, color) in colors[12..].iter().enumerate() {
            assert!((color.g - 0.1).abs() < 1e-5, "pixel {} {:?}", index, color);
            assert!((color.b - 0.1).abs() < 1e-5, "pixel {} {:?}", index, color);
            assert!(color.r > 0.1, "pixel {} {:?}", index, color);
        }
    }

    #[test]
    fn test_render_counts_pixels() {
        let world = World::reference();
        let integrator = WhittedIntegrator::new(&world);
        let count = AtomicUsize::new(0);
        let colors = trace_pixels(
            &integrator,
            &View::reference(),
            5,
            4,
            Projection::Parallel,
            &count,
        );
        assert_eq!(colors.len(), 20);
        assert_eq!(count.load(Ordering::Relaxed), 20);
    }

    #[test]
    fn test_render_output_clamped() {
        let colors = render(
            &View::reference(),
            16,
            16,
            &World::reference(),
            Projection::Perspective,
        );
        for color in colors {
            assert_eq!(color, color.clamp());
        }
    }
}
