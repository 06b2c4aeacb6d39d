mod view;

pub use view::View;

use crate::math::*;

use serde::Deserialize;

/// How points on the image plane turn into primary rays.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum Projection {
    #[default]
    Perspective,
    Parallel,
}

impl Projection {
    pub fn project(&self, view: &View, point: Point3) -> Ray {
        match self {
            Projection::Perspective => perspective_projection(view, point),
            Projection::Parallel => parallel_projection(view, point),
        }
    }
}

/// Ray from the camera position through `point`.
pub fn perspective_projection(view: &View, point: Point3) -> Ray {
    Ray::new(view.position, (point - view.position).normalized())
}

/// Ray starting at `point` itself, parallel to the view direction.
pub fn parallel_projection(view: &View, point: Point3) -> Ray {
    Ray::new(point, view.direction())
}
