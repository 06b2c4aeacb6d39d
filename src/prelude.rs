pub use rayon::prelude::*;

pub use crate::camera::{Projection, View};
pub use crate::geometry::{Plane, Shape, Sphere};
pub use crate::hittable::{closest, Hits, Hittable, Intersection, INTERSECTION_EPSILON};
pub use crate::integrator::{raytrace, Integrator, WhittedIntegrator, MAX_DEPTH};
pub use crate::light::Light;
pub use crate::materials::Material;
pub use crate::math::*;
pub use crate::renderer::{render, Vec2D};
pub use crate::texture::Texture;
pub use crate::world::World;
