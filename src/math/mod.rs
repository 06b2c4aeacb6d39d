mod color;
mod misc;
mod ray;
mod vec;

pub use color::RGBColor;
pub use misc::{quadratic_roots, Roots};
pub use ray::Ray;
pub use vec::{Point3, Vec3};
