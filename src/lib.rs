pub mod error;
pub mod example_scenes;
pub mod image;
pub mod intersection;
pub mod light;
pub mod material;
pub mod math;
pub mod matrix;
pub mod ray;
pub mod renderer;
pub mod rgb;
pub mod shape;

pub use error::{Error, Result};
pub use intersection::{Intersection, Intersections};
pub use light::PointLight;
pub use material::Material;
pub use math::{Point, Vector, EPSILON};
pub use matrix::{Homogeneous, Matrix};
pub use ray::Ray;
pub use rgb::RGB;
pub use shape::Sphere;
