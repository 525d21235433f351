use crate::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Point,
    pub intensity: RGB,
}

impl PointLight {
    pub fn new(position: Point, intensity: RGB) -> Self {
        PointLight {
            position,
            intensity,
        }
    }
}
