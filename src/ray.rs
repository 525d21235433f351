use crate::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vector,
}

impl Ray {
    pub fn new(origin: Point, direction: Vector) -> Self {
        Ray { origin, direction }
    }

    pub fn position(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }

    /// The direction goes through the matrix as a vector, so translation leaves it alone.
    pub fn transform(&self, m: &Matrix) -> Result<Ray> {
        Ok(Ray::new(
            m.multiply_tuple(&self.origin)?,
            m.multiply_tuple(&self.direction)?,
        ))
    }
}

#[test]
fn position() {
    let r = Ray::new(Point::new(2.0, 3.0, 4.0), Vector::new(1.0, 0.0, 0.0));
    assert_eq!(r.position(0.0), Point::new(2.0, 3.0, 4.0));
    assert_eq!(r.position(1.0), Point::new(3.0, 3.0, 4.0));
    assert_eq!(r.position(-1.0), Point::new(1.0, 3.0, 4.0));
    assert_eq!(r.position(2.5), Point::new(4.5, 3.0, 4.0));
}

#[test]
fn transform() {
    let r = Ray::new(Point::new(1.0, 2.0, 3.0), Vector::new(0.0, 1.0, 0.0));

    let moved = r.transform(&Matrix::translation(3.0, 4.0, 5.0)).unwrap();
    assert_eq!(moved.origin, Point::new(4.0, 6.0, 8.0));
    assert_eq!(moved.direction, Vector::new(0.0, 1.0, 0.0));

    let scaled = r.transform(&Matrix::scaling(2.0, 3.0, 4.0)).unwrap();
    assert_eq!(scaled.origin, Point::new(2.0, 6.0, 12.0));
    assert_eq!(scaled.direction, Vector::new(0.0, 3.0, 0.0));

    // the source ray is untouched
    assert_eq!(r.origin, Point::new(1.0, 2.0, 3.0));
    assert!(r.transform(&Matrix::identity_of(2)).is_err());
}
