use std::ops::{Add, Div, Mul, Neg, Sub};

/// Absolute tolerance used for every approximate comparison in the crate.
pub const EPSILON: f64 = 1e-5;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

/// A location in 3-space (homogeneous w = 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A direction or displacement (homogeneous w = 0).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point { x, y, z }
    }

    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn approx_eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y) && approx_eq(self.z, other.z)
    }
}

impl Vector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Caller must not pass a zero vector; the result would be NaN.
    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn reflect(&self, normal: &Self) -> Self {
        *self - *normal * (2.0 * self.dot(normal))
    }

    pub fn approx_eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y) && approx_eq(self.z, other.z)
    }
}

impl Sub for Point {
    type Output = Vector;
    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;
    fn sub(self, rhs: Vector) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add<Vector> for Point {
    type Output = Point;
    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Add<Point> for Vector {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        rhs + self
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Vector {
        rhs * self
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    fn div(self, rhs: f64) -> Vector {
        Vector::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_arithmetic() {
        let p = Point::new(3.0, 2.0, 1.0);
        let q = Point::new(5.0, 6.0, 7.0);
        let v = Vector::new(5.0, 6.0, 7.0);

        let d: Vector = p - q;
        assert_eq!(d, Vector::new(-2.0, -4.0, -6.0));
        let moved: Point = p - v;
        assert_eq!(moved, Point::new(-2.0, -4.0, -6.0));
        let sum: Vector = v + Vector::new(1.0, 1.0, 1.0);
        assert_eq!(sum, Vector::new(6.0, 7.0, 8.0));
        let from_vector: Point = v + p;
        assert_eq!(from_vector, Point::new(8.0, 8.0, 8.0));
        assert_eq!(p + v, v + p);
    }

    #[test]
    fn scalar_ops() {
        let v = Vector::new(1.0, -2.0, 3.0);
        assert_eq!(v * 3.5, Vector::new(3.5, -7.0, 10.5));
        assert_eq!(0.5 * v, Vector::new(0.5, -1.0, 1.5));
        assert_eq!(v / 2.0, Vector::new(0.5, -1.0, 1.5));
        assert_eq!(-v, Vector::new(-1.0, 2.0, -3.0));
    }

    #[test]
    fn magnitude_and_normalize() {
        assert_eq!(Vector::new(0.0, 1.0, 0.0).magnitude(), 1.0);
        assert_eq!(Vector::new(1.0, 2.0, 3.0).magnitude(), 14f64.sqrt());
        assert_eq!(Vector::new(-1.0, -2.0, -3.0).magnitude(), 14f64.sqrt());
        assert_eq!(Vector::new(4.0, 0.0, 0.0).normalize(), Vector::new(1.0, 0.0, 0.0));

        let n = Vector::new(1.0, 2.0, 3.0).normalize();
        assert!(n.approx_eq(&Vector::new(0.26726, 0.53452, 0.80178)));
        assert!(approx_eq(n.magnitude(), 1.0));
    }

    #[test]
    fn zero_vector_normalizes_to_nan() {
        let n = Vector::zero().normalize();
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
    }

    #[test]
    fn dot_and_cross() {
        let a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(2.0, 3.0, 4.0);
        assert_eq!(a.dot(&b), 20.0);
        assert_eq!(a.cross(&b), Vector::new(-1.0, 2.0, -1.0));
        assert_eq!(b.cross(&a), Vector::new(1.0, -2.0, 1.0));
    }

    #[test]
    fn reflect() {
        let v = Vector::new(1.0, -1.0, 0.0);
        let n = Vector::new(0.0, 1.0, 0.0);
        assert_eq!(v.reflect(&n), Vector::new(1.0, 1.0, 0.0));

        let v = Vector::new(0.0, -1.0, 0.0);
        let h = 2f64.sqrt() / 2.0;
        let n = Vector::new(h, h, 0.0);
        assert!(v.reflect(&n).approx_eq(&Vector::new(1.0, 0.0, 0.0)));
    }
}
