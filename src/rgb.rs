use crate::math::approx_eq;
use std::ops::{Add, AddAssign, Div, Mul, Sub};

/// Unclamped linear color. Clamping happens only when an `Image` is written.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RGB {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RGB {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        RGB { r, g, b }
    }
    pub fn all(x: f64) -> Self {
        Self::new(x, x, x)
    }
    pub fn black() -> Self {
        Self::all(0.0)
    }
    pub fn white() -> Self {
        Self::all(1.0)
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    pub fn approx_eq(&self, other: &Self) -> bool {
        approx_eq(self.r, other.r) && approx_eq(self.g, other.g) && approx_eq(self.b, other.b)
    }
}

impl Default for RGB {
    fn default() -> Self {
        Self::black()
    }
}

impl<'a> Add<&'a Self> for RGB {
    type Output = Self;
    fn add(self, rhs: &'a Self) -> Self {
        RGB {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl Add for RGB {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.add(&rhs)
    }
}

impl AddAssign for RGB {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<'a> Sub<&'a Self> for RGB {
    type Output = Self;
    fn sub(self, rhs: &'a Self) -> Self {
        RGB {
            r: self.r - rhs.r,
            g: self.g - rhs.g,
            b: self.b - rhs.b,
        }
    }
}

impl Sub for RGB {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.sub(&rhs)
    }
}

// component-wise (Hadamard) product
impl<'a> Mul<&'a Self> for RGB {
    type Output = Self;
    fn mul(self, rhs: &'a Self) -> Self {
        RGB {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
        }
    }
}

impl Mul for RGB {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.mul(&rhs)
    }
}

impl Mul<f64> for RGB {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        RGB {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
        }
    }
}

impl Div<f64> for RGB {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        RGB {
            r: self.r / rhs,
            g: self.g / rhs,
            b: self.b / rhs,
        }
    }
}

#[test]
fn arithmetic() {
    let c1 = RGB::new(0.9, 0.6, 0.75);
    let c2 = RGB::new(0.7, 0.1, 0.25);
    assert!((c1 + c2).approx_eq(&RGB::new(1.6, 0.7, 1.0)));
    assert!((c1 - c2).approx_eq(&RGB::new(0.2, 0.5, 0.5)));
    assert!((RGB::new(0.2, 0.3, 0.4) * 2.0).approx_eq(&RGB::new(0.4, 0.6, 0.8)));
    assert!(
        (RGB::new(1.0, 0.2, 0.4) * RGB::new(0.9, 1.0, 0.1)).approx_eq(&RGB::new(0.9, 0.2, 0.04))
    );
    assert!((RGB::new(1.0, 2.0, 3.0) / 2.0).approx_eq(&RGB::new(0.5, 1.0, 1.5)));

    let mut acc = RGB::black();
    acc += RGB::all(0.75);
    acc += RGB::all(0.75);
    assert_eq!(acc, RGB::all(1.5));
}

#[test]
fn finiteness() {
    assert!(RGB::all(3.0).is_finite());
    assert!(!RGB::new(0.0, std::f64::NAN, 0.0).is_finite());
    assert!(!RGB::new(std::f64::INFINITY, 0.0, 0.0).is_finite());
}
