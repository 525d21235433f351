use crate::*;
use std::fmt;
use std::ops::{Index, IndexMut};

/// A 3-tuple that can be lifted to a homogeneous 4x1 column and back.
pub trait Homogeneous: Sized {
    const W: f64;
    fn coords(&self) -> [f64; 3];
    fn from_coords(c: [f64; 3]) -> Self;
}

impl Homogeneous for Point {
    const W: f64 = 1.0;
    fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
    fn from_coords(c: [f64; 3]) -> Self {
        Point::new(c[0], c[1], c[2])
    }
}

impl Homogeneous for Vector {
    const W: f64 = 0.0;
    fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
    fn from_coords(c: [f64; 3]) -> Self {
        Vector::new(c[0], c[1], c[2])
    }
}

/// Row-major `h x w` grid of doubles.
///
/// Equality is approximate: two matrices of the same shape are equal when every
/// pair of cells differs by at most `EPSILON`.
#[derive(Clone, Debug)]
pub struct Matrix {
    w: usize,
    h: usize,
    buf: Vec<f64>,
}

impl Matrix {
    /// All rows must be non-empty and of equal length.
    pub fn new<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let h = rows.len();
        let w = rows.first().map_or(0, |r| r.as_ref().len());
        if w == 0 || rows.iter().any(|r| r.as_ref().len() != w) {
            return Err(Error::InvalidShape);
        }
        let buf = rows.iter().flat_map(|r| r.as_ref().iter().cloned()).collect();
        Ok(Matrix { w, h, buf })
    }

    pub fn zero(rows: usize, cols: usize) -> Self {
        Matrix {
            w: cols,
            h: rows,
            buf: vec![0.0; rows * cols],
        }
    }

    pub fn identity_of(order: usize) -> Self {
        let mut m = Self::zero(order, order);
        for i in 0..order {
            m[(i, i)] = 1.0;
        }
        m
    }

    pub fn width(&self) -> usize {
        self.w
    }
    pub fn height(&self) -> usize {
        self.h
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.h && col < self.w {
            Ok(row * self.w + col)
        } else {
            Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.h,
                cols: self.w,
            })
        }
    }

    fn require_square(&self) -> Result<()> {
        if self.w == self.h {
            Ok(())
        } else {
            Err(Error::NotSquare {
                rows: self.h,
                cols: self.w,
            })
        }
    }

    pub fn value_at(&self, row: usize, col: usize) -> Result<f64> {
        Ok(self.buf[self.offset(row, col)?])
    }

    pub fn set_value(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let i = self.offset(row, col)?;
        self.buf[i] = value;
        Ok(())
    }

    /// Row-by-column product `self * other`. The result is `self.height x other.width`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.w != other.h {
            return Err(Error::DimensionMismatch {
                lhs_rows: self.h,
                lhs_cols: self.w,
                rhs_rows: other.h,
                rhs_cols: other.w,
            });
        }
        let mut out = Self::zero(self.h, other.w);
        for row in 0..self.h {
            for col in 0..other.w {
                out[(row, col)] = (0..self.w).map(|k| self[(row, k)] * other[(k, col)]).sum();
            }
        }
        Ok(out)
    }

    /// Applies the matrix to a point or vector through its homogeneous column.
    /// Points carry w = 1 and are moved by translation; vectors carry w = 0 and are not.
    pub fn multiply_tuple<T: Homogeneous>(&self, t: &T) -> Result<T> {
        let [x, y, z] = t.coords();
        let column = Matrix {
            w: 1,
            h: 4,
            buf: vec![x, y, z, T::W],
        };
        if self.h < 3 {
            return Err(Error::DimensionMismatch {
                lhs_rows: self.h,
                lhs_cols: self.w,
                rhs_rows: 4,
                rhs_cols: 1,
            });
        }
        let out = self.multiply(&column)?;
        Ok(T::from_coords([out.buf[0], out.buf[1], out.buf[2]]))
    }

    pub fn transpose(&self) -> Matrix {
        let mut out = Self::zero(self.w, self.h);
        for row in 0..self.h {
            for col in 0..self.w {
                out[(col, row)] = self[(row, col)];
            }
        }
        out
    }

    pub fn scalar_multiply(&self, k: f64) -> Matrix {
        Matrix {
            w: self.w,
            h: self.h,
            buf: self.buf.iter().map(|v| v * k).collect(),
        }
    }

    pub fn identity(&self) -> Result<Matrix> {
        self.require_square()?;
        Ok(Self::identity_of(self.w))
    }

    /// Textbook Laplace expansion along row 0. Only sensible for small orders.
    pub fn determinant(&self) -> Result<f64> {
        self.require_square()?;
        Ok(self.expand())
    }

    fn expand(&self) -> f64 {
        match self.w {
            1 => self.buf[0],
            2 => self.buf[0] * self.buf[3] - self.buf[1] * self.buf[2],
            n => (0..n).map(|col| self[(0, col)] * self.signed_minor(0, col)).sum(),
        }
    }

    fn signed_minor(&self, row: usize, col: usize) -> f64 {
        let minor = self.without(row, col).expand();
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    fn without(&self, row: usize, col: usize) -> Matrix {
        let buf = (0..self.h)
            .filter(|r| *r != row)
            .flat_map(|r| {
                (0..self.w)
                    .filter(move |c| *c != col)
                    .map(move |c| (r, c))
            })
            .map(|(r, c)| self[(r, c)])
            .collect();
        Matrix {
            w: self.w - 1,
            h: self.h - 1,
            buf,
        }
    }

    pub fn submatrix(&self, row: usize, col: usize) -> Result<Matrix> {
        self.offset(row, col)?;
        if self.w < 2 || self.h < 2 {
            return Err(Error::InvalidShape);
        }
        Ok(self.without(row, col))
    }

    pub fn minor(&self, row: usize, col: usize) -> Result<f64> {
        self.require_square()?;
        self.submatrix(row, col)?.determinant()
    }

    pub fn cofactor(&self, row: usize, col: usize) -> Result<f64> {
        let minor = self.minor(row, col)?;
        Ok(if (row + col) % 2 == 0 { minor } else { -minor })
    }

    /// Exact comparison against zero; near-singular matrices count as invertible.
    pub fn is_invertible(&self) -> Result<bool> {
        Ok(self.determinant()? != 0.0)
    }

    pub fn invert(&self) -> Result<Matrix> {
        let det = self.determinant()?;
        if det == 0.0 {
            return Err(Error::NotInvertible);
        }
        if self.w == 1 {
            return Ok(Matrix {
                w: 1,
                h: 1,
                buf: vec![1.0 / det],
            });
        }
        let mut out = Self::zero(self.h, self.w);
        for row in 0..self.h {
            for col in 0..self.w {
                // transposed on write
                out[(col, row)] = self.signed_minor(row, col) / det;
            }
        }
        Ok(out)
    }

    pub fn approx_eq(&self, other: &Matrix) -> bool {
        self.w == other.w
            && self.h == other.h
            && self
                .buf
                .iter()
                .zip(other.buf.iter())
                .all(|(a, b)| math::approx_eq(*a, *b))
    }

    /// Composes so that `self` applies first and `next` second, i.e. `next * self`.
    pub fn then(&self, next: &Matrix) -> Result<Matrix> {
        next.multiply(self)
    }

    pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
        let mut m = Self::identity_of(4);
        m[(0, 3)] = x;
        m[(1, 3)] = y;
        m[(2, 3)] = z;
        m
    }

    pub fn scaling(x: f64, y: f64, z: f64) -> Matrix {
        let mut m = Self::identity_of(4);
        m[(0, 0)] = x;
        m[(1, 1)] = y;
        m[(2, 2)] = z;
        m
    }

    pub fn rotation_x(radians: f64) -> Matrix {
        let (sin, cos) = radians.sin_cos();
        let mut m = Self::identity_of(4);
        m[(1, 1)] = cos;
        m[(1, 2)] = -sin;
        m[(2, 1)] = sin;
        m[(2, 2)] = cos;
        m
    }

    pub fn rotation_y(radians: f64) -> Matrix {
        let (sin, cos) = radians.sin_cos();
        let mut m = Self::identity_of(4);
        m[(0, 0)] = cos;
        m[(0, 2)] = sin;
        m[(2, 0)] = -sin;
        m[(2, 2)] = cos;
        m
    }

    pub fn rotation_z(radians: f64) -> Matrix {
        let (sin, cos) = radians.sin_cos();
        let mut m = Self::identity_of(4);
        m[(0, 0)] = cos;
        m[(0, 1)] = -sin;
        m[(1, 0)] = sin;
        m[(1, 1)] = cos;
        m
    }

    /// Each coefficient moves the first axis in proportion to the second,
    /// e.g. `xy` moves x in proportion to y.
    pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Matrix {
        let mut m = Self::identity_of(4);
        m[(0, 1)] = xy;
        m[(0, 2)] = xz;
        m[(1, 0)] = yx;
        m[(1, 2)] = yz;
        m[(2, 0)] = zx;
        m[(2, 1)] = zy;
        m
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(row < self.h && col < self.w, "matrix index out of range");
        &self.buf[row * self.w + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(row < self.h && col < self.w, "matrix index out of range");
        &mut self.buf[row * self.w + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        for row in 0..self.h {
            if row != 0 {
                write!(f, ", ")?;
            }
            write!(f, "(")?;
            for col in 0..self.w {
                if col != 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self[(row, col)])?;
            }
            write!(f, ")")?;
        }
        write!(f, ")")
    }
}
