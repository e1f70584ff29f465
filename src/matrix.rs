use std::fmt;
use std::ops::{Index, IndexMut, Mul};

/// Scalar types a matrix can hold
pub trait Scalar:
    Copy
    + PartialEq
    + std::ops::Add<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    fn sin(self) -> Self;
    fn cos(self) -> Self;
}

macro_rules! scalar_impl {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            fn sin(self) -> Self {
                <$t>::sin(self)
            }

            fn cos(self) -> Self {
                <$t>::cos(self)
            }
        }
    )*};
}

scalar_impl!(f32, f64);

/// Square N x N matrix, stored row-major with translation in the bottom row
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<T, const N: usize> {
    m: [[T; N]; N],
}

impl<T: Scalar, const N: usize> Matrix<T, N> {
    /// Creates an identity matrix (ones on the diagonal, zero elsewhere)
    pub fn identity() -> Self {
        assert!(N > 0, "matrix dimension must be at least 1");
        let mut m = [[T::ZERO; N]; N];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = T::ONE;
        }
        Matrix { m }
    }

    /// Overwrites this matrix with the identity
    pub fn reset(&mut self) {
        *self = Self::identity();
    }

    /// Checked access; `None` when the row or column is out of range
    pub fn get(&self, row: usize, column: usize) -> Option<T> {
        self.m.get(row)?.get(column).copied()
    }

    /// Checked mutable access
    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        self.m.get_mut(row)?.get_mut(column)
    }

    /// Creates a scale matrix from per-axis factors
    pub fn scale(sx: T, sy: T) -> Self {
        assert!(N >= 2, "scaling needs at least a 2x2 matrix");
        let mut result = Self::identity();
        result.m[0][0] = sx;
        result.m[1][1] = sy;
        result
    }

    /// Creates a rotation matrix around the Z axis
    pub fn rotation_z(radians: T) -> Self {
        assert!(N >= 2, "rotation needs at least a 2x2 matrix");
        let sin = radians.sin();
        let cos = radians.cos();
        let mut result = Self::identity();
        result.m[0][0] = cos;
        result.m[0][1] = -sin;
        result.m[1][0] = sin;
        result.m[1][1] = cos;
        result
    }

    /// Creates a translation matrix; the offsets live in the bottom row
    pub fn translation(tx: T, ty: T) -> Self {
        assert!(N >= 3, "translation needs homogeneous coordinates");
        let mut result = Self::identity();
        result.m[N - 1][0] = tx;
        result.m[N - 1][1] = ty;
        result
    }

    /// Transforms a 2D point, treating it as a row vector with an
    /// implicit homogeneous coordinate of 1
    pub fn transform_point(&self, point: [T; 2]) -> [T; 2] {
        assert!(N >= 3, "point transforms need homogeneous coordinates");
        let [x, y] = point;
        [
            x * self.m[0][0] + y * self.m[1][0] + self.m[N - 1][0],
            x * self.m[0][1] + y * self.m[1][1] + self.m[N - 1][1],
        ]
    }

    /// Rows of the matrix, in storage order
    pub fn rows(&self) -> &[[T; N]; N] {
        &self.m
    }
}

impl<T: Scalar, const N: usize> Default for Matrix<T, N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar, const N: usize> Mul for Matrix<T, N> {
    type Output = Self;

    /// Standard triple-loop matrix product
    fn mul(self, other: Self) -> Self {
        let mut result = [[T::ZERO; N]; N];
        for row in 0..N {
            for column in 0..N {
                let mut sum = T::ZERO;
                for k in 0..N {
                    sum = sum + self.m[row][k] * other.m[k][column];
                }
                result[row][column] = sum;
            }
        }
        Matrix { m: result }
    }
}

impl<T, const N: usize> Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        &self.m[row][column]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for Matrix<T, N> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        &mut self.m[row][column]
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.m {
            write!(f, "| ")?;
            for value in row {
                write!(f, "{} ", value)?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
