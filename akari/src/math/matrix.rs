use approx::{AbsDiffEq, RelativeEq};
use std::ops::Mul;

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Utilities/Mathematical_Routines.html#Matrix4x4

/// A row-major 4x4 matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix4x4 {
    /// Raw values in row-major order.
    pub m: [[f64; 4]; 4],
}

impl Matrix4x4 {
    /// Creates a new `Matrix4x4`.
    pub fn new(m: [[f64; 4]; 4]) -> Self {
        let ret = Self { m };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Creates a new identity `Matrix4x4`.
    pub fn identity() -> Self {
        Self {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Creates a new `Matrix4x4` filled with zeros.
    pub fn zeros() -> Self {
        Self { m: [[0.0; 4]; 4] }
    }

    /// Checks if this `Matrix4x4` contains NaNs.
    pub fn has_nans(&self) -> bool {
        self.m.iter().flatten().any(|v| v.is_nan())
    }

    /// Returns the `i`th row of this `Matrix4x4`.
    pub fn row(&self, i: usize) -> [f64; 4] {
        self.m[i]
    }

    /// Returns a mutable reference to the `i`th row in this `Matrix4x4`.
    pub fn row_mut(&mut self, i: usize) -> &mut [f64; 4] {
        &mut self.m[i]
    }

    /// Returns the `i`th column of this `Matrix4x4`.
    pub fn col(&self, i: usize) -> [f64; 4] {
        [self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i]]
    }

    /// Returns the transpose of this `Matrix4x4`.
    pub fn transposed(&self) -> Self {
        Self {
            m: [
                [self.m[0][0], self.m[1][0], self.m[2][0], self.m[3][0]],
                [self.m[0][1], self.m[1][1], self.m[2][1], self.m[3][1]],
                [self.m[0][2], self.m[1][2], self.m[2][2], self.m[3][2]],
                [self.m[0][3], self.m[1][3], self.m[2][3], self.m[3][3]],
            ],
        }
    }

    /// Calculates the determinant of the upper-left 3x3 block of this
    /// `Matrix4x4` by minor expansion.
    ///
    /// The fourth row and column are ignored, which matches the full 4x4
    /// determinant for the affine matrices the renderer constructs.
    pub fn determinant(&self) -> f64 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns the inverse of this `Matrix4x4`.
    ///
    /// Panics with a "singular matrix" message if no valid pivot exists,
    /// which callers must treat as fatal for the transform being built.
    pub fn inverted(&self) -> Self {
        // Gauss-Jordan elimination with full pivoting. The augmented identity
        // never needs to be stored; the reduction happens in place and the
        // row/column permutations are undone at the end.
        let mut mi = self.m;
        let mut indxc = [0usize; 4];
        let mut indxr = [0usize; 4];
        let mut ipiv = [0u8; 4];

        for col in 0..4 {
            let mut icol = 0;
            let mut irow = 0;
            let mut big = 0.0;

            // Pick the largest remaining element as the pivot
            for row in 0..4 {
                if ipiv[row] != 1 {
                    for (rcol, &piv) in ipiv.iter().enumerate() {
                        if piv == 0 && mi[row][rcol].abs() > big {
                            big = mi[row][rcol].abs();
                            irow = row;
                            icol = rcol;
                        }
                    }
                }
            }
            assert!(big > 0.0, "Can't invert, singular matrix");
            ipiv[icol] += 1;

            // Move the pivot onto the target row
            if irow != icol {
                if irow > icol {
                    let (top, bottom) = mi.split_at_mut(irow);
                    std::mem::swap(&mut top[icol], &mut bottom[0]);
                } else {
                    let (top, bottom) = mi.split_at_mut(icol);
                    std::mem::swap(&mut top[irow], &mut bottom[0]);
                }
            }

            indxr[col] = irow;
            indxc[col] = icol;

            assert!(mi[icol][icol] != 0.0, "Can't invert, singular matrix");

            // Scale the pivot row so the diagonal becomes 1
            let pivinv = 1.0 / mi[icol][icol];
            mi[icol][icol] = 1.0;
            for v in &mut mi[icol] {
                *v *= pivinv;
            }

            // Eliminate the pivot column from the other rows
            for row in 0..4 {
                if row != icol {
                    let factor = mi[row][icol];
                    mi[row][icol] = 0.0;
                    for rcol in 0..4 {
                        mi[row][rcol] -= factor * mi[icol][rcol];
                    }
                }
            }
        }

        // Undo the column permutations left over from pivoting
        for col in (0..4).rev() {
            if indxr[col] != indxc[col] {
                let (a, b) = {
                    let a = indxr[col];
                    let b = indxc[col];
                    if a < b {
                        (a, b)
                    } else {
                        (b, a)
                    }
                };
                for row in &mut mi {
                    let (front, back) = row.split_at_mut(b);
                    std::mem::swap(&mut front[a], &mut back[0]);
                }
            }
        }
        Matrix4x4::new(mi)
    }
}

// By ref is about twice as fast as by value so let's just endure the syntax
impl<'a, 'b> Mul<&'b Matrix4x4> for &'a Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, other: &'b Matrix4x4) -> Matrix4x4 {
        let mut ret = Matrix4x4::zeros();
        for row in 0..4 {
            for col in 0..4 {
                ret.m[row][col] = self.m[row][0] * other.m[0][col]
                    + self.m[row][1] * other.m[1][col]
                    + self.m[row][2] * other.m[2][col]
                    + self.m[row][3] * other.m[3][col];
            }
        }
        debug_assert!(!ret.has_nans());
        ret
    }
}

impl AbsDiffEq for Matrix4x4 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        for row in 0..4 {
            for col in 0..4 {
                if !self.m[row][col].abs_diff_eq(&other.m[row][col], epsilon) {
                    return false;
                }
            }
        }
        true
    }
}

impl RelativeEq for Matrix4x4 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        for row in 0..4 {
            for col in 0..4 {
                if !self.m[row][col].relative_eq(&other.m[row][col], epsilon, max_relative) {
                    return false;
                }
            }
        }
        true
    }
}
