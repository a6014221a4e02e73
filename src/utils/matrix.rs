use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::node::Weight;

/// Dense row-major square matrix of weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix {
    rows: Vec<Vec<Weight>>,
}

impl Matrix {
    /// `n x n` matrix of zeros
    pub fn zeros(n: usize) -> Self {
        Self {
            rows: vec![vec![0.0; n]; n],
        }
    }

    /// `n x n` identity matrix
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Wraps rows; all rows must have the same length as the number of rows
    pub fn from_rows(rows: Vec<Vec<Weight>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == rows.len()));
        Self { rows }
    }

    /// Order of the matrix
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Weight>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<Weight>> {
        self.rows
    }

    /// Element-wise sum
    pub fn add_assign(&mut self, other: &Matrix) {
        for (lhs, rhs) in self.rows.iter_mut().zip(&other.rows) {
            for (a, b) in lhs.iter_mut().zip(rhs) {
                *a += b;
            }
        }
    }

    /// Matrix product
    pub fn mul(&self, other: &Matrix) -> Matrix {
        let n = self.order();
        let mut result = Matrix::zeros(n);
        for i in 0..n {
            for k in 0..n {
                let a = self.rows[i][k];
                if a == 0.0 {
                    continue;
                }
                for j in 0..n {
                    result.rows[i][j] += a * other.rows[k][j];
                }
            }
        }
        result
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Weight;

    fn index(&self, (i, j): (usize, usize)) -> &Weight {
        &self.rows[i][j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Weight {
        &mut self.rows[i][j]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Matrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
        let mut b = Matrix::identity(2);
        assert_eq!(a.mul(&a), b);
        b.add_assign(&a);
        assert_eq!(b.rows(), &[vec![1.0, 1.0], vec![1.0, 1.0]]);
        assert_eq!(b.mul(&b)[(0, 1)], 2.0);
        assert_eq!(Matrix::zeros(0).order(), 0);
    }
}
