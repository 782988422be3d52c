use std::fmt;

use itertools::Itertools;
use smallvec::{smallvec, SmallVec};

#[derive(Clone, Debug, PartialEq)]
pub struct Vector(pub SmallVec<[f64; 8]>);

impl From<Vec<f64>> for Vector {
    fn from(vec: Vec<f64>) -> Self {
        Self(vec.into())
    }
}

impl Vector {
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self::repeat(0.0, len)
    }

    #[must_use]
    pub fn repeat(value: f64, len: usize) -> Self {
        Self(smallvec![value; len])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        debug_assert_eq!(self.0.len(), other.0.len());
        self.0.iter().zip(&other.0).map(|(xi, yi)| xi * yi).sum()
    }

    /// Adds `factor * rhs` component-wise.
    pub fn add_scaled(&mut self, rhs: &Self, factor: f64) {
        debug_assert_eq!(self.0.len(), rhs.0.len());
        for (left, right) in self.0.iter_mut().zip(&rhs.0) {
            *left += factor * right;
        }
    }

    /// Subtracts `factor * rhs` component-wise.
    pub fn sub_scaled(&mut self, rhs: &Self, factor: f64) {
        debug_assert_eq!(self.0.len(), rhs.0.len());
        for (left, right) in self.0.iter_mut().zip(&rhs.0) {
            *left -= factor * right;
        }
    }

    pub fn div_assign(&mut self, divisor: f64) {
        for component in &mut self.0 {
            *component /= divisor;
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().format(", "))
    }
}
