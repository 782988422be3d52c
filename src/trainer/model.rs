use std::fmt;

use crate::trainer::dataset::Dataset;
use crate::trainer::loss::MseLoss;
use crate::trainer::vector::Vector;

/// Linear model fitted by gradient descent.
///
/// The scalar and vectorized variants implement the same contract; the
/// variant is selected by the shape of the input data.
pub trait Model {
    type Input;
    type Gradient;
    type Snapshot;

    /// Predicts the target for a single example.
    fn predict(&self, x: &Self::Input) -> f64;

    /// Computes the exact analytic cost gradient over the dataset.
    fn gradient(&self, dataset: &Dataset<Self::Input>) -> Self::Gradient;

    /// Applies one gradient descent step to all parameters at once.
    fn step(&mut self, gradient: &Self::Gradient, learning_rate: f64);

    /// Captures the current parameters for the training history.
    fn snapshot(&self) -> Self::Snapshot;

    /// Mean squared error of the model over the dataset.
    fn cost(&self, dataset: &Dataset<Self::Input>) -> f64 {
        let mut loss = MseLoss::default();
        for (x, y) in dataset.iter() {
            loss.push_sample(self.predict(x), y);
        }
        loss.finalise()
    }

    /// Predicts the target for every example, in dataset order.
    fn predict_all(&self, dataset: &Dataset<Self::Input>) -> Vec<f64> {
        dataset.features().iter().map(|x| self.predict(x)).collect()
    }
}

/// Single-feature model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarModel {
    pub w: f64,
    pub b: f64,
}

impl ScalarModel {
    #[must_use]
    pub const fn new(w: f64, b: f64) -> Self {
        Self { w, b }
    }
}

impl Model for ScalarModel {
    type Input = f64;
    type Gradient = ScalarGradient;
    type Snapshot = [f64; 2];

    fn predict(&self, x: &f64) -> f64 {
        self.w * x + self.b
    }

    fn gradient(&self, dataset: &Dataset<f64>) -> ScalarGradient {
        let m = dataset.len() as f64;
        let mut dw = 0.0;
        let mut db = 0.0;
        for (x, y) in dataset.iter() {
            let residual = self.predict(x) - y;
            dw += residual * x;
            db += residual;
        }
        ScalarGradient {
            dw: dw / m,
            db: db / m,
        }
    }

    fn step(&mut self, gradient: &ScalarGradient, learning_rate: f64) {
        self.w -= learning_rate * gradient.dw;
        self.b -= learning_rate * gradient.db;
    }

    fn snapshot(&self) -> [f64; 2] {
        [self.w, self.b]
    }
}

impl fmt::Display for ScalarModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w: {:.3e}, b: {:.5e}", self.w, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarGradient {
    pub dw: f64,
    pub db: f64,
}

impl fmt::Display for ScalarGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dw: {:.3e}, db: {:.3e}", self.dw, self.db)
    }
}

/// n-feature model.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorModel {
    pub w: Vector,
    pub b: f64,
}

impl VectorModel {
    #[must_use]
    pub fn new(w: Vector, b: f64) -> Self {
        Self { w, b }
    }

    /// Initialises every weight component with the same value.
    #[must_use]
    pub fn uniform(n_features: usize, w: f64, b: f64) -> Self {
        Self::new(Vector::repeat(w, n_features), b)
    }
}

impl Model for VectorModel {
    type Input = Vector;
    type Gradient = VectorGradient;
    type Snapshot = ();

    fn predict(&self, x: &Vector) -> f64 {
        self.w.dot(x) + self.b
    }

    fn gradient(&self, dataset: &Dataset<Vector>) -> VectorGradient {
        let m = dataset.len() as f64;
        let mut dw = Vector::zeros(self.w.len());
        let mut db = 0.0;
        for (x, y) in dataset.iter() {
            let residual = self.predict(x) - y;
            dw.add_scaled(x, residual);
            db += residual;
        }
        dw.div_assign(m);
        VectorGradient { dw, db: db / m }
    }

    fn step(&mut self, gradient: &VectorGradient, learning_rate: f64) {
        self.w.sub_scaled(&gradient.dw, learning_rate);
        self.b -= learning_rate * gradient.db;
    }

    fn snapshot(&self) {}
}

impl fmt::Display for VectorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w: {}, b: {:.5e}", self.w, self.b)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VectorGradient {
    pub dw: Vector,
    pub db: f64,
}

impl fmt::Display for VectorGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dw: {}, db: {:.3e}", self.dw, self.db)
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;

    #[test]
    fn scalar_predict_ok() {
        let model = ScalarModel::new(200.0, 100.0);
        assert!((model.predict(&1.0) - 300.0).abs() < f64::EPSILON);
        assert!((model.predict(&2.0) - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn scalar_gradient_ok() {
        let dataset = Dataset::new(vec![1.0, 2.0], vec![300.0, 500.0]).unwrap();
        let gradient = ScalarModel::new(0.0, 0.0).gradient(&dataset);
        assert!((gradient.dw + 650.0).abs() < f64::EPSILON);
        assert!((gradient.db + 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn scalar_gradient_vanishes_at_minimum_ok() {
        let dataset = Dataset::new(vec![1.0, 2.0], vec![300.0, 500.0]).unwrap();
        let gradient = ScalarModel::new(200.0, 100.0).gradient(&dataset);
        assert!(gradient.dw.abs() < 1e-9);
        assert!(gradient.db.abs() < 1e-9);
    }

    #[test]
    fn cost_at_perfect_fit_is_zero_ok() {
        let dataset = Dataset::new(vec![1.0, 2.0], vec![300.0, 500.0]).unwrap();
        let cost = ScalarModel::new(200.0, 100.0).cost(&dataset);
        assert!(cost.abs() < f64::EPSILON);
    }

    #[test]
    fn cost_is_non_negative_ok() {
        let dataset = Dataset::new(vec![1.0, 2.0, 3.0], vec![-5.0, 0.0, 5.0]).unwrap();
        for (w, b) in [(0.0, 0.0), (-3.0, 7.0), (1e6, -1e6)] {
            assert!(ScalarModel::new(w, b).cost(&dataset) >= 0.0);
        }
    }

    #[test]
    fn vector_gradient_ok() {
        let features = vec![
            Vector(smallvec![1.0, 2.0]),
            Vector(smallvec![3.0, 4.0]),
        ];
        let dataset = Dataset::new(features, vec![10.0, 20.0]).unwrap();
        let gradient = VectorModel::uniform(2, 0.0, 0.0).gradient(&dataset);
        assert_eq!(gradient.dw, Vector(smallvec![-35.0, -50.0]));
        assert!((gradient.db + 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn predict_all_preserves_order_ok() {
        let dataset = Dataset::new(vec![3.0, 1.0, 2.0], vec![0.0, 0.0, 0.0]).unwrap();
        let predictions = ScalarModel::new(2.0, 1.0).predict_all(&dataset);
        assert_eq!(predictions, vec![7.0, 3.0, 5.0]);
    }
}
