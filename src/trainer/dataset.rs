use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use itertools::Itertools;
use serde::Deserialize;

use crate::prelude::*;
use crate::trainer::vector::Vector;

/// Training examples with their target values.
///
/// The feature and target sequences are equally long and non-empty.
#[derive(Debug)]
pub struct Dataset<X> {
    features: Vec<X>,
    targets: Vec<f64>,
}

impl<X> Dataset<X> {
    pub fn new(features: Vec<X>, targets: Vec<f64>) -> Result<Self> {
        if features.len() != targets.len() {
            return Err(anyhow!(
                "expected {} targets, got {}",
                features.len(),
                targets.len(),
            ));
        }
        if features.is_empty() {
            return Err(anyhow!("the training set is empty"));
        }
        Ok(Self { features, targets })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    #[must_use]
    pub fn features(&self) -> &[X] {
        &self.features
    }

    #[must_use]
    pub fn targets(&self) -> &[f64] {
        &self.targets
    }

    /// Iterates over feature-target pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&X, f64)> + '_ {
        self.features.iter().zip_eq(self.targets.iter().copied())
    }
}

impl Dataset<Vector> {
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.features.first().map(Vector::len).unwrap_or_default()
    }
}

/// Dataset file as stored on disk.
#[derive(Deserialize)]
pub struct RawDataset {
    pub features: Vec<Feature>,
    pub targets: Vec<f64>,
}

/// Single example: one value in the scalar variant, a fixed-length
/// vector in the vectorized one.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Feature {
    Scalar(f64),
    Vector(Vec<f64>),
}

/// A raw dataset narrowed to one of the two model variants.
pub enum TypedDataset {
    Scalar(Dataset<f64>),
    Vector(Dataset<Vector>),
}

impl RawDataset {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Selects the model variant by the shape of the features.
    pub fn into_typed(self) -> Result<TypedDataset> {
        match self.features.first() {
            None => Err(anyhow!("the training set is empty")),
            Some(Feature::Scalar(_)) => {
                let features = self
                    .features
                    .into_iter()
                    .map(|feature| match feature {
                        Feature::Scalar(x) => Ok(x),
                        Feature::Vector(_) => {
                            Err(anyhow!("expected scalar features throughout the dataset"))
                        }
                    })
                    .collect::<Result<Vec<f64>>>()?;
                Ok(TypedDataset::Scalar(Dataset::new(features, self.targets)?))
            }
            Some(Feature::Vector(first)) => {
                let n_features = first.len();
                if n_features == 0 {
                    return Err(anyhow!("expected at least one feature per example"));
                }
                let features = self
                    .features
                    .into_iter()
                    .map(|feature| match feature {
                        Feature::Vector(components) if components.len() == n_features => {
                            Ok(Vector::from(components))
                        }
                        Feature::Vector(components) => Err(anyhow!(
                            "expected {} features per example, got {}",
                            n_features,
                            components.len(),
                        )),
                        Feature::Scalar(_) => {
                            Err(anyhow!("expected vector features throughout the dataset"))
                        }
                    })
                    .collect::<Result<Vec<Vector>>>()?;
                Ok(TypedDataset::Vector(Dataset::new(features, self.targets)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: serde_json::Value) -> RawDataset {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn new_rejects_mismatched_lengths_ok() {
        assert!(Dataset::new(vec![1.0, 2.0], vec![1.0]).is_err());
    }

    #[test]
    fn new_rejects_empty_ok() {
        assert!(Dataset::<f64>::new(Vec::new(), Vec::new()).is_err());
    }

    #[test]
    fn iter_ok() {
        let dataset = Dataset::new(vec![1.0, 2.0], vec![300.0, 500.0]).unwrap();
        assert!(!dataset.is_empty());
        let pairs: Vec<(f64, f64)> = dataset.iter().map(|(x, y)| (*x, y)).collect();
        assert_eq!(pairs, vec![(1.0, 300.0), (2.0, 500.0)]);
    }

    #[test]
    fn into_typed_scalar_ok() {
        let raw = raw(serde_json::json!({"features": [1, 2.5], "targets": [3, 4]}));
        match raw.into_typed().unwrap() {
            TypedDataset::Scalar(dataset) => {
                assert_eq!(dataset.features(), &[1.0, 2.5]);
                assert_eq!(dataset.targets(), &[3.0, 4.0]);
            }
            TypedDataset::Vector(_) => panic!("expected the scalar variant"),
        }
    }

    #[test]
    fn into_typed_vector_ok() {
        let raw = raw(serde_json::json!({"features": [[1, 2], [3, 4]], "targets": [5, 6]}));
        match raw.into_typed().unwrap() {
            TypedDataset::Vector(dataset) => {
                assert_eq!(dataset.n_features(), 2);
                assert_eq!(dataset.len(), 2);
            }
            TypedDataset::Scalar(_) => panic!("expected the vectorized variant"),
        }
    }

    #[test]
    fn into_typed_rejects_mixed_shapes_ok() {
        let raw = raw(serde_json::json!({"features": [1, [2, 3]], "targets": [4, 5]}));
        assert!(raw.into_typed().is_err());
    }

    #[test]
    fn into_typed_rejects_ragged_vectors_ok() {
        let raw = raw(serde_json::json!({"features": [[1, 2], [3]], "targets": [4, 5]}));
        assert!(raw.into_typed().is_err());
    }

    #[test]
    fn into_typed_rejects_empty_ok() {
        let raw = raw(serde_json::json!({"features": [], "targets": []}));
        assert!(raw.into_typed().is_err());
    }
}
