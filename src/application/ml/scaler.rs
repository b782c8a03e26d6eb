use super::predictor::{FeatureScaler, check_dimension};
use crate::domain::errors::InferenceError;
use crate::domain::ml::FeatureVector;
use serde::{Deserialize, Serialize};

/// Per-column standardization `(x - mean) / scale`.
/// A zero scale leaves the centered value unscaled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardFeatureScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardFeatureScaler {
    pub fn validate(&self) -> Result<(), String> {
        if self.mean.len() != self.scale.len() {
            return Err(format!(
                "mean has {} columns but scale has {}",
                self.mean.len(),
                self.scale.len()
            ));
        }
        Ok(())
    }
}

impl FeatureScaler for StandardFeatureScaler {
    fn transform(&self, row: &FeatureVector) -> Result<FeatureVector, InferenceError> {
        check_dimension(row, self.mean.len())?;
        let values = row
            .as_slice()
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| {
                let divisor = if *scale == 0.0 { 1.0 } else { *scale };
                ((f64::from(*x) - mean) / divisor) as f32
            })
            .collect();
        Ok(FeatureVector::new(values))
    }

    fn name(&self) -> &str {
        "Standard Scaler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standardizes_each_column() {
        let scaler = StandardFeatureScaler {
            mean: vec![1.0, 10.0, 2.0],
            scale: vec![2.0, 5.0, 0.0],
        };
        let out = scaler
            .transform(&FeatureVector::new(vec![3.0, 0.0, 5.0]))
            .unwrap();
        assert_eq!(out.as_slice(), &[1.0, -2.0, 3.0]);
    }

    #[test]
    fn test_width_mismatch_is_an_error() {
        let scaler = StandardFeatureScaler {
            mean: vec![0.0; 4],
            scale: vec![1.0; 4],
        };
        assert!(scaler.transform(&FeatureVector::new(vec![1.0])).is_err());
        assert!(scaler.validate().is_ok());
    }
}
