use log::info;
use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use super::ols;
use crate::error::{Result, SchemaErr};

/// `target ≈ Σ coefficients[i] * features[i] + intercept`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    features: Vec<String>,
    target: String,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    /// Builds a model from known weights.
    ///
    /// # Errors
    /// `TrainErr::Schema` if there isn't exactly one coefficient per feature.
    pub fn new(
        features: Vec<String>,
        target: impl Into<String>,
        coefficients: Vec<f64>,
        intercept: f64,
    ) -> Result<Self> {
        if features.len() != coefficients.len() {
            return Err(SchemaErr::WidthMismatch {
                got: coefficients.len(),
                expected: features.len(),
            }
            .into());
        }

        Ok(Self {
            features,
            target: target.into(),
            coefficients,
            intercept,
        })
    }

    /// Fits the model by ordinary least squares on `x` (one column per name in
    /// `features`) against `y`.
    pub fn fit<S: AsRef<str>>(
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
        features: &[S],
        target: &str,
    ) -> Result<Self> {
        if x.ncols() != features.len() {
            return Err(SchemaErr::WidthMismatch {
                got: x.ncols(),
                expected: features.len(),
            }
            .into());
        }

        let solution = ols::least_squares(x, y)?;
        let model = Self {
            features: features.iter().map(|f| f.as_ref().to_string()).collect(),
            target: target.to_string(),
            coefficients: solution.coefficients.to_vec(),
            intercept: solution.intercept,
        };

        info!("fitted {model} on {} rows", x.nrows());
        Ok(model)
    }

    /// Predicts one target per row of `x`.
    ///
    /// # Errors
    /// `TrainErr::Schema` if `x` doesn't have one column per feature.
    pub fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        if x.ncols() != self.coefficients.len() {
            return Err(SchemaErr::WidthMismatch {
                got: x.ncols(),
                expected: self.coefficients.len(),
            }
            .into());
        }

        let w = ArrayView1::from(self.coefficients.as_slice());
        Ok(x.dot(&w) + self.intercept)
    }

    #[inline]
    pub fn features(&self) -> &[String] {
        &self.features
    }

    #[inline]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[inline]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    #[inline]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl std::fmt::Display for LinearModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} =", self.target)?;
        for (name, w) in self.features.iter().zip(&self.coefficients) {
            write!(f, " {w}*{name} +")?;
        }
        write!(f, " {}", self.intercept)
    }
}
