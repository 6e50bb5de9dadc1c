//! Ordinary least squares.
//!
//! Solves `minimize Σ (y_i - x_i·w - b)^2` exactly. The design matrix `[X | 1]`
//! is decomposed with an SVD rather than forming the normal equations, which
//! keeps the solve accurate when features live on very different scales and
//! falls back to the minimum-norm solution when columns are collinear.

use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::error::{Result, SchemaErr, TrainErr};

/// Singular values below this are treated as zero.
const RANK_EPS: f64 = 1e-10;

/// Fitted weights of a linear function: one per feature, plus the intercept.
#[derive(Debug, Clone, PartialEq)]
pub struct OlsSolution {
    pub coefficients: Array1<f64>,
    pub intercept: f64,
}

/// Fits `y ≈ x·w + b` by least squares.
///
/// # Arguments
/// * `x` - An `n x k` feature matrix.
/// * `y` - The `n` targets.
///
/// # Errors
/// * `TrainErr::Schema` - `x` and `y` disagree on `n`.
/// * `TrainErr::InsufficientData` - `n < k + 1`.
/// * `TrainErr::Fit` - The decomposition failed or produced non-finite weights.
pub fn least_squares(x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<OlsSolution> {
    let (n, k) = x.dim();
    if y.len() != n {
        return Err(SchemaErr::RowMismatch {
            targets: y.len(),
            rows: n,
        }
        .into());
    }
    if n < k + 1 {
        return Err(TrainErr::InsufficientData {
            what: "a least squares fit",
            got: n,
            needed: k + 1,
        });
    }

    let design = DMatrix::from_fn(n, k + 1, |i, j| if j < k { x[[i, j]] } else { 1.0 });
    let targets = DVector::from_iterator(n, y.iter().copied());

    let beta = design
        .svd(true, true)
        .solve(&targets, RANK_EPS)
        .map_err(|e| TrainErr::Fit(e.to_string()))?;

    if !beta.iter().all(|b| b.is_finite()) {
        return Err(TrainErr::Fit(format!("non-finite coefficients {:?}", beta.as_slice())));
    }

    Ok(OlsSolution {
        coefficients: beta.rows(0, k).iter().copied().collect(),
        intercept: beta[k],
    })
}
