mod mae;
mod metric;
mod mse;

pub use mae::Mae;
pub use metric::Metric;
pub use mse::Mse;

use ndarray::ArrayView1;

/// Holdout scores of a fitted model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub mse: f64,
    pub mae: f64,
    pub rows: usize,
}

impl Evaluation {
    /// Scores `y_pred` against `y`.
    ///
    /// # Panics
    /// If the two views have different lengths.
    pub fn compute(y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> Self {
        assert_eq!(y_pred.len(), y.len(), "predictions and targets must have same length");

        Self {
            mse: Mse.score(y_pred, y),
            mae: Mae.score(y_pred, y),
            rows: y.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn perfect_predictions_score_zero() {
        let y = array![1.0, 2.0, 3.0];
        let eval = Evaluation::compute(y.view(), y.view());
        assert_eq!(eval, Evaluation { mse: 0.0, mae: 0.0, rows: 3 });
    }

    #[test]
    fn scores_known_errors() {
        let y_pred = array![1.0, 2.0, 6.0, 4.0];
        let y = array![2.0, 2.0, 3.0, 4.0];
        let eval = Evaluation::compute(y_pred.view(), y.view());

        // errors: -1, 0, 3, 0
        assert_eq!(eval.mse, 10.0 / 4.0);
        assert_eq!(eval.mae, 4.0 / 4.0);
    }
}
