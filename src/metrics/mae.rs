use ndarray::ArrayView1;

use super::Metric;

/// Mean absolute error.
#[derive(Default, Clone, Copy)]
pub struct Mae;

impl Metric for Mae {
    fn name(&self) -> &'static str {
        "mae"
    }

    fn score(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
        (&y_pred - &y).mapv(f64::abs).mean().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn averages_absolute_errors() {
        let y_pred = array![3.0, -1.0, 0.5];
        let y = array![1.0, -1.0, 1.5];
        assert_eq!(Mae.score(y_pred.view(), y.view()), 1.0);
    }
}
