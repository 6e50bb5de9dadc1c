use ndarray::ArrayView1;

pub trait Metric {
    /// Short name used when logging the score.
    fn name(&self) -> &'static str;

    /// Scores `y_pred` against `y`. Lower is better, empty inputs score 0.
    fn score(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64;
}
