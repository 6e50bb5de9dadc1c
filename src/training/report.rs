use crate::{data::Split, metrics::Evaluation, model::LinearModel};

/// Everything a finished run produced, besides the file on disk.
#[derive(Debug, Clone)]
pub struct TrainingReport {
    pub model: LinearModel,
    pub evaluation: Evaluation,
    pub split: Split,
}

impl TrainingReport {
    /// The single line the binary prints.
    pub fn summary_line(&self) -> String {
        format!("Model Mean Squared Error: {}", self.evaluation.mse)
    }
}
