mod report;
mod trainer;

pub use report::TrainingReport;
pub use trainer::{train, BatchTrainer};
