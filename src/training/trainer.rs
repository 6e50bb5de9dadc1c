use log::info;

use super::TrainingReport;
use crate::{
    config::TrainingConfig,
    data::{select_xy, train_test_split, Table},
    error::Result,
    metrics::{Evaluation, Mae, Metric, Mse},
    model::{save_model, LinearModel},
};

/// Runs load, select, split, fit, evaluate and save, in that order, once.
///
/// The first failing step aborts the run. The model file is only touched
/// after the model has been fitted and scored.
pub struct BatchTrainer {
    config: TrainingConfig,
}

impl BatchTrainer {
    /// Returns a new `BatchTrainer`.
    ///
    /// # Arguments
    /// * `config` - Paths, columns, holdout fraction and seed for the run.
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Executes the run.
    ///
    /// # Returns
    /// The fitted model, its holdout scores and the split that produced them.
    pub fn run(&self) -> Result<TrainingReport> {
        let TrainingConfig {
            dataset_path,
            model_path,
            features,
            target,
            test_size,
            seed,
        } = &self.config;

        let table = Table::from_csv_path(dataset_path)?;
        let (x, y) = select_xy(&table, features, target)?;

        let split = train_test_split(table.len(), *test_size, *seed)?;
        let data = split.apply(x.view(), y.view());

        let model = LinearModel::fit(data.x_train.view(), data.y_train.view(), features, target)?;

        let y_pred = model.predict(data.x_test.view())?;
        let evaluation = Evaluation::compute(y_pred.view(), data.y_test.view());
        info!(
            "holdout {}={} {}={} over {} rows",
            Mse.name(),
            evaluation.mse,
            Mae.name(),
            evaluation.mae,
            evaluation.rows
        );

        save_model(&model, model_path)?;

        Ok(TrainingReport {
            model,
            evaluation,
            split,
        })
    }
}

/// Trains with `config`. Shorthand for `BatchTrainer::new(config).run()`.
pub fn train(config: TrainingConfig) -> Result<TrainingReport> {
    BatchTrainer::new(config).run()
}
