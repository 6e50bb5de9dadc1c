//! Batch trainer for a fuel-efficiency linear regression.
//!
//! Loads a csv table, selects `speed` and `engine_temp` as features and
//! `fuel_efficiency` as the target, holds out a seeded 20% of the rows, fits
//! ordinary least squares on the rest, scores the holdout and saves the model.

pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod model;
pub mod training;

pub use config::TrainingConfig;
pub use error::{Result, TrainErr};
pub use model::{load_model, save_model, LinearModel};
pub use training::{train, BatchTrainer, TrainingReport};
