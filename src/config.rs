use std::path::PathBuf;

pub const DATASET_PATH: &str = "porsche_data.csv";
pub const MODEL_PATH: &str = "fuel_efficiency_model.bin";
pub const FEATURES: [&str; 2] = ["speed", "engine_temp"];
pub const TARGET: &str = "fuel_efficiency";
pub const TEST_SIZE: f64 = 0.2;
pub const SEED: u64 = 42;

/// Everything a training run needs to know. The binary always runs with
/// `TrainingConfig::default()`; tests point the paths somewhere else.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingConfig {
    pub dataset_path: PathBuf,
    pub model_path: PathBuf,
    pub features: Vec<String>,
    pub target: String,
    pub test_size: f64,
    pub seed: u64,
}

impl TrainingConfig {
    /// Returns the default configuration with both paths replaced.
    ///
    /// # Arguments
    /// * `dataset_path` - Where the input table is read from.
    /// * `model_path` - Where the fitted model is written to.
    pub fn with_paths(dataset_path: impl Into<PathBuf>, model_path: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            model_path: model_path.into(),
            ..Self::default()
        }
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DATASET_PATH),
            model_path: PathBuf::from(MODEL_PATH),
            features: FEATURES.iter().map(|f| f.to_string()).collect(),
            target: TARGET.to_string(),
            test_size: TEST_SIZE,
            seed: SEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_fixed_constants() {
        let cfg = TrainingConfig::default();
        assert_eq!(cfg.features, vec!["speed", "engine_temp"]);
        assert_eq!(cfg.target, "fuel_efficiency");
        assert_eq!(cfg.test_size, 0.2);
        assert_eq!(cfg.seed, 42);
    }

    #[test]
    fn with_paths_keeps_the_rest() {
        let cfg = TrainingConfig::with_paths("in.csv", "out.bin");
        assert_eq!(cfg.dataset_path, PathBuf::from("in.csv"));
        assert_eq!(cfg.model_path, PathBuf::from("out.bin"));
        assert_eq!(cfg.seed, SEED);
    }
}
