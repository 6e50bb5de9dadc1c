use log::info;

use trainer::{train, TrainingConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = TrainingConfig::default();
    info!(
        "training on {} -> {}",
        config.dataset_path.display(),
        config.model_path.display()
    );

    let report = train(config)?;
    println!("{}", report.summary_line());

    Ok(())
}
