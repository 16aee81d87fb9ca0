// laptev-trainer
// fits the LBPH classifier on ./data and writes ./classifier.xml

use laptev_trainer::{facerecognition::probe, train_with, Config};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .compact()
        .init();

    let config = Config::new();
    tracing::debug!("{:?}", config);

    let report = train_with(&config, probe)?;
    tracing::info!(
        "{:?} classifier at {}",
        report.outcome,
        report.classifier_path.display()
    );
    Ok(())
}
