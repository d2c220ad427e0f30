use config::{Config, LogFormat};
use library::logger::impl_console::LoggerConsole;
use library::logger::impl_tracing::LoggerTracing;
use library::logger::interface::Logger;
use model::impl_fake::ScoreModelFake;
use model::impl_tract_onnx::ScoreModelTractOnnx;
use model::interface::ScoreModel;
use model::model_config::ModelBackend;
use server::state::AppState;
use species::ClassCatalog;
use species_classifier::SpeciesClassifier;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod config;
mod image_normalizer;
mod library;
mod model;
mod server;
mod species;
mod species_classifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;

    init_tracing(config.verbose);

    let logger: Arc<dyn Logger + Send + Sync> = match config.log_format {
        LogFormat::Tracing => Arc::new(LoggerTracing::new()),
        LogFormat::Console => Arc::new(LoggerConsole::new(config.logger_timezone, config.verbose)),
    };

    let catalog = match &config.class_list_path {
        Some(path) => ClassCatalog::load(path)?,
        None => ClassCatalog::default(),
    };

    let model: Arc<dyn ScoreModel + Send + Sync> = match config.model.backend {
        ModelBackend::TractOnnx => {
            Arc::new(ScoreModelTractOnnx::new(&config.model, logger.clone())?)
        }
        ModelBackend::Fake => {
            let _ = logger.info("Using fake model with random scores");
            Arc::new(ScoreModelFake::random(catalog.len(), logger.clone()))
        }
    };

    let species_classifier = SpeciesClassifier::new(
        model,
        catalog,
        config.confidence_threshold,
        logger.clone(),
    )?;

    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let state = AppState::new(
        Arc::new(species_classifier),
        config.upload_dir.clone(),
        logger.clone(),
    );

    server::serve(&config, state).await?;

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "fish_detect=debug,tower_http=debug"
    } else {
        "fish_detect=info,tower_http=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}
