mod config;
mod script;
mod seed;

use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use viewport::camera::Rect;
use viewport::config::ConfigError;
use viewport::engine::EngineCore;
use viewport::world::World;

use crate::config::HostConfig;
use crate::script::Script;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("config parse error: {0}")]
    ConfigParse(String),
    #[error("failed to read script {}: {source}", path.display())]
    ScriptRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid script or snapshot json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("script selects unit {index} but only {count} were seeded")]
    UnknownUnit { index: usize, count: usize },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "skirmish failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let geometry = config.viewport.geometry;

    let mut world = World::new();
    let units = seed::seed_units(&mut world, config.seed_units, &mut rand::rng());
    let mut engine = EngineCore::new(config.viewport, world)?;

    let script = match &config.script_path {
        Some(path) => Script::load(path)?,
        None => Script::demo(),
    };
    let viewport = Rect::new(0.0, 0.0, geometry.viewport_width, geometry.viewport_height);
    let frames = script::replay(&mut engine, &units, &script, viewport)?;

    let snapshot = engine.snapshot();
    tracing::info!(
        units = units.len(),
        events = script.events.len(),
        settle_frames = frames,
        stage = %snapshot.stage.css(),
        "replay finished"
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
