mod cli;
mod controller;
mod scheduler;
mod sink;

use std::path::Path;
use std::time::Duration;

use daytint_common::ConfigError;
use daytint_config::schema::EngineConfig;
use daytint_config::store::{FileStore, SettingsStore};
use daytint_config::{settings_to_json, toml_loader, validation};
use daytint_engine::AppearanceEngine;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};
use crate::controller::SettingsController;
use crate::scheduler::{Clock, FixedClock, LocalClock, Scheduler};
use crate::sink::{OutputFormat, RenderSink, StdoutSink};

/// Logging goes to stderr so stdout carries only rendered appearances.
///
/// Precedence: `--log-level`, then `RUST_LOG`, then `[logging] level`.
fn init_logging(cli_directive: Option<&str>, config_level: &str) {
    let filter = match cli_directive {
        Some(directive) => EnvFilter::try_new(directive).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new(format!("daytint={config_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig, ConfigError> {
    match path {
        Some(path) => {
            let config = toml_loader::load_or_create(path)?;
            validation::validate(&config)?;
            Ok(config)
        }
        None => daytint_config::load_engine_config(),
    }
}

#[tokio::main]
async fn main() {
    let args = cli::parse();

    // Loaded before logging exists so `[logging] level` can apply.
    let config = load_config(args.config.as_deref());
    let level = config
        .as_ref()
        .map(|c| c.logging.level.clone())
        .unwrap_or_else(|_| "info".into());
    init_logging(args.log_level.as_deref(), &level);

    tracing::info!("daytint v{} starting", env!("CARGO_PKG_VERSION"));

    let result = match config {
        Ok(config) => run(args, config).await,
        Err(e) => Err(e.into()),
    };
    if let Err(e) = result {
        tracing::error!("{e}");
        eprintln!("daytint: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args, config: EngineConfig) -> daytint_common::Result<()> {
    let store_dir = toml_loader::resolve_store_dir(&config.store)?;
    std::fs::create_dir_all(&store_dir)?;
    let store = SettingsStore::new(FileStore::new(store_dir), config.store.key.clone());
    let controller = SettingsController::load(store);
    if let Some(path) = controller.store().backing_path() {
        tracing::info!("Settings record: {}", path.display());
    }

    match args.command {
        Some(Command::Settings) => {
            println!("{}", settings_to_json(&controller.current()));
            return Ok(());
        }
        Some(Command::Apply { json }) => {
            let applied = controller.apply_json(&json)?;
            println!("{}", settings_to_json(&applied));
            return Ok(());
        }
        None => {}
    }

    let engine = AppearanceEngine::from_config(&config.schedule)?;
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Css
    };

    if args.once {
        let now = args.at.unwrap_or_else(|| LocalClock.now());
        let appearance = engine.compute(&controller.current(), &now);
        println!("{}", format.format(&appearance)?);
        return Ok(());
    }

    let reload = match controller.reload_manager().spawn() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!("Live reload disabled: {e}");
            None
        }
    };

    let period = Duration::from_millis(u64::from(config.tick.interval_ms));
    let mut sink = StdoutSink::new(format);
    let settings = controller.subscribe();
    let result = match args.at {
        Some(time) => {
            tracing::info!("Clock fixed at {}", time.format("%H:%M"));
            drive(Scheduler::new(engine, settings, FixedClock(time), period), &mut sink).await
        }
        None => drive(Scheduler::new(engine, settings, LocalClock, period), &mut sink).await,
    };

    if let Some(handle) = reload {
        handle.abort();
    }
    tracing::info!("Shutdown complete");
    result
}

/// Run the scheduler until it stops on its own or the process is interrupted.
async fn drive<C: Clock>(
    scheduler: Scheduler<C>,
    sink: &mut impl RenderSink,
) -> daytint_common::Result<()> {
    tokio::select! {
        result = scheduler.run(sink) => result,
        _ = interrupted() => {
            tracing::info!("Interrupt received, shutting down");
            Ok(())
        }
    }
}

async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for interrupt: {e}");
        std::future::pending::<()>().await;
    }
}
