use std::path::Path;

use anyhow::{Context, Result};
use paneforge_glass::PaneReport;
use paneforge_level::Level;
use paneforge_parser::ConfigRegistry;
use tracing::{info, warn};

use crate::error::CliError;
use crate::Cli;

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

async fn read(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}

async fn load_registry(path: &Path) -> Result<ConfigRegistry> {
    let text = read(path).await?;
    let registry = if is_json(path) {
        ConfigRegistry::from_json_str(&text)
    } else {
        ConfigRegistry::from_yaml_str(&text)
    };
    registry.with_context(|| format!("invalid glass config {}", path.display()))
}

async fn load_level(path: &Path) -> Result<Level> {
    let text = read(path).await?;
    let level = if is_json(path) {
        Level::from_json_str(&text)
    } else {
        Level::from_yaml_str(&text)
    };
    level.with_context(|| format!("invalid level {}", path.display()))
}

async fn save_level(level: &Level, path: &Path) -> Result<()> {
    let json = level.to_json_pretty().context("failed to serialize level")?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("failed to write {}", path.display()))
}

fn summary(report: &PaneReport) -> String {
    let f = &report.frames;
    format!(
        "{}: {} cells -> {}, {}, {} frames (single {}, corner {}, edge {}, ubend {})",
        report.target,
        report.cells,
        report.surf,
        report.clip,
        f.total(),
        f.single,
        f.corner,
        f.edge,
        f.ubend,
    )
}

/// Loads the inputs, runs the glass pass and writes the result.
pub async fn run(cli: &Cli) -> Result<(), CliError> {
    let registry = load_registry(&cli.config)
        .await
        .map_err(|e| CliError::input(&e))?;
    let mut level = load_level(&cli.level)
        .await
        .map_err(|e| CliError::input(&e))?;
    info!(
        items = registry.len(),
        entities = level.len(),
        "loaded {}",
        cli.level.display()
    );

    let mut built = Vec::new();
    let mut skipped = 0usize;
    for result in paneforge_glass::run(&mut level, &registry) {
        match result {
            Ok(report) => built.push(report),
            Err(err) if cli.keep_going => {
                warn!(pane = %err.target(), "skipping pane: {err}");
                skipped += 1;
            }
            Err(err) => return Err(CliError::processing(&err)),
        }
    }

    save_level(&level, &cli.output)
        .await
        .map_err(|e| CliError::processing(&e))?;

    for report in &built {
        println!("{}", summary(report));
    }
    info!(
        built = built.len(),
        skipped,
        "wrote {}",
        cli.output.display()
    );
    Ok(())
}
