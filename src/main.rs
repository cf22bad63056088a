//! CLI entrypoint for KPI AHP
//!
//! Wires the filesystem hierarchy source, the tracing event publisher and
//! the engine together.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use kpi_ahp::adapters::{FsHierarchySource, TracingEventPublisher};
use kpi_ahp::application::{RankAlternativesCommand, RankAlternativesHandler};
use kpi_ahp::config::{AppConfig, LogFormat, LoggingConfig};
use kpi_ahp::domain::ahp::{corrective_actions, AhpEngine, Hierarchy, MatrixReport, RankingResult};
use kpi_ahp::domain::foundation::HierarchyId;
use kpi_ahp::ports::HierarchySource;

#[derive(Debug, Parser)]
#[command(name = "kpi-ahp", version, about = "Rank KPI corrective actions with AHP")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank stored hierarchies and print each result as JSON
    Rank {
        /// Hierarchy ids; ranks every stored hierarchy when omitted
        ids: Vec<String>,

        /// Directory holding `{id}.json` / `{id}.yaml` definitions
        #[arg(long, env = "KPI_AHP_DIR")]
        dir: Option<PathBuf>,
    },

    /// Evaluate the built-in corrective-action judgments
    Demo {
        /// Replace a criteria judgment, e.g. "Staffing Levels:Case Complexity=2"
        #[arg(long = "override", value_name = "ROW:COLUMN=VALUE", value_parser = parse_override)]
        overrides: Vec<(String, String, f64)>,
    },
}

fn parse_override(raw: &str) -> Result<(String, String, f64), String> {
    let (pair, value) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected ROW:COLUMN=VALUE, got '{}'", raw))?;
    let (row, column) = pair
        .split_once(':')
        .ok_or_else(|| format!("expected ROW:COLUMN before '=', got '{}'", pair))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value.trim()))?;
    Ok((row.trim().to_string(), column.trim().to_string(), value))
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    // Logs go to stderr so stdout stays valid JSON
    match logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init(),
    }
}

#[derive(Serialize)]
struct RankOutput<'a> {
    hierarchy_id: &'a str,
    best: Option<String>,
    #[serde(flatten)]
    result: RankingResult,
}

#[derive(Serialize)]
struct DemoOutput {
    criteria: MatrixReport,
    case_complexity: RankingResult,
}

async fn rank(config: &AppConfig, ids: Vec<String>, dir: Option<PathBuf>) -> Result<()> {
    let dir = dir.unwrap_or_else(|| config.source.hierarchy_dir.clone());
    let source = Arc::new(FsHierarchySource::new(&dir));

    let ids: Vec<HierarchyId> = if ids.is_empty() {
        source.list().await?
    } else {
        ids.into_iter()
            .map(HierarchyId::new)
            .collect::<Result<_, _>>()?
    };
    if ids.is_empty() {
        bail!("No hierarchies found in {}", dir.display());
    }

    let handler = RankAlternativesHandler::new(
        source,
        Arc::new(TracingEventPublisher::new()),
        AhpEngine::new(config.engine_config()),
    );

    let commands = ids.into_iter().map(RankAlternativesCommand::new).collect();
    let mut failures = 0;
    for outcome in handler.handle_many(commands).await {
        match outcome {
            Ok(ranked) => {
                let output = RankOutput {
                    hierarchy_id: ranked.hierarchy_id.as_str(),
                    best: ranked.ranking.best(),
                    result: ranked.ranking.rounded(config.report.precision),
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            Err(e) => {
                error!(code = %e.code, details = ?e.details, "{}", e.message);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} hierarchies could not be ranked", failures);
    }
    Ok(())
}

fn demo(config: &AppConfig, overrides: &[(String, String, f64)]) -> Result<()> {
    let engine = AhpEngine::new(config.engine_config());
    let overrides: Vec<(&str, &str, f64)> = overrides
        .iter()
        .map(|(row, column, value)| (row.as_str(), column.as_str(), *value))
        .collect();

    let criteria = corrective_actions::criteria_matrix(&overrides)
        .context("Invalid criteria override")?;
    let criteria = engine.compare("Criteria", &criteria)?;
    let case_complexity =
        engine.rank(&Hierarchy::new(corrective_actions::case_complexity_node()?))?;

    let output = DemoOutput {
        criteria: criteria.rounded(config.report.precision),
        case_complexity: case_complexity.rounded(config.report.precision),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_validated().context("Failed to load configuration")?;

    init_tracing(&config.logging);
    info!("Starting kpi-ahp");

    match cli.command {
        Command::Rank { ids, dir } => rank(&config, ids, dir).await,
        Command::Demo { overrides } => demo(&config, &overrides),
    }
}
