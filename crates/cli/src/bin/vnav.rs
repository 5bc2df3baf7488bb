use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use vnav_calculator::config::load_request;
use vnav_calculator::export::{self, CalculationReport};
use vnav_calculator::{
    CalculationOutcome, CalculationRequest, ThreeToOneRuleInput, VerticalRateInput, calculate,
};

#[derive(Parser)]
#[command(author, version, about = "Vertical navigation planning calculator")]
struct Cli {
    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Output path (`-` for stdout)
    #[arg(long, default_value = "-", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Required climb/descent rate (fpm) to reach a target altitude over a distance
    VerticalRate {
        /// Current altitude in feet MSL
        #[arg(long, allow_negative_numbers = true)]
        current: f64,
        /// Target altitude in feet MSL
        #[arg(long, allow_negative_numbers = true)]
        target: f64,
        /// Ground speed in knots
        #[arg(long, allow_negative_numbers = true)]
        ground_speed: f64,
        /// Distance in nautical miles
        #[arg(long, allow_negative_numbers = true)]
        distance: f64,
    },
    /// Distance (NM) at which to begin descent using the 3:1 rule
    DescentPoint {
        /// Current altitude in feet MSL
        #[arg(long, allow_negative_numbers = true)]
        current: f64,
        /// Target altitude in feet MSL
        #[arg(long, allow_negative_numbers = true)]
        target: f64,
    },
    /// Run a single request described by a TOML or YAML file
    Run {
        /// Request file (.toml, .yaml or .yml)
        request: PathBuf,
    },
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let request = match cli.command {
        Command::VerticalRate {
            current,
            target,
            ground_speed,
            distance,
        } => CalculationRequest::VerticalRate(VerticalRateInput {
            current_altitude: current,
            target_altitude: target,
            ground_speed,
            distance,
        }),
        Command::DescentPoint { current, target } => {
            CalculationRequest::ThreeToOne(ThreeToOneRuleInput {
                current_altitude: current,
                target_altitude: target,
            })
        }
        Command::Run { request } => load_request(&request)?,
    };

    let outcome: CalculationOutcome = calculate(&request)?;
    emit(&outcome.report(), cli.format, &cli.output)?;
    Ok(())
}

fn emit(report: &CalculationReport, format: Format, output: &Path) -> anyhow::Result<()> {
    let mut writer = export::writer_for_path(output)?;
    match format {
        Format::Text => export::write_text(writer.as_mut(), report)?,
        Format::Json => export::write_json(writer.as_mut(), report)?,
    }
    writer.flush()?;
    Ok(())
}
