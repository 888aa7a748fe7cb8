use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::error;
use owo_colors::OwoColorize;

use crate::artifacts;
use crate::enrich::errors::InspectError;
use crate::enrich::pipeline::{Inspector, InspectorConfig};
use crate::enrich::report::Report;
use crate::number::{RawInput, RegionCode};
use crate::providers::nominatim::{self, NominatimClient};
use crate::render;

pub const EXIT_OK: i32 = 0;
pub const EXIT_INPUT: i32 = 1;
pub const EXIT_INTERNAL: i32 = 2;

/// Geocoder endpoint override, mainly so tests can point the pipeline at
/// a local fake instead of the live provider.
pub const GEOCODER_URL_ENV: &str = "NUMLENS_GEOCODER_URL";

#[derive(Debug, Parser)]
#[command(
    name = "numlens",
    version,
    about = "Analyze a phone number and enrich it with carrier, country, local-time and area-level location data."
)]
pub struct Cli {
    /// The phone number to analyze; prompts interactively when omitted.
    pub number: Option<String>,

    /// Default region (ISO 3166-1 alpha-2) for numbers written without a
    /// country code.
    #[arg(long, value_name = "CODE")]
    pub region: Option<String>,

    /// Where to write the contact QR image.
    #[arg(long, value_name = "PATH")]
    pub qr_path: Option<PathBuf>,

    /// Where to write the interactive map page.
    #[arg(long, value_name = "PATH")]
    pub map_path: Option<PathBuf>,

    /// Render the report without producing artifact files.
    #[arg(long)]
    pub no_artifacts: bool,

    /// Skip the network geocoding lookup; the coordinate is reported as
    /// unavailable and the map artifact is skipped.
    #[arg(long)]
    pub offline: bool,

    /// Geocoding timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = 8)]
    pub timeout_secs: u64,
}

/// Executes one full run and returns the process exit code.
pub fn run(cli: Cli) -> i32 {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            error!("could not start async runtime: {}", err);
            eprintln!("Internal fault: could not start async runtime: {}", err);
            return EXIT_INTERNAL;
        }
    };
    runtime.block_on(run_pipeline(cli))
}

async fn run_pipeline(cli: Cli) -> i32 {
    render::print_banner();

    let number = match &cli.number {
        Some(number) => number.clone(),
        None => match prompt_for_number() {
            Ok(number) => number,
            Err(err) => {
                eprintln!("Could not read input: {}", err);
                return EXIT_INPUT;
            }
        },
    };
    if number.trim().is_empty() {
        eprintln!("No number was provided.");
        return EXIT_INPUT;
    }

    let default_region = match &cli.region {
        Some(code) => match RegionCode::new(code) {
            Ok(region) => Some(region),
            Err(err) => {
                eprintln!("Error: {}", err);
                return EXIT_INPUT;
            }
        },
        None => None,
    };

    let config = InspectorConfig {
        geocode_timeout: Duration::from_secs(cli.timeout_secs),
        offline: cli.offline,
    };
    let base_url = std::env::var(GEOCODER_URL_ENV)
        .unwrap_or_else(|_| nominatim::DEFAULT_BASE_URL.to_string());
    let geocoder = match NominatimClient::new(base_url, config.geocode_timeout) {
        Ok(client) => Box::new(client),
        Err(err) => {
            eprintln!("Internal fault: could not build geocoding client: {}", err);
            return EXIT_INTERNAL;
        }
    };

    let inspector = Inspector::new(geocoder, config);
    let raw = RawInput {
        number,
        default_region,
    };
    match inspector.inspect(&raw).await {
        Ok(report) => {
            render::print_report(&report);
            if !cli.no_artifacts {
                emit_artifacts(&cli, &report);
            }
            render::print_disclaimer();
            EXIT_OK
        }
        Err(err) => {
            report_failure(&err);
            match err {
                InspectError::Format(_) | InspectError::Invalid(_) => EXIT_INPUT,
                InspectError::Internal(_) => EXIT_INTERNAL,
            }
        }
    }
}

fn report_failure(err: &InspectError) {
    match err {
        InspectError::Format(inner) => {
            eprintln!("{} {}", "Error:".bold().red(), inner);
            eprintln!(
                "Expected an international number like +14155552671, or pass --region with a national number."
            );
        }
        InspectError::Invalid(inner) => {
            eprintln!("{} {}", "Error:".bold().red(), inner);
        }
        InspectError::Internal(inner) => {
            error!("{}", inner);
            eprintln!("{} {}", "Internal fault:".bold().red(), inner);
        }
    }
}

/// Writes the artifacts after the report is final. Each is independently
/// fallible: a failed QR code does not block the map or flip the exit
/// code, and a missing coordinate skips the map with a visible reason.
fn emit_artifacts(cli: &Cli, report: &Report) {
    println!();
    let qr_path = cli
        .qr_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("contact_{}.png", report.number.e164)));
    match artifacts::write_contact_code(report, &qr_path) {
        Ok(()) => println!(
            "{}",
            format!("Contact QR code saved as '{}'", qr_path.display()).green()
        ),
        Err(err) => eprintln!("Could not write contact QR code: {}", err),
    }

    match &report.geo {
        Some(geo) => {
            let map_path = cli
                .map_path
                .clone()
                .unwrap_or_else(|| PathBuf::from(format!("map_{}.html", report.number.e164)));
            match artifacts::write_map_page(report, geo, &map_path) {
                Ok(()) => println!(
                    "{}",
                    format!("Interactive map saved as '{}'", map_path.display()).blue()
                ),
                Err(err) => eprintln!("Could not write map page: {}", err),
            }
        }
        None => {
            let reason = report.status.geo.reason().unwrap_or("no coordinate");
            println!("Map skipped: {}", reason);
        }
    }
}

fn prompt_for_number() -> io::Result<String> {
    print!(
        "{} ",
        "Enter a phone number (e.g., +14155552671):".bold().yellow()
    );
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
