#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line interface for the hazard map risk engine.
//!
//! Scores a coordinate, finds the nearest fault, lists the reference
//! tables, or starts the API server. Run without a subcommand for an
//! interactive menu.

mod interactive;
mod output;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use hazard_map_hazard_models::Coordinate;
use hazard_map_risk::RiskEngine;
use hazard_map_server::DEFAULT_BOUNDARIES_PATH;
use hazard_map_spatial::RegionBoundaries;

#[derive(Parser)]
#[command(name = "hazard_map", about = "California natural-hazard risk engine")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every hazard at a coordinate and print a mitigation plan
    Assess {
        /// Longitude in degrees (negative for the western hemisphere)
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        /// Latitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// County boundary `GeoJSON` `FeatureCollection`
        #[arg(long, env = "HAZARD_MAP_BOUNDARIES", default_value = DEFAULT_BOUNDARIES_PATH)]
        boundaries: PathBuf,
        /// Print JSON instead of a report
        #[arg(long)]
        json: bool,
    },
    /// Find the catalogued fault closest to a coordinate
    NearestFault {
        /// Longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        /// Latitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// List the fault catalogue
    Faults,
    /// List base hazard statistics per region
    Regions,
    /// Start the API server (configured via `BIND_ADDR`, `PORT`, `HAZARD_MAP_BOUNDARIES`)
    Serve,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return interactive::run();
    };

    let engine = RiskEngine::embedded();

    match command {
        Commands::Assess {
            lng,
            lat,
            boundaries,
            json,
        } => assess(engine, coordinate(lng, lat)?, &boundaries, json)?,
        Commands::NearestFault { lng, lat, json } => {
            nearest_fault(engine, coordinate(lng, lat)?, json)?;
        }
        Commands::Faults => output::print_faults(engine.reference().faults()),
        Commands::Regions => output::print_regions(engine.reference().regions()),
        Commands::Serve => {
            actix_web::rt::System::new().block_on(hazard_map_server::run_server())?;
        }
    }

    Ok(())
}

/// Validates a coordinate from user input.
fn coordinate(lng: f64, lat: f64) -> Result<Coordinate, String> {
    let coordinate = Coordinate::new(lng, lat);
    if coordinate.is_finite() {
        Ok(coordinate)
    } else {
        Err(format!("Coordinate must be finite, got ({lng}, {lat})"))
    }
}

/// Scores `coordinate` and prints the report.
fn assess(
    engine: RiskEngine<'static>,
    coordinate: Coordinate,
    boundaries_path: &Path,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let boundaries = RegionBoundaries::from_path(boundaries_path)?;
    let assessment = engine.assess(coordinate, &boundaries);

    if json {
        let body = hazard_map_server::to_api_assessment(assessment);
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        output::print_assessment(coordinate, &assessment);
    }

    Ok(())
}

/// Finds and prints the nearest fault.
fn nearest_fault(
    engine: RiskEngine<'static>,
    coordinate: Coordinate,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(nearest) = engine.nearest_fault(coordinate) else {
        return Err("Fault catalogue has no usable traces".into());
    };

    if json {
        let body = hazard_map_server::to_api_nearest_fault(&nearest);
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        output::print_nearest_fault(&nearest);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_longitude() {
        let cli = Cli::try_parse_from([
            "hazard_map",
            "assess",
            "--lng",
            "-118.2437",
            "--lat",
            "34.0522",
            "--boundaries",
            "counties.geojson",
            "--json",
        ])
        .unwrap();

        let Some(Commands::Assess {
            lng,
            lat,
            boundaries,
            json,
        }) = cli.command
        else {
            panic!("expected assess");
        };
        assert!((lng + 118.2437).abs() < f64::EPSILON);
        assert!((lat - 34.0522).abs() < f64::EPSILON);
        assert_eq!(boundaries, PathBuf::from("counties.geojson"));
        assert!(json);
    }

    #[test]
    fn no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["hazard_map"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        assert!(coordinate(f64::NAN, 34.0).is_err());
        assert!(coordinate(-118.0, f64::INFINITY).is_err());
        assert!(coordinate(-118.0, 34.0).is_ok());
    }
}
