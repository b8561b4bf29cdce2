//! Interactive menu, used when no subcommand is given.

use std::path::Path;

use dialoguer::{Input, Select};
use hazard_map_hazard_models::Coordinate;
use hazard_map_risk::RiskEngine;
use hazard_map_server::ServerConfig;

use crate::output;

/// Top-level tool selection.
enum Tool {
    Assess,
    NearestFault,
    Faults,
    Regions,
    Server,
}

impl Tool {
    const ALL: &[Self] = &[
        Self::Assess,
        Self::NearestFault,
        Self::Faults,
        Self::Regions,
        Self::Server,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Assess => "Assess a location",
            Self::NearestFault => "Find the nearest fault",
            Self::Faults => "List faults",
            Self::Regions => "List region statistics",
            Self::Server => "Start server",
        }
    }
}

/// Prompts for a tool and runs it.
///
/// # Errors
///
/// Returns an error if a prompt fails, the boundary file cannot be loaded,
/// or the server fails to start.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Hazard Map");
    println!();

    let labels: Vec<&str> = Tool::ALL.iter().map(Tool::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    let engine = RiskEngine::embedded();

    match Tool::ALL[idx] {
        Tool::Assess => {
            let coordinate = prompt_coordinate()?;
            let default_path = ServerConfig::from_env().boundaries.display().to_string();
            let path: String = Input::new()
                .with_prompt("County boundaries GeoJSON")
                .default(default_path)
                .interact_text()?;
            super::assess(engine, coordinate, Path::new(&path), false)?;
        }
        Tool::NearestFault => {
            let coordinate = prompt_coordinate()?;
            super::nearest_fault(engine, coordinate, false)?;
        }
        Tool::Faults => output::print_faults(engine.reference().faults()),
        Tool::Regions => output::print_regions(engine.reference().regions()),
        Tool::Server => {
            actix_web::rt::System::new().block_on(hazard_map_server::interactive::run())?;
        }
    }

    Ok(())
}

fn prompt_coordinate() -> Result<Coordinate, Box<dyn std::error::Error>> {
    let lng: f64 = Input::new()
        .with_prompt("Longitude")
        .default(-118.2437)
        .interact_text()?;
    let lat: f64 = Input::new()
        .with_prompt("Latitude")
        .default(34.0522)
        .interact_text()?;

    Ok(super::coordinate(lng, lat)?)
}
