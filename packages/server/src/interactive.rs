//! Interactive mode for the server.
//!
//! Prompts for a [`ServerConfig`], seeded from the environment, before
//! starting the server.

use std::path::PathBuf;

use dialoguer::{Confirm, Input};

use crate::ServerConfig;

/// Runs the server in interactive mode, prompting for configuration.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the underlying server fails to
/// start.
#[allow(clippy::future_not_send)]
pub async fn run() -> std::io::Result<()> {
    println!("Hazard Map Server");
    println!();

    let Some(config) = prompt(ServerConfig::from_env()) else {
        println!("Cancelled.");
        return Ok(());
    };

    super::run_server_with(config).await
}

/// Asks for each setting, keeping `defaults` for anything left blank or
/// rejected. Returns `None` if the user declines to start.
fn prompt(defaults: ServerConfig) -> Option<ServerConfig> {
    let bind_addr: String = Input::new()
        .with_prompt("Bind address")
        .default(defaults.bind_addr.clone())
        .interact_text()
        .unwrap_or(defaults.bind_addr);

    let port: u16 = Input::new()
        .with_prompt("Port")
        .default(defaults.port)
        .interact_text()
        .unwrap_or(defaults.port);

    let boundaries: String = Input::new()
        .with_prompt("County boundaries GeoJSON")
        .default(defaults.boundaries.display().to_string())
        .interact_text()
        .unwrap_or_else(|_| defaults.boundaries.display().to_string());

    let config = ServerConfig {
        bind_addr,
        port,
        boundaries: PathBuf::from(boundaries),
    };

    Confirm::new()
        .with_prompt(format!(
            "Start server on {}:{}?",
            config.bind_addr, config.port
        ))
        .default(true)
        .interact()
        .unwrap_or(true)
        .then_some(config)
}
