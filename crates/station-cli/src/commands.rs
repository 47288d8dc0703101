//! Subcommands that talk to a running station server.

use clap::Subcommand;
use station_core::Coordinate;
use station_sdk::{ClientError, StationClient};

use crate::waypoints::parse_waypoint;

#[derive(Subcommand, Debug)]
pub enum ServerCommand {
    /// Send a waypoint; the server writes a mission plan for it
    Submit {
        /// Waypoint as LAT,LON
        #[arg(value_parser = parse_waypoint, allow_hyphen_values = true)]
        waypoint: Coordinate,
    },
    /// Show every coordinate the server has received
    Coordinates,
    /// List registered drones
    Drones,
    /// Register a drone with an initial status
    AddDrone {
        #[arg(long, default_value = "idle")]
        status: String,
    },
    /// Replace a drone's status
    SetStatus { id: i64, status: String },
}

/// Execute one server command, printing its result.
///
/// Any error response, including an unknown drone id, is returned so the
/// process exits non-zero.
pub async fn run(client: &StationClient, command: ServerCommand) -> Result<(), ClientError> {
    match command {
        ServerCommand::Submit { waypoint } => {
            let receipt = client.submit_coordinate(waypoint).await?;
            println!("{}", receipt.message);
            println!("  Waypoint: ({}, {})", receipt.data.latitude, receipt.data.longitude);
            println!("  Plan file: {}", receipt.plan_file_path);
        }
        ServerCommand::Coordinates => {
            let coordinates = client.list_coordinates().await?;
            if coordinates.is_empty() {
                println!("No coordinates received yet");
            }
            for (i, c) in coordinates.iter().enumerate() {
                println!("[{:3}] ({:.6}, {:.6})", i + 1, c.latitude, c.longitude);
            }
        }
        ServerCommand::Drones => {
            let drones = client.list_drones().await?;
            if drones.is_empty() {
                println!("No drones registered");
            }
            for drone in drones {
                println!("ID: {}, Status: {}", drone.id, drone.status);
            }
        }
        ServerCommand::AddDrone { status } => {
            let receipt = client.add_drone(&status).await?;
            println!("{}: ID {}", receipt.message, receipt.drone.id);
        }
        ServerCommand::SetStatus { id, status } => {
            match client.update_drone_status(id, &status).await {
                Ok(receipt) => {
                    println!("{}: ID {} -> {}", receipt.message, id, receipt.drone.status)
                }
                Err(err) => {
                    if err.is_not_found() {
                        eprintln!("Drone {} not found", id);
                    }
                    return Err(err);
                }
            }
        }
    }
    Ok(())
}
