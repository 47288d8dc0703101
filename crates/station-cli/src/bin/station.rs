//! Operator CLI for the drone station.
//!
//! Submits waypoints, manages the drone fleet, and writes offline route plans.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use station_cli::{parse_waypoint, run, write_route_plan, ServerCommand};
use station_sdk::{ClientError, StationClient};

/// Drone station command-line client
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Station server URL
    #[arg(long, env = "STATION_URL", default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(flatten)]
    Server(ServerCommand),
    /// Write a multi-waypoint plan locally without contacting the server
    Plan {
        /// Waypoints as LAT,LON, in flight order
        #[arg(long = "waypoint", required = true, allow_hyphen_values = true, value_parser = parse_waypoint)]
        waypoints: Vec<station_core::Coordinate>,
        #[arg(long, default_value = "route.plan")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Plan { waypoints, out } => {
            write_route_plan(&waypoints, &out)?;
            println!("Wrote {} waypoints to {}", waypoints.len(), out.display());
        }
        Command::Server(command) => {
            let client = StationClient::new(&args.url)?;
            if let Err(err) = run(&client, command).await {
                if let ClientError::UpstreamUnavailable(_) = err {
                    eprintln!("Could not reach station server at {}", client.base_url());
                }
                return Err(err.into());
            }
        }
    }
    Ok(())
}
