//! Waypoint parsing and offline plan generation.

use anyhow::{bail, Context, Result};
use station_core::{encode_route, Coordinate};
use std::path::Path;

/// Parse `LAT,LON` into a validated coordinate.
pub fn parse_waypoint(raw: &str) -> Result<Coordinate> {
    let Some((lat, lon)) = raw.split_once(',') else {
        bail!("expected LAT,LON but got '{}'", raw);
    };
    let latitude: f64 = lat.trim().parse().with_context(|| format!("bad latitude '{}'", lat))?;
    let longitude: f64 = lon.trim().parse().with_context(|| format!("bad longitude '{}'", lon))?;

    let coordinate = Coordinate::new(latitude, longitude);
    coordinate.validate()?;
    Ok(coordinate)
}

/// Encode a multi-waypoint route and write it as a `.plan` file.
pub fn write_route_plan(waypoints: &[Coordinate], out: &Path) -> Result<()> {
    let plan = encode_route(waypoints)?;
    let content = plan.to_json_pretty()?;
    std::fs::write(out, content).with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
