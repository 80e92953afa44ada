use anyhow::{anyhow, Error as AnyError};
use clap::{ArgGroup, Parser, Subcommand};
use std::{path::PathBuf, str::FromStr};
use terrain::geo::Coord;

/// Check line of sight and Fresnel zone clearance between two sites.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("ground").required(true).args(["terrain", "flat"])))]
pub struct Cli {
    /// Start "lat,lon".
    #[arg(long, allow_hyphen_values = true)]
    pub start: LatLon,

    /// Destination "lat,lon".
    #[arg(long, allow_hyphen_values = true)]
    pub dest: LatLon,

    /// Display name for the start site.
    #[arg(long)]
    pub start_name: Option<String>,

    /// Display name for the destination site.
    #[arg(long)]
    pub dest_name: Option<String>,

    /// Building height at the start site, in meters. Overrides
    /// `--buildings`.
    #[arg(long)]
    pub start_height: Option<f64>,

    /// Building height at the destination site, in meters. Overrides
    /// `--buildings`.
    #[arg(long)]
    pub dest_height: Option<f64>,

    /// Link frequency in MHz (e.g., 2400 for 2.4GHz).
    #[arg(short, long, default_value_t = 2400.0)]
    pub freq: f64,

    /// Number of equal intervals to sample the path at.
    #[arg(short, long, default_value_t = 50)]
    pub samples: usize,

    /// JSON file of spot heights: [{"lat", "lon", "elevation"}, ..].
    #[arg(short, long)]
    pub terrain: Option<PathBuf>,

    /// Assume flat ground at this elevation instead of reading
    /// `--terrain`.
    #[arg(long, allow_hyphen_values = true)]
    pub flat: Option<f64>,

    /// JSON file of building heights: [{"lat", "lon", "height"}, ..].
    #[arg(short, long)]
    pub buildings: Option<PathBuf>,

    /// Log every checked point.
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Clone, Debug, Copy, PartialEq)]
pub struct LatLon(pub Coord<f64>);

impl FromStr for LatLon {
    type Err = AnyError;
    fn from_str(s: &str) -> Result<Self, AnyError> {
        let (lat_str, lon_str) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("not a valid lat,lon pair"))?;
        let lat = f64::from_str(lat_str.trim())?;
        let lon = f64::from_str(lon_str.trim())?;
        Ok(Self(Coord { y: lat, x: lon }))
    }
}

#[derive(Debug, Subcommand, Clone, Copy)]
pub enum Command {
    /// Print a human readable report.
    Report,

    /// Print the verdict as JSON.
    Json,

    /// Print per-sample clearance values.
    Csv,

    /// Plot terrain and line of sight to terminal.
    Plot,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, LatLon};
    use clap::Parser;
    use std::str::FromStr;

    #[test]
    fn test_parse_lat_lon() {
        let LatLon(coord) = LatLon::from_str("40.7484,-73.9857").unwrap();
        assert_eq!(coord.y, 40.7484);
        assert_eq!(coord.x, -73.9857);

        let LatLon(coord) = LatLon::from_str(" 40.7127 , -74.0134 ").unwrap();
        assert_eq!(coord.y, 40.7127);
        assert_eq!(coord.x, -74.0134);
    }

    #[test]
    fn test_parse_bad_lat_lon() {
        assert!(LatLon::from_str("40.7484").is_err());
        assert!(LatLon::from_str("north,-73.9857").is_err());
    }

    #[test]
    fn test_cli() {
        let cli = Cli::try_parse_from([
            "linkcheck",
            "--start",
            "40.7484,-73.9857",
            "--dest",
            "40.7127,-74.0134",
            "--flat",
            "10",
            "--freq",
            "5800",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.freq, 5_800.0);
        assert_eq!(cli.samples, 50);
        assert_eq!(cli.flat, Some(10.0));
        assert!(!cli.debug);
        assert!(matches!(cli.cmd, Command::Json));
    }

    #[test]
    fn test_cli_requires_ground() {
        assert!(Cli::try_parse_from([
            "linkcheck",
            "--start",
            "40.7484,-73.9857",
            "--dest",
            "40.7127,-74.0134",
            "report",
        ])
        .is_err());
    }
}
