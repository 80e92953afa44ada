mod options;
mod progress;
mod report;

use anyhow::{bail, Error as AnyError};
use clap::Parser;
use log::info;
use options::{Cli, Command as CliCmd, LatLon};
use propah::Analyzer;
use report::Link;
use terrain::{
    source::{Buildings, Flat, NoObstructions, SpotHeights},
    ElevationSource, Endpoint, ObstructionSource, Profile,
};

fn main() -> Result<(), AnyError> {
    let Cli {
        start,
        dest,
        start_name,
        dest_name,
        start_height,
        dest_height,
        freq,
        samples,
        terrain: terrain_file,
        flat,
        buildings,
        debug,
        cmd,
    } = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if debug { "debug" } else { "warn" }),
    )
    .init();

    let elevation: Box<dyn ElevationSource> = match (terrain_file, flat) {
        (Some(path), _) => Box::new(SpotHeights::load(path)?),
        (None, Some(meters)) => Box::new(Flat(meters)),
        (None, None) => bail!("one of --terrain or --flat is required"),
    };
    let obstructions: Box<dyn ObstructionSource> = match buildings {
        Some(path) => Box::new(Buildings::load(path)?),
        None => Box::new(NoObstructions),
    };

    let start = site(start, start_name, start_height, &*elevation, &*obstructions)?;
    let dest = site(dest, dest_name, dest_height, &*elevation, &*obstructions)?;

    info!("fetching elevation profile");
    let profile = Profile::builder()
        .start(start.coord())
        .end(dest.coord())
        .samples(samples)
        .build(&*elevation)?;

    let analyzer = Analyzer::builder().freq_mhz(freq).verbose(debug).build()?;
    let pb = progress::make_progress_bar("Checking points", matches!(cmd, CliCmd::Report));
    let result = analyzer.analyze_with_progress(&start, &dest, &profile, |progress| {
        pb.set_position(u64::from(progress.percent));
    })?;
    pb.finish();

    let link = Link {
        start: &start,
        dest: &dest,
        distance_m: profile.total_distance_m,
        freq_mhz: freq,
        result,
    };

    let mut stdout = std::io::stdout().lock();
    match cmd {
        CliCmd::Report => report::write_report(&mut stdout, &link)?,
        CliCmd::Json => report::write_json(&mut stdout, &link)?,
        CliCmd::Csv => report::write_csv(&mut stdout, &link, &profile, &analyzer)?,
        CliCmd::Plot => report::plot_ascii(&link, &profile, &analyzer),
    };
    Ok(())
}

/// Builds an endpoint, preferring an explicit building height over
/// `obstructions`.
fn site(
    LatLon(coord): LatLon,
    name: Option<String>,
    height_m: Option<f64>,
    elevation: &dyn ElevationSource,
    obstructions: &dyn ObstructionSource,
) -> Result<Endpoint, AnyError> {
    let name = name.unwrap_or_else(|| format!("({:.6}, {:.6})", coord.y, coord.x));
    let endpoint = match height_m {
        Some(height_m) => Endpoint::new(name, coord, elevation.elevation(coord)?, Some(height_m)),
        None => Endpoint::enrich(name, coord, elevation, obstructions)?,
    };
    Ok(endpoint)
}
