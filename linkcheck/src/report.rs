use anyhow::Error as AnyError;
use propah::{Analyzer, ClearanceResult};
use serde::Serialize;
use std::io::Write;
use terrain::{Endpoint, PathInterpolator, Profile};
use textplots::{Chart, Plot, Shape};

/// Everything known about an analyzed link.
#[derive(Debug, Serialize)]
pub struct Link<'a> {
    pub start: &'a Endpoint,
    pub dest: &'a Endpoint,
    pub distance_m: f64,
    pub freq_mhz: f64,
    pub result: ClearanceResult,
}

pub fn write_report<W: Write>(out: &mut W, link: &Link) -> Result<(), AnyError> {
    writeln!(out, "# Point-to-Point Link Report")?;
    writeln!(out)?;
    for (label, site) in [("Site 1", link.start), ("Site 2", link.dest)] {
        writeln!(out, "**{label}**: {}", site.name())?;
        writeln!(out, "- Building Height: **{:.2} m**", site.obstruction_m())?;
        writeln!(out, "- Ground Elevation: **{:.2} m**", site.ground_elev_m())?;
        writeln!(out, "- Total Antenna Height: **{:.2} m**", site.antenna_height_m())?;
        writeln!(out)?;
    }
    writeln!(out, "**Frequency**: **{} MHz**", link.freq_mhz)?;
    writeln!(out, "**Surface Distance**: **{:.2} meters**", link.distance_m)?;
    writeln!(out)?;
    if link.result.los_clear {
        writeln!(out, "**Line of Sight (LOS)**: Clear")?;
    } else {
        writeln!(out, "**Line of Sight (LOS)**: Blocked ({})", link.result.reason())?;
    }
    writeln!(
        out,
        "**Minimum Clearance**: **{:.1}% of Fresnel zone**",
        link.result.min_clearance_pct
    )?;
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, link: &Link) -> Result<(), AnyError> {
    serde_json::to_writer_pretty(&mut *out, link)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_csv<W: Write>(
    out: &mut W,
    link: &Link,
    profile: &Profile,
    analyzer: &Analyzer,
) -> Result<(), AnyError> {
    let path = PathInterpolator::new(link.start, link.dest);
    writeln!(out, "Distance,Longitude,Latitude,LOS,Elevation,Fresnel,Clearance")?;
    for sample in &profile.samples {
        let clearance = analyzer.clearance_at(&path, sample);
        writeln!(
            out,
            "{},{},{},{},{},{},{}",
            sample.distance_m,
            sample.coord.x,
            sample.coord.y,
            clearance.los_height_m,
            sample.ground_elev_m,
            clearance.fresnel_m,
            clearance.clearance_pct,
        )?;
    }
    Ok(())
}

/// Plots terrain and the direct path against distance, in meters.
pub fn plot_ascii(link: &Link, profile: &Profile, analyzer: &Analyzer) {
    let path = PathInterpolator::new(link.start, link.dest);
    #[allow(clippy::cast_possible_truncation)]
    let (terrain, los): (Vec<(f32, f32)>, Vec<(f32, f32)>) = profile
        .samples
        .iter()
        .map(|sample| {
            let x = sample.distance_m as f32;
            let los_height_m = analyzer.clearance_at(&path, sample).los_height_m;
            ((x, sample.ground_elev_m as f32), (x, los_height_m as f32))
        })
        .unzip();
    #[allow(clippy::cast_possible_truncation)]
    Chart::new(300, 150, 0.0, profile.total_distance_m as f32)
        .lineplot(&Shape::Lines(&terrain))
        .lineplot(&Shape::Lines(&los))
        .display();
}
