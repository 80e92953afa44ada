use crate::{
    fresnel::fresnel_radius,
    progress::{Progress, ProgressTracker},
    PropahError,
};
use log::debug;
use serde::Serialize;
use std::fmt;
use terrain::{Endpoint, PathInterpolator, Profile, ProfileSample};

/// Clearance, as a percent of the first Fresnel zone radius, below
/// which a link is considered blocked.
pub const BLOCKING_THRESHOLD_PCT: f64 = 60.0;

/// Best clearance a result can report.
const CLEARANCE_CEILING_PCT: f64 = 100.0;

/// Why a link is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Obstruction {
    Terrain,
}

impl fmt::Display for Obstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Obstruction::Terrain => f.write_str("terrain obstruction"),
        }
    }
}

/// Line of sight verdict for a link.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClearanceResult {
    pub los_clear: bool,

    /// Smallest clearance seen along the path, capped at 100.
    pub min_clearance_pct: f64,

    /// Set once the clearance drops below
    /// [`BLOCKING_THRESHOLD_PCT`], even if the link is later found
    /// to be otherwise clear.
    pub obstruction: Option<Obstruction>,
}

impl ClearanceResult {
    /// Obstruction label, or an empty string for an unobstructed
    /// link.
    pub fn reason(&self) -> String {
        self.obstruction
            .map(|obstruction| obstruction.to_string())
            .unwrap_or_default()
    }
}

/// Clearance of the direct path above a single profile sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleClearance {
    /// Height of the direct path above this sample in meters.
    pub los_height_m: f64,

    /// First Fresnel zone radius in meters.
    pub fresnel_m: f64,

    /// `(los_height_m - ground) / fresnel_m * 100`.
    pub clearance_pct: f64,
}

/// Line of sight and Fresnel clearance analysis.
#[derive(Debug, Clone)]
pub struct Analyzer {
    freq_mhz: f64,
    verbose: bool,
}

impl Analyzer {
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder {
            freq_mhz: None,
            verbose: false,
        }
    }

    pub fn freq_mhz(&self) -> f64 {
        self.freq_mhz
    }

    /// Analyzes the link from `start` to `end` over `profile`.
    ///
    /// The link length is the great-circle distance between the two
    /// endpoints; `profile.total_distance_m` is not consulted.
    pub fn analyze(
        &self,
        start: &Endpoint,
        end: &Endpoint,
        profile: &Profile,
    ) -> Result<ClearanceResult, PropahError> {
        self.analyze_with_progress(start, end, profile, |_| {})
    }

    /// Same as [`Analyzer::analyze`], calling `on_progress` each time
    /// another 10% of the profile has been processed.
    pub fn analyze_with_progress<F>(
        &self,
        start: &Endpoint,
        end: &Endpoint,
        profile: &Profile,
        mut on_progress: F,
    ) -> Result<ClearanceResult, PropahError>
    where
        F: FnMut(Progress),
    {
        if !self.freq_mhz.is_finite() || self.freq_mhz <= 0.0 {
            return Err(PropahError::InvalidFrequency(self.freq_mhz));
        }
        let path = PathInterpolator::new(start, end);
        let total_distance_m = path.total_distance_m();
        if total_distance_m.is_nan() || total_distance_m <= 0.0 {
            return Err(PropahError::DegenerateLink);
        }

        let mut tracker = ProgressTracker::new(profile.len());
        let mut min_clearance_pct = CLEARANCE_CEILING_PCT;
        let mut obstruction = None;

        for (idx, sample) in profile.samples.iter().enumerate() {
            let SampleClearance { clearance_pct, .. } = self.clearance_at(&path, sample);

            if clearance_pct < min_clearance_pct {
                min_clearance_pct = clearance_pct;
                if min_clearance_pct < BLOCKING_THRESHOLD_PCT {
                    obstruction = Some(Obstruction::Terrain);
                }
            }

            if self.verbose {
                debug!(
                    "checking point ({:.6}, {:.6}) elevation: {:.1} m, clearance: {:.1}%",
                    sample.coord.y, sample.coord.x, sample.ground_elev_m, clearance_pct
                );
            }

            if let Some(progress) = tracker.advance(idx) {
                on_progress(progress);
            }
        }

        Ok(ClearanceResult {
            los_clear: min_clearance_pct >= BLOCKING_THRESHOLD_PCT,
            min_clearance_pct,
            obstruction,
        })
    }

    /// Clearance above a single sample.
    ///
    /// The Fresnel radius is the mid-link radius for the whole path
    /// length and is the same for every sample, not the radius of the
    /// zone at the sample's position.
    pub fn clearance_at(&self, path: &PathInterpolator, sample: &ProfileSample) -> SampleClearance {
        let t = path.fraction_of(sample.distance_m);
        let los_height_m = path.height_at(t);
        let fresnel_m = fresnel_radius(path.total_distance_m(), self.freq_mhz);
        SampleClearance {
            los_height_m,
            fresnel_m,
            clearance_pct: (los_height_m - sample.ground_elev_m) / fresnel_m * 100.0,
        }
    }
}

pub struct AnalyzerBuilder {
    /// Link frequency in MHz (required).
    freq_mhz: Option<f64>,

    /// Log every sample (defaults to false).
    verbose: bool,
}

impl AnalyzerBuilder {
    /// Link frequency in MHz (required).
    #[must_use]
    pub fn freq_mhz(mut self, freq_mhz: f64) -> Self {
        self.freq_mhz = Some(freq_mhz);
        self
    }

    /// Log every sample's location, elevation and clearance at debug
    /// level (defaults to false).
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn build(&self) -> Result<Analyzer, PropahError> {
        let freq_mhz = self.freq_mhz.ok_or(PropahError::Builder("freq_mhz"))?;
        Ok(Analyzer {
            freq_mhz,
            verbose: self.verbose,
        })
    }
}
