use crate::{source::ElevationSource, PathInterpolator, TerrainError};
use geo::Coord;
use log::debug;

/// One ground elevation sample along the path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileSample {
    /// Position along the path, 0 at the start and 1 at the end.
    pub fraction: f64,

    /// Distance from the start in meters.
    pub distance_m: f64,

    /// Ground elevation in meters.
    pub ground_elev_m: f64,

    /// Interpolated location of this sample.
    pub coord: Coord<f64>,
}

/// Ground elevation sampled at evenly spaced positions between two
/// points, ordered from start to end.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Great-circle distance from start to end in meters.
    pub total_distance_m: f64,

    pub samples: Vec<ProfileSample>,
}

impl Profile {
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder {
            start: None,
            end: None,
            samples: None,
        }
    }

    /// Returns a profile from already acquired samples.
    ///
    /// `samples` must be ordered by increasing `fraction`.
    pub fn from_samples(total_distance_m: f64, samples: Vec<ProfileSample>) -> Self {
        Self {
            total_distance_m,
            samples,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

pub struct ProfileBuilder {
    start: Option<Coord<f64>>,

    end: Option<Coord<f64>>,

    /// Number of equal intervals between start and end.
    samples: Option<usize>,
}

impl ProfileBuilder {
    /// Start point of the path (required).
    #[must_use]
    pub fn start(mut self, coord: Coord<f64>) -> Self {
        self.start = Some(coord);
        self
    }

    /// End point of the path (required).
    #[must_use]
    pub fn end(mut self, coord: Coord<f64>) -> Self {
        self.end = Some(coord);
        self
    }

    /// Number of intervals (required). The profile will have
    /// `intervals + 1` samples.
    #[must_use]
    pub fn samples(mut self, intervals: usize) -> Self {
        self.samples = Some(intervals);
        self
    }

    pub fn build<S>(&self, source: &S) -> Result<Profile, TerrainError>
    where
        S: ElevationSource + ?Sized,
    {
        let (Some(start), Some(end), Some(intervals)) = (self.start, self.end, self.samples) else {
            return Err(TerrainError::Builder);
        };
        if intervals == 0 {
            return Err(TerrainError::Samples);
        }

        let path = PathInterpolator::between(start, end);
        let total_distance_m = path.total_distance_m();
        let fractions: Vec<f64> = PathInterpolator::fractions(intervals).collect();
        let coords: Vec<Coord<f64>> = fractions.iter().map(|&t| path.coord_at(t)).collect();

        let (elevations, runtime) = {
            let now = std::time::Instant::now();
            let elevations = source.elevations(&coords)?;
            (elevations, now.elapsed())
        };
        if elevations.len() != coords.len() {
            return Err(TerrainError::ProfileLen {
                expected: coords.len(),
                got: elevations.len(),
            });
        }

        debug!(
            "profile; len: {}, distance: {total_distance_m}, elevation_exec: {runtime:?}",
            coords.len(),
        );

        let samples = fractions
            .into_iter()
            .zip(coords)
            .zip(elevations)
            .map(|((fraction, coord), ground_elev_m)| ProfileSample {
                fraction,
                distance_m: fraction * total_distance_m,
                ground_elev_m,
                coord,
            })
            .collect();

        Ok(Profile {
            total_distance_m,
            samples,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Profile;
    use crate::{
        source::{ElevationSource, Flat},
        TerrainError,
    };
    use approx::assert_relative_eq;
    use geo::{coord, Coord};

    /// Elevation rising linearly with longitude.
    struct Ramp;

    impl ElevationSource for Ramp {
        fn elevation(&self, coord: Coord<f64>) -> Result<f64, TerrainError> {
            Ok(coord.x * 1_000.0)
        }
    }

    /// Drops the last value of every batch.
    struct Short;

    impl ElevationSource for Short {
        fn elevation(&self, _coord: Coord<f64>) -> Result<f64, TerrainError> {
            Ok(0.0)
        }

        fn elevations(&self, coords: &[Coord<f64>]) -> Result<Vec<f64>, TerrainError> {
            Ok(vec![0.0; coords.len() - 1])
        }
    }

    #[test]
    fn test_profile_spacing() {
        let profile = Profile::builder()
            .start(coord!(x: 0.0, y: 0.0))
            .end(coord!(x: 0.1, y: 0.0))
            .samples(50)
            .build(&Ramp)
            .unwrap();
        assert_eq!(profile.len(), 51);
        assert_relative_eq!(profile.total_distance_m, 11_119.49, epsilon = 0.01);

        let first = profile.samples.first().unwrap();
        let last = profile.samples.last().unwrap();
        assert_eq!(first.fraction, 0.0);
        assert_eq!(first.distance_m, 0.0);
        assert_eq!(last.fraction, 1.0);
        assert_eq!(last.distance_m, profile.total_distance_m);
        assert_relative_eq!(last.ground_elev_m, 100.0);

        for (idx, pair) in profile.samples.windows(2).enumerate() {
            assert!(pair[0].fraction < pair[1].fraction, "unordered at {idx}");
            assert_relative_eq!(pair[1].fraction - pair[0].fraction, 0.02, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_profile_missing_params() {
        assert!(matches!(
            Profile::builder().start(coord!(x: 0.0, y: 0.0)).build(&Flat(0.0)),
            Err(TerrainError::Builder)
        ));
    }

    #[test]
    fn test_profile_zero_intervals() {
        assert!(matches!(
            Profile::builder()
                .start(coord!(x: 0.0, y: 0.0))
                .end(coord!(x: 1.0, y: 0.0))
                .samples(0)
                .build(&Flat(0.0)),
            Err(TerrainError::Samples)
        ));
    }

    #[test]
    fn test_profile_short_source() {
        assert!(matches!(
            Profile::builder()
                .start(coord!(x: 0.0, y: 0.0))
                .end(coord!(x: 1.0, y: 0.0))
                .samples(10)
                .build(&Short),
            Err(TerrainError::ProfileLen {
                expected: 11,
                got: 10
            })
        ));
    }
}
