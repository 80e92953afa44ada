use crate::{
    math::{haversine_distance, lerp, linspace},
    Endpoint,
};
use geo::Coord;

/// Straight-line interpolation between two endpoints.
///
/// Positions are fractions `t` in `[0, 1]` of the path, where 0 is
/// the start endpoint and 1 is the end endpoint. Coordinates are
/// interpolated linearly in degrees, which matches how profiles are
/// sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathInterpolator {
    start: Coord<f64>,
    end: Coord<f64>,
    start_height_m: f64,
    end_height_m: f64,
    total_distance_m: f64,
}

impl PathInterpolator {
    /// Returns an interpolator between `start` and `end`, computing
    /// the great-circle distance between them.
    pub fn new(start: &Endpoint, end: &Endpoint) -> Self {
        Self {
            start_height_m: start.antenna_height_m(),
            end_height_m: end.antenna_height_m(),
            ..Self::between(start.coord(), end.coord())
        }
    }

    /// Returns an interpolator between two bare coordinates.
    ///
    /// Both antenna heights are zero, so only the position methods
    /// are meaningful.
    pub fn between(start: Coord<f64>, end: Coord<f64>) -> Self {
        Self {
            start,
            end,
            start_height_m: 0.0,
            end_height_m: 0.0,
            total_distance_m: haversine_distance(start, end),
        }
    }

    /// Great-circle distance from start to end in meters.
    pub fn total_distance_m(&self) -> f64 {
        self.total_distance_m
    }

    /// Converts a distance from the start into a path fraction.
    pub fn fraction_of(&self, distance_m: f64) -> f64 {
        distance_m / self.total_distance_m
    }

    /// Interpolated coordinate at fraction `t`.
    pub fn coord_at(&self, t: f64) -> Coord<f64> {
        Coord {
            x: lerp(self.start.x, self.end.x, t),
            y: lerp(self.start.y, self.end.y, t),
        }
    }

    /// Height of the direct radio path at fraction `t`.
    pub fn height_at(&self, t: f64) -> f64 {
        if t == 1.0 {
            return self.end_height_m;
        }
        lerp(self.start_height_m, self.end_height_m, t)
    }

    /// The `intervals + 1` evenly spaced fractions from 0 to 1.
    pub fn fractions(intervals: usize) -> impl Iterator<Item = f64> {
        linspace(0.0, 1.0, intervals + 1)
    }
}
