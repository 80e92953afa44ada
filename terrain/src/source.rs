//! Elevation and obstruction data sources.
//!
//! The analysis never fetches data itself; it is handed sources
//! implementing these traits. The implementations here are offline
//! and read everything from memory or local JSON files.

use crate::{math::haversine_distance, TerrainError};
use geo::Coord;
use serde::Deserialize;
use std::{fs::File, io::BufReader, path::Path};

/// Buildings further than this from a coordinate are not considered
/// to be at that coordinate.
pub const BUILDING_SEARCH_RADIUS_M: f64 = 10.0;

/// Ground elevation lookup.
pub trait ElevationSource {
    /// Ground elevation at `coord`, in meters.
    fn elevation(&self, coord: Coord<f64>) -> Result<f64, TerrainError>;

    /// Ground elevations for a batch of coordinates, in order.
    fn elevations(&self, coords: &[Coord<f64>]) -> Result<Vec<f64>, TerrainError> {
        coords.iter().map(|coord| self.elevation(*coord)).collect()
    }
}

/// Local obstruction (building) height lookup.
pub trait ObstructionSource {
    /// Obstruction height at `coord` in meters, or `None` when
    /// nothing is known about it.
    fn obstruction(&self, coord: Coord<f64>) -> Result<Option<f64>, TerrainError>;
}

/// Same ground elevation everywhere.
#[derive(Debug, Clone, Copy)]
pub struct Flat(pub f64);

impl ElevationSource for Flat {
    fn elevation(&self, _coord: Coord<f64>) -> Result<f64, TerrainError> {
        Ok(self.0)
    }
}

/// No obstruction data for any coordinate.
#[derive(Debug, Clone, Copy)]
pub struct NoObstructions;

impl ObstructionSource for NoObstructions {
    fn obstruction(&self, _coord: Coord<f64>) -> Result<Option<f64>, TerrainError> {
        Ok(None)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct SpotHeight {
    lat: f64,
    lon: f64,
    elevation: f64,
}

/// Surveyed spot heights; a lookup returns the nearest one.
///
/// Loaded from a JSON array of `{"lat", "lon", "elevation"}`
/// objects.
#[derive(Debug, Clone)]
pub struct SpotHeights {
    spots: Vec<SpotHeight>,
}

impl SpotHeights {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TerrainError> {
        let reader = BufReader::new(File::open(path)?);
        let spots = serde_json::from_reader(reader)?;
        Ok(Self { spots })
    }

    pub fn from_json(json: &str) -> Result<Self, TerrainError> {
        let spots = serde_json::from_str(json)?;
        Ok(Self { spots })
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}

impl ElevationSource for SpotHeights {
    fn elevation(&self, coord: Coord<f64>) -> Result<f64, TerrainError> {
        self.spots
            .iter()
            .map(|spot| {
                let spot_coord = Coord {
                    x: spot.lon,
                    y: spot.lat,
                };
                (haversine_distance(coord, spot_coord), spot.elevation)
            })
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, elevation)| elevation)
            .ok_or(TerrainError::NoData)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Building {
    lat: f64,
    lon: f64,
    height: Option<f64>,
}

/// Building footprints reduced to a point and a height.
///
/// Loaded from a JSON array of `{"lat", "lon", "height"}` objects;
/// `height` may be omitted or null.
#[derive(Debug, Clone)]
pub struct Buildings {
    buildings: Vec<Building>,
}

impl Buildings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TerrainError> {
        let reader = BufReader::new(File::open(path)?);
        let buildings = serde_json::from_reader(reader)?;
        Ok(Self { buildings })
    }

    pub fn from_json(json: &str) -> Result<Self, TerrainError> {
        let buildings = serde_json::from_str(json)?;
        Ok(Self { buildings })
    }
}

impl ObstructionSource for Buildings {
    /// Height of the first listed building with a known height within
    /// [`BUILDING_SEARCH_RADIUS_M`] of `coord`.
    fn obstruction(&self, coord: Coord<f64>) -> Result<Option<f64>, TerrainError> {
        Ok(self
            .buildings
            .iter()
            .filter(|building| {
                let building_coord = Coord {
                    x: building.lon,
                    y: building.lat,
                };
                haversine_distance(coord, building_coord) <= BUILDING_SEARCH_RADIUS_M
            })
            .find_map(|building| building.height))
    }
}

#[cfg(test)]
mod tests {
    use super::{Buildings, ElevationSource, Flat, ObstructionSource, SpotHeights};
    use crate::TerrainError;
    use geo::coord;

    const SPOTS: &str = r#"[
        {"lat": 40.7484, "lon": -73.9857, "elevation": 17.0},
        {"lat": 40.7300, "lon": -74.0000, "elevation": 5.5},
        {"lat": 40.7127, "lon": -74.0134, "elevation": 3.0}
    ]"#;

    #[test]
    fn test_flat() {
        let coords = [coord!(x: 0.0, y: 0.0), coord!(x: 10.0, y: 10.0)];
        assert_eq!(Flat(42.0).elevations(&coords).unwrap(), vec![42.0, 42.0]);
    }

    #[test]
    fn test_spot_heights_nearest() {
        let spots = SpotHeights::from_json(SPOTS).unwrap();
        assert_eq!(spots.len(), 3);
        assert_eq!(
            spots.elevation(coord!(x: -73.9856, y: 40.7483)).unwrap(),
            17.0
        );
        assert_eq!(spots.elevation(coord!(x: -74.001, y: 40.731)).unwrap(), 5.5);
        assert_eq!(
            spots.elevation(coord!(x: -74.02, y: 40.70)).unwrap(),
            3.0
        );
    }

    #[test]
    fn test_spot_heights_empty() {
        let spots = SpotHeights::from_json("[]").unwrap();
        assert!(spots.is_empty());
        assert!(matches!(
            spots.elevation(coord!(x: 0.0, y: 0.0)),
            Err(TerrainError::NoData)
        ));
    }

    #[test]
    fn test_spot_heights_bad_json() {
        assert!(matches!(
            SpotHeights::from_json(r#"[{"lat": 1.0}]"#),
            Err(TerrainError::Json(_))
        ));
    }

    #[test]
    fn test_buildings_radius() {
        let buildings = Buildings::from_json(
            r#"[
                {"lat": 40.74840, "lon": -73.98570, "height": null},
                {"lat": 40.74842, "lon": -73.98570, "height": 443.2},
                {"lat": 40.75000, "lon": -73.98570, "height": 12.0}
            ]"#,
        )
        .unwrap();
        // Second entry is ~2 m away, third is ~180 m away.
        assert_eq!(
            buildings.obstruction(coord!(x: -73.9857, y: 40.7484)).unwrap(),
            Some(443.2)
        );
        assert_eq!(
            buildings.obstruction(coord!(x: -73.9857, y: 40.7600)).unwrap(),
            None
        );
    }
}
