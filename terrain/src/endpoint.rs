use crate::{
    source::{ElevationSource, ObstructionSource},
    TerrainError,
};
use geo::Coord;
use log::debug;
use serde::Serialize;

/// Obstruction height, in meters, assumed for an endpoint when no
/// building data exists for it.
pub const DEFAULT_OBSTRUCTION_M: f64 = 30.0;

/// One end of a radio link.
///
/// The antenna height is fixed when the endpoint is built and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Endpoint {
    name: String,
    #[serde(serialize_with = "serialize_coord")]
    coord: Coord<f64>,
    ground_elev_m: f64,
    obstruction_m: f64,
    antenna_height_m: f64,
}

impl Endpoint {
    /// Returns a new endpoint.
    ///
    /// A missing or zero `obstruction_m` is replaced with
    /// [`DEFAULT_OBSTRUCTION_M`].
    pub fn new(
        name: impl Into<String>,
        coord: Coord<f64>,
        ground_elev_m: f64,
        obstruction_m: Option<f64>,
    ) -> Self {
        let obstruction_m = match obstruction_m {
            Some(height) if height != 0.0 => height,
            _ => DEFAULT_OBSTRUCTION_M,
        };
        Self {
            name: name.into(),
            coord,
            ground_elev_m,
            obstruction_m,
            antenna_height_m: ground_elev_m + obstruction_m,
        }
    }

    /// Looks up ground elevation and obstruction height for `coord`
    /// and returns the resulting endpoint.
    pub fn enrich(
        name: impl Into<String>,
        coord: Coord<f64>,
        elevation: &dyn ElevationSource,
        obstructions: &dyn ObstructionSource,
    ) -> Result<Self, TerrainError> {
        let ground_elev_m = elevation.elevation(coord)?;
        let obstruction_m = obstructions.obstruction(coord)?;
        let endpoint = Self::new(name, coord, ground_elev_m, obstruction_m);
        debug!(
            "endpoint; coord: {:?}, ground: {}, obstruction: {}",
            coord, endpoint.ground_elev_m, endpoint.obstruction_m
        );
        Ok(endpoint)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location (`x` = longitude, `y` = latitude).
    pub fn coord(&self) -> Coord<f64> {
        self.coord
    }

    pub fn latitude(&self) -> f64 {
        self.coord.y
    }

    pub fn longitude(&self) -> f64 {
        self.coord.x
    }

    /// Ground elevation in meters.
    pub fn ground_elev_m(&self) -> f64 {
        self.ground_elev_m
    }

    /// Height of the local obstruction (building) in meters.
    pub fn obstruction_m(&self) -> f64 {
        self.obstruction_m
    }

    /// Ground elevation plus obstruction height.
    pub fn antenna_height_m(&self) -> f64 {
        self.antenna_height_m
    }
}

fn serialize_coord<S>(coord: &Coord<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeStruct;
    let mut state = serializer.serialize_struct("Coord", 2)?;
    state.serialize_field("lat", &coord.y)?;
    state.serialize_field("lon", &coord.x)?;
    state.end()
}
