//! # Terrain
//!
//! `terrain` models the ground side of a point-to-point radio link:
//! the two endpoints, the great-circle path between them, and an
//! elevation profile sampled along that path.

mod endpoint;
mod error;
mod math;
mod path;
mod profile;
pub mod source;

pub use crate::{
    endpoint::{Endpoint, DEFAULT_OBSTRUCTION_M},
    error::TerrainError,
    math::{haversine_distance, EARTH_RADIUS_M},
    path::PathInterpolator,
    profile::{Profile, ProfileBuilder, ProfileSample},
    source::{ElevationSource, ObstructionSource},
};
pub use geo;
