mod haversine;
mod linspace;

pub use haversine::{haversine_distance, EARTH_RADIUS_M};
pub(crate) use linspace::{lerp, linspace};
