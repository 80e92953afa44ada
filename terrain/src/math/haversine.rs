use geo::{Coord, CoordFloat};
use num_traits::FromPrimitive;

/// Earth radius, in meters, used for all great-circle distances.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Returns the great-circle surface distance, in meters, between two
/// coordinates given in decimal degrees (`x` = longitude, `y` =
/// latitude).
///
/// No range validation is performed on the inputs.
pub fn haversine_distance<T>(a: Coord<T>, b: Coord<T>) -> T
where
    T: CoordFloat + FromPrimitive,
{
    let one = T::one();
    let two = one + one;

    let phi1 = a.y.to_radians();
    let phi2 = b.y.to_radians();
    let d_phi = (b.y - a.y).to_radians();
    let d_lambda = (b.x - a.x).to_radians();

    let h = (d_phi / two).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / two).sin().powi(2);
    let c = two * h.sqrt().atan2((one - h).sqrt());

    T::from_f64(EARTH_RADIUS_M).unwrap() * c
}
