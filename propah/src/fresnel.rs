use num_traits::{Float, FromPrimitive};

/// Radius, in meters, of the first Fresnel zone for a link of
/// `distance_m` meters at `freq_mhz` MHz.
///
/// ```text
/// r = 17.32 * sqrt(d_km / (4 * f_mhz))
/// ```
///
/// This is the radius at the middle of the link, where the zone is
/// widest. `freq_mhz` must be positive; the result is not finite
/// otherwise.
pub fn fresnel_radius<T>(distance_m: T, freq_mhz: T) -> T
where
    T: Float + FromPrimitive,
{
    let k = T::from_f64(17.32).unwrap();
    let four = T::from_f64(4.0).unwrap();
    let distance_km = distance_m / T::from_f64(1000.0).unwrap();
    k * (distance_km / (four * freq_mhz)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::fresnel_radius;
    use approx::assert_relative_eq;

    #[test]
    fn test_fresnel_radius() {
        assert_relative_eq!(
            fresnel_radius(1_000.0, 2_400.0),
            0.176_771_509_770_852_7,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            fresnel_radius(4_000.0, 900.0),
            17.32 * (1.0_f64 / 900.0).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_fresnel_radius_decreases_with_frequency() {
        let freqs = [433.0, 900.0, 2_400.0, 5_800.0, 24_000.0, 60_000.0];
        for pair in freqs.windows(2) {
            assert!(fresnel_radius(5_000.0, pair[0]) > fresnel_radius(5_000.0, pair[1]));
        }
    }

    #[test]
    fn test_fresnel_radius_increases_with_distance() {
        let distances = [1.0, 100.0, 1_000.0, 4_605.0, 50_000.0];
        for pair in distances.windows(2) {
            assert!(fresnel_radius(pair[0], 5_800.0) < fresnel_radius(pair[1], 5_800.0));
        }
    }

    #[test]
    fn test_fresnel_radius_zero_distance() {
        assert_eq!(fresnel_radius(0.0, 2_400.0), 0.0);
    }

    #[test]
    fn test_fresnel_radius_f32() {
        assert_relative_eq!(fresnel_radius(1_000.0_f32, 2_400.0), 0.176_771_5, epsilon = 1e-6);
    }
}
