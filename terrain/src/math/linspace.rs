use num_traits::{Float, FromPrimitive};

/// Returns `n` evenly spaced values from `y_start` to `y_end`,
/// inclusive of both ends.
pub fn linspace<T>(y_start: T, y_end: T, n: usize) -> impl Iterator<Item = T>
where
    T: Float + FromPrimitive,
{
    let dy = if n > 1 {
        (y_end - y_start) / T::from_usize(n - 1).unwrap()
    } else {
        T::zero()
    };
    (0..n).map(move |x| {
        if x + 1 == n && n > 1 {
            // Land exactly on `y_end` instead of accumulating error.
            y_end
        } else {
            y_start + T::from_usize(x).unwrap() * dy
        }
    })
}

/// Linear interpolation between `a` and `b` at fraction `t`.
#[inline]
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + t * (b - a)
}
