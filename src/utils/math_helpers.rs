/// Moves `current` toward `target` by at most `max_delta`, never overshooting.
///
/// # Example
/// ```
/// use panzer_physics::utils::approach;
///
/// assert_eq!(approach(10.0, 0.0, 4.0), 6.0);
/// assert_eq!(approach(2.0, 0.0, 4.0), 0.0);
/// assert_eq!(approach(-3.0, 0.0, 1.0), -2.0);
/// ```
#[inline]
pub fn approach(current: f64, target: f64, max_delta: f64) -> f64 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + max_delta.copysign(target - current)
    }
}
