/// Calculates the cross product of two 3D vectors.
///
/// # Arguments
/// * `v1` - The first vector as a tuple (x, y, z).
/// * `v2` - The second vector as a tuple (x, y, z).
///
/// # Returns
/// The cross product as a tuple (x, y, z).
///
/// # Example
/// ```
/// use panzer_physics::intersections::cross_product;
///
/// let v1 = (1.0, 0.0, 0.0);
/// let v2 = (0.0, 1.0, 0.0);
/// let result = cross_product(v1, v2);
///
/// assert_eq!(result, (0.0, 0.0, 1.0));
/// ```
pub fn cross_product(v1: (f64, f64, f64), v2: (f64, f64, f64)) -> (f64, f64, f64) {
    (
        v1.1 * v2.2 - v1.2 * v2.1,
        v1.2 * v2.0 - v1.0 * v2.2,
        v1.0 * v2.1 - v1.1 * v2.0
    )
}

/// Calculates the dot product of two 3D vectors.
///
/// # Arguments
/// * `v1` - The first vector as a tuple (x, y, z).
/// * `v2` - The second vector as a tuple (x, y, z).
///
/// # Returns
/// The dot product as a scalar.
///
/// # Example
/// ```
/// use panzer_physics::intersections::dot_product;
///
/// let v1 = (1.0, 2.0, 3.0);
/// let v2 = (4.0, 5.0, 6.0);
/// let result = dot_product(v1, v2);
///
/// assert_eq!(result, 32.0); // 1*4 + 2*5 + 3*6 = 32
/// ```
pub fn dot_product(v1: (f64, f64, f64), v2: (f64, f64, f64)) -> f64 {
    v1.0 * v2.0 + v1.1 * v2.1 + v1.2 * v2.2
}

/// Calculates the vector magnitude (length) of a 3D vector.
///
/// # Arguments
/// * `v` - The vector as a tuple (x, y, z).
///
/// # Returns
/// The magnitude of the vector.
pub fn vector_magnitude(v: (f64, f64, f64)) -> f64 {
    (v.0 * v.0 + v.1 * v.1 + v.2 * v.2).sqrt()
}

/// Normalizes a 3D vector (makes it a unit vector).
///
/// # Arguments
/// * `v` - The vector to normalize as a tuple (x, y, z).
///
/// # Returns
/// The normalized vector as a tuple (x, y, z).
///
/// # Errors
/// Returns an error if the input is a zero vector.
///
/// # Example
/// ```
/// use panzer_physics::intersections::normalize_vector;
///
/// let v = (3.0, 0.0, 4.0);
/// let normalized = normalize_vector(v).unwrap();
///
/// assert!((normalized.0 - 0.6).abs() < 1e-10);
/// assert!((normalized.1 - 0.0).abs() < 1e-10);
/// assert!((normalized.2 - 0.8).abs() < 1e-10);
/// ```
pub fn normalize_vector(v: (f64, f64, f64)) -> Result<(f64, f64, f64), &'static str> {
    let magnitude = vector_magnitude(v);

    if magnitude == 0.0 {
        return Err("Cannot normalize a zero vector");
    }

    Ok((v.0 / magnitude, v.1 / magnitude, v.2 / magnitude))
}

/// returns the inverse of the vector
pub fn negate_vector(v: (f64, f64, f64)) -> (f64, f64, f64) {
    (-v.0, -v.1, -v.2)
}

/// Squared distance between two points.
pub fn distance_squared(a: (f64, f64, f64), b: (f64, f64, f64)) -> f64 {
    let diff = (a.0 - b.0, a.1 - b.1, a.2 - b.2);
    dot_product(diff, diff)
}

/// Returns a unit vector perpendicular to the input vector, crossing against
/// the axis with the smallest component to keep the result well conditioned.
pub fn perpendicular_vector(v: (f64, f64, f64)) -> (f64, f64, f64) {
    let crossed = if v.0.abs() <= v.1.abs() && v.0.abs() <= v.2.abs() {
        cross_product(v, (1.0, 0.0, 0.0))
    } else if v.1.abs() <= v.0.abs() && v.1.abs() <= v.2.abs() {
        cross_product(v, (0.0, 1.0, 0.0))
    } else {
        cross_product(v, (0.0, 0.0, 1.0))
    };

    normalize_vector(crossed)
        .expect("Could not get perpendicular vector")
}
