use log::error;

use crate::intersections::{
    cross_product, dot_product, negate_vector, normalize_vector, perpendicular_vector,
    vector_magnitude,
};
use crate::models::{Collider, Tetrahedron};
use crate::utils::errors::CollisionError;
use crate::utils::{SolverConstants, DEFAULT_SOLVER_CONSTANTS};

/// Support point of the Minkowski difference `first - second` in the given
/// world space unit direction.
fn minkowski_support(
    first: &Collider,
    second: &Collider,
    direction: (f64, f64, f64),
) -> Result<(f64, f64, f64), CollisionError> {
    let p1 = first.furthest_point(direction)?;
    let p2 = second.furthest_point(negate_vector(direction))?;

    Ok((p1.0 - p2.0, p1.1 - p2.1, p1.2 - p2.2))
}

/// GJK (Gilbert-Johnson-Keerthi) intersection test between two convex
/// colliders.
///
/// Builds a tetrahedron simplex on the Minkowski difference of the two
/// shapes and refines it toward the origin; the shapes overlap iff the
/// difference contains the origin. The test is symmetric:
/// `try_intersects(a, b) == try_intersects(b, a)`.
///
/// Shapes that merely touch within `constants.contact_epsilon` register as
/// non-overlapping.
///
/// # Returns
/// `Ok(true)` if the colliders overlap, `Ok(false)` otherwise.
///
/// # Errors
/// * [`CollisionError::UnsupportedShape`] if either collider has no support
///   mapping; no partial result is produced.
/// * [`CollisionError::DegenerateGeometry`] if the simplex collapses or the
///   iteration bound is exhausted without a conclusive answer. Callers
///   should treat this as "no intersection".
pub fn try_intersects(
    first: &Collider,
    second: &Collider,
    constants: &SolverConstants,
) -> Result<bool, CollisionError> {
    let epsilon = constants.contact_epsilon;

    // Seed direction between the body centers, with a fallback for
    // coincident poses
    let mut direction = {
        let p1 = first.world_position();
        let p2 = second.world_position();
        let between = (p2.0 - p1.0, p2.1 - p1.1, p2.2 - p1.2);

        normalize_vector(between).unwrap_or((1.0, 0.0, 0.0))
    };

    let a = minkowski_support(first, second, direction)?;

    // A support point this close to the origin means grazing contact, which
    // the epsilon bias rejects
    if vector_magnitude(a) <= epsilon {
        return Ok(false);
    }

    direction = normalize_vector(negate_vector(a)).unwrap_or((1.0, 0.0, 0.0));

    let b = minkowski_support(first, second, direction)?;

    if dot_product(direction, b) <= epsilon {
        return Ok(false);
    }

    // Direction perpendicular to the edge AB, biased toward the origin. When
    // the origin lies on the line through AB the triple product vanishes and
    // any perpendicular of the edge works.
    let ab = (b.0 - a.0, b.1 - a.1, b.2 - a.2);
    direction = match normalize_vector(cross_product(cross_product(ab, direction), ab)) {
        Ok(dir) => dir,
        Err(_) => {
            let perp = perpendicular_vector(ab);
            if dot_product(perp, negate_vector(a)) >= 0.0 {
                perp
            } else {
                negate_vector(perp)
            }
        }
    };

    let c = minkowski_support(first, second, direction)?;

    if dot_product(direction, c) <= epsilon {
        return Ok(false);
    }

    // Triangle normal, flipped away from A so the fourth vertex lands on the
    // origin's side
    let ac = (c.0 - a.0, c.1 - a.1, c.2 - a.2);
    direction = normalize_vector(cross_product(ab, ac))
        .map_err(|_| CollisionError::DegenerateGeometry)?;

    if dot_product(direction, a) > epsilon {
        direction = negate_vector(direction);
    }

    let d = minkowski_support(first, second, direction)?;

    if dot_product(direction, d) <= epsilon {
        return Ok(false);
    }

    let mut simplex = Tetrahedron::new(a, b, c, d);

    if simplex.contains_origin() {
        return Ok(true);
    }

    for _ in 0..constants.max_gjk_iterations {
        let (normal, opposite_index) = simplex.closest_face_to_origin();
        let direction = normalize_vector(normal)
            .map_err(|_| CollisionError::DegenerateGeometry)?;

        let support = minkowski_support(first, second, direction)?;

        // No progress past the closest face means the origin is unreachable
        if dot_product(direction, support) <= epsilon
            || simplex.contains_vertex(support, epsilon * epsilon)
        {
            return Ok(false);
        }

        simplex.points[opposite_index] = support;

        if simplex.contains_origin() {
            return Ok(true);
        }
    }

    Err(CollisionError::DegenerateGeometry)
}

/// Boolean intersection test with the fail-open error policy: any failed
/// query is logged and reported as "no intersection", leaving other queries
/// unaffected.
pub fn intersects_with(first: &Collider, second: &Collider, constants: &SolverConstants) -> bool {
    match try_intersects(first, second, constants) {
        Ok(result) => result,
        Err(CollisionError::DegenerateGeometry) => {
            error!("Intersection test failed to converge, assuming no intersection");
            false
        }
        Err(e) => {
            error!("Intersection test failed: {}", e);
            false
        }
    }
}

/// Tests two colliders for intersection with the default solver constants.
///
/// The order of the operands doesn't matter, that is
/// `intersects(a, b) == intersects(b, a)`.
///
/// # Example
/// ```
/// use panzer_physics::intersections::intersects;
/// use panzer_physics::models::Collider;
///
/// let a = Collider::new_sphere((0.0, 0.0, 0.0), 1.0);
/// let b = Collider::new_sphere((1.5, 0.0, 0.0), 1.0);
///
/// assert!(intersects(&a, &b));
/// ```
pub fn intersects(first: &Collider, second: &Collider) -> bool {
    intersects_with(first, second, &DEFAULT_SOLVER_CONSTANTS)
}
