use crate::intersections::{dot_product, vector_magnitude};
use crate::models::Quaternion;
use crate::utils::errors::CollisionError;

/// Radial components smaller than this are treated as purely axial when
/// support-mapping a cylinder.
const RADIAL_EPSILON: f64 = 1.0e-4;

/// A convex collider with its own world pose, usable in intersection tests
///
/// The set of shapes is closed: adding a new primitive means adding a variant
/// and its support-mapping case. `Unsupported` stands in for collider kinds
/// the broad-phase may hand over but which have no support mapping; every
/// query involving one fails with [`CollisionError::UnsupportedShape`].
#[derive(Debug, Clone)]
pub enum Collider {
    /// Axis box with half-extents (hx, hy, hz), rotated by `orientation`
    /// around `position`
    Box {
        position: (f64, f64, f64),
        orientation: Quaternion,
        half_extents: (f64, f64, f64),
    },
    /// Sphere centered at `position`
    Sphere {
        position: (f64, f64, f64),
        radius: f64,
    },
    /// Cylinder with its base disc centered at `position`, extending `height`
    /// along the pose's local +X axis
    Cylinder {
        position: (f64, f64, f64),
        orientation: Quaternion,
        radius: f64,
        height: f64,
    },
    /// Placeholder for collider kinds without a support mapping; carries a
    /// diagnostic label
    Unsupported { label: String },
}

impl Collider {
    /// Creates a new box collider from full extents, mirroring how physics
    /// scenes usually report box sizes
    pub fn new_box(position: (f64, f64, f64), orientation: Quaternion, width: f64, height: f64, depth: f64) -> Self {
        Collider::Box {
            position,
            orientation,
            half_extents: (width / 2.0, height / 2.0, depth / 2.0),
        }
    }

    /// Creates a new sphere collider
    pub fn new_sphere(position: (f64, f64, f64), radius: f64) -> Self {
        Collider::Sphere { position, radius }
    }

    /// Creates a new cylinder collider with its base at `position`
    pub fn new_cylinder(position: (f64, f64, f64), orientation: Quaternion, radius: f64, height: f64) -> Self {
        Collider::Cylinder { position, orientation, radius, height }
    }

    /// Creates a cylinder centered at `center` and extending symmetrically
    /// along `axis` — the swept volume of a spinning wheel of the given
    /// radius and width
    pub fn swept_cylinder(center: (f64, f64, f64), axis: (f64, f64, f64), radius: f64, width: f64) -> Self {
        let orientation = Quaternion::looking_along(axis);
        let half = width / 2.0;
        let base = (
            center.0 - axis.0 * half,
            center.1 - axis.1 * half,
            center.2 - axis.2 * half,
        );

        Collider::Cylinder { position: base, orientation, radius, height: width }
    }

    /// World position of the collider's pose origin
    ///
    /// Used to seed the intersection search; anything near the middle of the
    /// body speeds up convergence.
    pub fn world_position(&self) -> (f64, f64, f64) {
        match self {
            Collider::Box { position, .. } => *position,
            Collider::Sphere { position, .. } => *position,
            Collider::Cylinder { position, .. } => *position,
            Collider::Unsupported { .. } => (0.0, 0.0, 0.0),
        }
    }

    /// Returns the point on the collider's boundary that is furthest in the
    /// given direction — the support mapping of the shape.
    ///
    /// # Arguments
    /// * `direction` - World space unit direction vector.
    ///
    /// # Returns
    /// The world space support point, or [`CollisionError::UnsupportedShape`]
    /// for a collider kind with no support mapping.
    pub fn furthest_point(&self, direction: (f64, f64, f64)) -> Result<(f64, f64, f64), CollisionError> {
        match self {
            Collider::Box { position, orientation, half_extents } => {
                let local_dir = orientation.inverse().rotate_point(direction);

                let local_support = (
                    if local_dir.0 >= 0.0 { half_extents.0 } else { -half_extents.0 },
                    if local_dir.1 >= 0.0 { half_extents.1 } else { -half_extents.1 },
                    if local_dir.2 >= 0.0 { half_extents.2 } else { -half_extents.2 },
                );

                let rotated = orientation.rotate_point(local_support);
                Ok((position.0 + rotated.0, position.1 + rotated.1, position.2 + rotated.2))
            }
            Collider::Sphere { position, radius } => {
                Ok((
                    position.0 + direction.0 * radius,
                    position.1 + direction.1 * radius,
                    position.2 + direction.2 * radius,
                ))
            }
            Collider::Cylinder { position, orientation, radius, height } => {
                let local_dir = orientation.inverse().rotate_point(direction);
                let radial = (0.0, local_dir.1, local_dir.2);
                let radial_len_squared = radial.1 * radial.1 + radial.2 * radial.2;

                let local_support = if radial_len_squared <= RADIAL_EPSILON * RADIAL_EPSILON {
                    // Purely axial query: one of the cap centers
                    if local_dir.0 < 0.0 {
                        (0.0, 0.0, 0.0)
                    } else {
                        (*height, 0.0, 0.0)
                    }
                } else {
                    let radial_len = radial_len_squared.sqrt();
                    let rim_y = radial.1 / radial_len * radius;
                    let rim_z = radial.2 / radial_len * radius;

                    // Rim point on whichever cap the axial sign selects
                    if local_dir.0 <= RADIAL_EPSILON {
                        (0.0, rim_y, rim_z)
                    } else {
                        (*height, rim_y, rim_z)
                    }
                };

                let rotated = orientation.rotate_point(local_support);
                Ok((position.0 + rotated.0, position.1 + rotated.1, position.2 + rotated.2))
            }
            Collider::Unsupported { label } => Err(CollisionError::UnsupportedShape(label.clone())),
        }
    }

    /// Returns the point on the collider (boundary or interior) closest to
    /// the given world space point.
    ///
    /// Used by the suspension solver to prefilter nearby colliders and by the
    /// fast distance-probe solver.
    pub fn closest_point(&self, point: (f64, f64, f64)) -> Result<(f64, f64, f64), CollisionError> {
        match self {
            Collider::Box { position, orientation, half_extents } => {
                let offset = (point.0 - position.0, point.1 - position.1, point.2 - position.2);
                let local = orientation.inverse().rotate_point(offset);

                let clamped = (
                    local.0.clamp(-half_extents.0, half_extents.0),
                    local.1.clamp(-half_extents.1, half_extents.1),
                    local.2.clamp(-half_extents.2, half_extents.2),
                );

                let rotated = orientation.rotate_point(clamped);
                Ok((position.0 + rotated.0, position.1 + rotated.1, position.2 + rotated.2))
            }
            Collider::Sphere { position, radius } => {
                let offset = (point.0 - position.0, point.1 - position.1, point.2 - position.2);
                let distance = vector_magnitude(offset);

                if distance <= *radius || distance < 1e-10 {
                    return Ok(point);
                }

                let scale = radius / distance;
                Ok((
                    position.0 + offset.0 * scale,
                    position.1 + offset.1 * scale,
                    position.2 + offset.2 * scale,
                ))
            }
            Collider::Cylinder { position, orientation, radius, height } => {
                let offset = (point.0 - position.0, point.1 - position.1, point.2 - position.2);
                let local = orientation.inverse().rotate_point(offset);

                let axial = local.0.clamp(0.0, *height);
                let radial_len = (local.1 * local.1 + local.2 * local.2).sqrt();

                let (y, z) = if radial_len <= *radius {
                    (local.1, local.2)
                } else {
                    (local.1 / radial_len * radius, local.2 / radial_len * radius)
                };

                let rotated = orientation.rotate_point((axial, y, z));
                Ok((position.0 + rotated.0, position.1 + rotated.1, position.2 + rotated.2))
            }
            Collider::Unsupported { label } => Err(CollisionError::UnsupportedShape(label.clone())),
        }
    }

    /// Squared distance from the collider's closest point to the given point
    pub fn distance_squared_to(&self, point: (f64, f64, f64)) -> Result<f64, CollisionError> {
        let closest = self.closest_point(point)?;
        let diff = (closest.0 - point.0, closest.1 - point.1, closest.2 - point.2);

        Ok(dot_product(diff, diff))
    }
}
