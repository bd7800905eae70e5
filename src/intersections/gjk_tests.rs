use std::f64::consts::PI;

use crate::intersections::{intersects, intersects_with, try_intersects};
use crate::models::{Collider, Quaternion};
use crate::utils::DEFAULT_SOLVER_CONSTANTS;

#[test]
fn test_overlapping_spheres() {
    let a = Collider::new_sphere((0.0, 0.0, 0.0), 1.0);
    let b = Collider::new_sphere((1.5, 0.0, 0.0), 1.0);

    assert!(intersects(&a, &b));
}

#[test]
fn test_separated_spheres() {
    let a = Collider::new_sphere((0.0, 0.0, 0.0), 1.0);
    let b = Collider::new_sphere((4.0, 0.0, 0.0), 1.0);

    assert!(!intersects(&a, &b));
}

#[test]
fn test_touching_spheres_do_not_overlap() {
    // Exact surface contact registers as non-overlapping.
    let a = Collider::new_sphere((0.0, 0.0, 0.0), 1.0);
    let b = Collider::new_sphere((2.0, 0.0, 0.0), 1.0);

    assert!(!intersects(&a, &b));
}

#[test]
fn test_penetration_shallower_than_epsilon_does_not_overlap() {
    let epsilon = DEFAULT_SOLVER_CONSTANTS.contact_epsilon;
    let a = Collider::new_sphere((0.0, 0.0, 0.0), 1.0);
    let b = Collider::new_sphere((2.0 - epsilon / 2.0, 0.0, 0.0), 1.0);

    assert!(!intersects(&a, &b));
}

#[test]
fn test_box_face_contact() {
    let epsilon = DEFAULT_SOLVER_CONSTANTS.contact_epsilon;
    let a = Collider::new_box((0.0, 0.0, 0.0), Quaternion::identity(), 2.0, 2.0, 2.0);

    // Faces exactly flush: no overlap.
    let b = Collider::new_box((2.0, 0.0, 0.0), Quaternion::identity(), 2.0, 2.0, 2.0);
    assert!(!intersects(&a, &b));

    // Pushed in past the contact bias: overlap.
    let c = Collider::new_box((2.0 - 2.0 * epsilon, 0.0, 0.0), Quaternion::identity(), 2.0, 2.0, 2.0);
    assert!(intersects(&a, &c));
}

#[test]
fn test_rotated_box_against_sphere() {
    // An eighth turn around Z swings a corner of the box toward the sphere:
    // the corner reaches sqrt(2) along X where a face would only reach 1.
    let orientation = Quaternion::from_axis_angle((0.0, 0.0, 1.0), PI / 4.0);
    let rotated = Collider::new_box((0.0, 0.0, 0.0), orientation, 2.0, 2.0, 2.0);

    let near = Collider::new_sphere((2.0, 0.0, 0.0), 1.0);
    assert!(intersects(&rotated, &near));

    let far = Collider::new_sphere((2.6, 0.0, 0.0), 1.0);
    assert!(!intersects(&rotated, &far));
}

#[test]
fn test_cylinder_against_box() {
    // Ground slab with its top face at z = 0.
    let ground = Collider::new_box((0.0, 0.0, -5.0), Quaternion::identity(), 100.0, 100.0, 10.0);

    // Wheel volume dipping 0.1 below the surface.
    let sunk = Collider::swept_cylinder((1.0, 0.0, 0.4), (0.0, -1.0, 0.0), 0.5, 0.4);
    assert!(intersects(&ground, &sunk));

    // Same wheel lifted clear.
    let clear = Collider::swept_cylinder((1.0, 0.0, 0.6), (0.0, -1.0, 0.0), 0.5, 0.4);
    assert!(!intersects(&ground, &clear));
}

#[test]
fn test_contained_shape_overlaps() {
    // Coincident centers exercise the seed direction fallback.
    let outer = Collider::new_sphere((0.0, 0.0, 0.0), 2.0);
    let inner = Collider::new_sphere((0.0, 0.0, 0.0), 0.5);
    assert!(intersects(&outer, &inner));

    let case = Collider::new_box((0.0, 0.0, 0.0), Quaternion::identity(), 4.0, 4.0, 4.0);
    assert!(intersects(&case, &inner));
}

#[test]
fn test_symmetry() {
    let orientation = Quaternion::from_axis_angle((1.0, 1.0, 0.0), 0.35);
    let pairs = [
        (
            Collider::new_sphere((0.0, 0.0, 0.0), 1.0),
            Collider::new_sphere((1.5, 0.3, -0.2), 1.0),
        ),
        (
            Collider::new_box((0.1, 0.0, 0.0), orientation, 2.0, 1.0, 3.0),
            Collider::new_sphere((1.2, 0.4, 0.0), 0.8),
        ),
        (
            Collider::new_box((0.0, 0.0, 0.0), Quaternion::identity(), 2.0, 2.0, 2.0),
            Collider::swept_cylinder((1.2, 0.0, 0.7), (0.0, -1.0, 0.0), 0.5, 0.4),
        ),
        (
            Collider::new_sphere((5.0, 5.0, 5.0), 1.0),
            Collider::new_box((0.0, 0.0, 0.0), orientation, 2.0, 2.0, 2.0),
        ),
    ];

    for (first, second) in &pairs {
        assert_eq!(intersects(first, second), intersects(second, first));
    }
}

#[test]
fn test_terminates_on_flat_near_contact_geometry() {
    // Two large, nearly coplanar slabs with a hair of clearance: the flat
    // Minkowski difference stresses the progress checks but still resolves
    // to no intersection without exhausting the iteration bound.
    let a = Collider::new_box((0.0, 0.0, 0.0), Quaternion::identity(), 10.0, 10.0, 0.01);
    let b = Collider::new_box((0.0, 0.0, 0.02), Quaternion::identity(), 10.0, 10.0, 0.01);
    assert!(!intersects(&a, &b));

    // The same slabs with one tilted a fraction of a degree.
    let tilt = Quaternion::from_axis_angle((0.0, 1.0, 0.0), 0.002);
    let c = Collider::new_box((0.0, 0.0, 0.03), tilt, 10.0, 10.0, 0.01);
    assert!(!intersects(&a, &c));
}

#[test]
fn test_unsupported_shape_is_an_error() {
    let sphere = Collider::new_sphere((0.0, 0.0, 0.0), 1.0);
    let mesh = Collider::Unsupported {
        label: "mesh".to_string(),
    };

    assert!(try_intersects(&sphere, &mesh, &DEFAULT_SOLVER_CONSTANTS).is_err());
    assert!(try_intersects(&mesh, &sphere, &DEFAULT_SOLVER_CONSTANTS).is_err());

    // The fail-open wrapper reports no intersection instead of propagating.
    assert!(!intersects(&sphere, &mesh));
}

#[test]
fn test_custom_constants() {
    // A coarse contact epsilon rejects penetrations the default accepts.
    let coarse = crate::utils::SolverConstants::new(Some(0.05), None, None, None, None);
    let a = Collider::new_sphere((0.0, 0.0, 0.0), 1.0);
    let b = Collider::new_sphere((1.99, 0.0, 0.0), 1.0);

    assert!(intersects(&a, &b));
    assert!(!intersects_with(&a, &b, &coarse));
}
