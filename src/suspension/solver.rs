use log::error;
use rayon::prelude::*;

use crate::intersections::{distance_squared, intersects_with};
use crate::models::Collider;
use crate::suspension::SuspensionArm;
use crate::utils::{SolverConstants, MAX_ARM_ANGLE_DEG};

/// Colliders from the broad-phase result close enough to an arm's swing
/// envelope to matter: anything whose closest point to the pivot is within
/// `(arm_length + wheel_radius)^2 + (track_width / 2)^2` squared distance.
///
/// Colliders that cannot answer a closest-point query are logged and
/// dropped; they only degrade themselves.
fn filter_near_colliders<'a>(arm: &SuspensionArm, colliders: &'a [Collider]) -> Vec<&'a Collider> {
    let reach = arm.arm_length() + arm.wheel.radius;
    let half_width = arm.track_width / 2.0;
    let bounds = reach * reach + half_width * half_width;

    colliders
        .iter()
        .filter(|collider| match collider.closest_point(arm.pivot) {
            Ok(closest) => distance_squared(closest, arm.pivot) <= bounds,
            Err(e) => {
                error!("Dropping collider from suspension solve: {}", e);
                false
            }
        })
        .collect()
}

/// True if the wheel's swept cylinder at the given arm angle overlaps any of
/// the nearby colliders. Failed pair queries count as no overlap and leave
/// the remaining colliders unaffected.
fn wheel_obstructed(
    arm: &SuspensionArm,
    angle_deg: f64,
    near_colliders: &[&Collider],
    constants: &SolverConstants,
) -> bool {
    let cylinder = arm.swept_cylinder_at(angle_deg);

    near_colliders
        .iter()
        .any(|&collider| intersects_with(&cylinder, collider, constants))
}

/// Solves a single suspension arm against the given broad-phase colliders.
///
/// A 1-D constrained search using the boolean intersection test as its
/// oracle:
/// 1. Unobstructed at the current angle: relax toward rest and stop.
/// 2. Obstructed even after the upward probe: bottom out at 90 degrees.
/// 3. Otherwise bisect between the obstructed low bound and the free high
///    bound, and settle on the last confirmed free bound — resting slightly
///    above the surface is preferred over any penetration.
pub fn solve_arm(
    arm: &mut SuspensionArm,
    colliders: &[Collider],
    constants: &SolverConstants,
    delta_time: f64,
) {
    let near_colliders = filter_near_colliders(arm, colliders);

    if !wheel_obstructed(arm, arm.angle(), &near_colliders, constants) {
        arm.relax_toward_rest(constants.torsion_bar_return_speed, delta_time);

        return;
    }

    let mut low_angle = arm.angle();
    let mut high_angle = (low_angle + constants.probe_angle_deg).min(MAX_ARM_ANGLE_DEG);

    if wheel_obstructed(arm, high_angle, &near_colliders, constants) {
        arm.set_angle(MAX_ARM_ANGLE_DEG);

        return;
    }

    for _ in 0..constants.bisection_steps {
        let midpoint = (low_angle + high_angle) / 2.0;

        if wheel_obstructed(arm, midpoint, &near_colliders, constants) {
            low_angle = midpoint;
        } else {
            high_angle = midpoint;
        }
    }

    arm.set_angle(low_angle);
}

/// Per-tick suspension solve over all arms.
///
/// Arms are independent: each one mutates only its own angle while the
/// broad-phase collider list is shared read-only, so the solve fans out
/// across arms and joins before returning. Results do not depend on
/// evaluation order.
pub fn solve_suspension(
    arms: &mut [SuspensionArm],
    colliders: &[Collider],
    constants: &SolverConstants,
    delta_time: f64,
) {
    arms.par_iter_mut()
        .for_each(|arm| solve_arm(arm, colliders, constants, delta_time));
}

/// Lower-fidelity variant of [`solve_arm`]: a single closed-form distance
/// probe instead of repeated intersection tests.
///
/// Derives the angle correction analytically from the deepest wheel
/// penetration via `asin(depth / arm_length)`. The arm's side sign turns the
/// correction into a world rotation when the wheel center is republished.
/// O(1) per collider but not guaranteed to match the bisection path;
/// [`solve_arm`] is the reference behavior.
pub fn solve_arm_fast(
    arm: &mut SuspensionArm,
    colliders: &[Collider],
    constants: &SolverConstants,
    delta_time: f64,
) {
    let near_colliders = filter_near_colliders(arm, colliders);
    let wheel_center = arm.wheel.center;
    let wheel_radius = arm.wheel.radius;

    let mut deviation = 0.0_f64;

    for collider in &near_colliders {
        let closest = match collider.closest_point(wheel_center) {
            Ok(point) => point,
            Err(e) => {
                error!("Skipping collider in fast suspension solve: {}", e);
                continue;
            }
        };

        let distance = distance_squared(closest, wheel_center).sqrt();
        let depth = wheel_radius - distance;

        if distance <= wheel_radius && depth > deviation {
            deviation = depth;
        }
    }

    if deviation > 0.01 && deviation < arm.arm_length() {
        let correction = (deviation / arm.arm_length()).asin().to_degrees();

        arm.set_angle(arm.angle() + correction);
    } else if deviation == 0.0 {
        arm.relax_toward_rest(constants.torsion_bar_return_speed, delta_time);
    }
}
