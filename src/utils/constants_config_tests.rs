use crate::utils::{approach, SolverConstants, DEFAULT_SOLVER_CONSTANTS};

#[test]
fn test_default_constants_match_const() {
    let defaults = SolverConstants::default();

    assert_eq!(defaults.contact_epsilon, DEFAULT_SOLVER_CONSTANTS.contact_epsilon);
    assert_eq!(defaults.max_gjk_iterations, DEFAULT_SOLVER_CONSTANTS.max_gjk_iterations);
    assert_eq!(defaults.bisection_steps, DEFAULT_SOLVER_CONSTANTS.bisection_steps);
    assert_eq!(defaults.probe_angle_deg, DEFAULT_SOLVER_CONSTANTS.probe_angle_deg);
    assert_eq!(defaults.torsion_bar_return_speed, DEFAULT_SOLVER_CONSTANTS.torsion_bar_return_speed);
}

#[test]
fn test_new_overrides_only_given_fields() {
    let constants = SolverConstants::new(Some(1.0e-6), None, Some(5), None, None);

    assert_eq!(constants.contact_epsilon, 1.0e-6);
    assert_eq!(constants.max_gjk_iterations, DEFAULT_SOLVER_CONSTANTS.max_gjk_iterations);
    assert_eq!(constants.bisection_steps, 5);
    assert_eq!(constants.probe_angle_deg, DEFAULT_SOLVER_CONSTANTS.probe_angle_deg);
}

#[test]
fn test_approach_never_overshoots() {
    let mut angle = 7.0;

    for _ in 0..10 {
        angle = approach(angle, 0.0, 2.5);
        assert!(angle >= 0.0);
    }

    assert_eq!(angle, 0.0);
}
