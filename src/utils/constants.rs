use crate::utils;

pub const DEFAULT_SOLVER_CONSTANTS: utils::SolverConstants = utils::SolverConstants {
    contact_epsilon: 1.0e-4,
    max_gjk_iterations: 64,
    bisection_steps: 3,
    probe_angle_deg: 5.0,
    torsion_bar_return_speed: 3.0,
};

/// Hard ceiling for a suspension arm's rotation, in degrees.
pub const MAX_ARM_ANGLE_DEG: f64 = 90.0;
