use crate::utils::DEFAULT_SOLVER_CONSTANTS;

/// Tunable constants shared by the GJK intersection tester and the
/// suspension articulation solver.
#[derive(Debug, Clone, Copy)]
pub struct SolverConstants {
    /// Plane-progress tolerance used by every "is this point on the positive
    /// side" test in GJK. Shapes that merely touch within this tolerance
    /// register as non-overlapping, a deliberate bias against false positives
    /// on grazing contact.
    pub contact_epsilon: f64,
    /// Upper bound on GJK simplex refinement steps before the test gives up
    /// and reports degenerate geometry.
    pub max_gjk_iterations: usize,
    /// Number of bisection refinement steps per suspension arm solve.
    pub bisection_steps: usize,
    /// Size of the initial upward probe of the arm angle search, in degrees.
    pub probe_angle_deg: f64,
    /// Spring-back rate of an unloaded arm, as a fraction of 90 degrees per
    /// second.
    pub torsion_bar_return_speed: f64,
}

impl Default for SolverConstants {
    fn default() -> Self {
        Self {
            contact_epsilon: 1.0e-4,
            max_gjk_iterations: 64,
            bisection_steps: 3,
            probe_angle_deg: 5.0,
            torsion_bar_return_speed: 3.0,
        }
    }
}

impl SolverConstants {
    pub fn new(
        contact_epsilon: Option<f64>,
        max_gjk_iterations: Option<usize>,
        bisection_steps: Option<usize>,
        probe_angle_deg: Option<f64>,
        torsion_bar_return_speed: Option<f64>,
    ) -> Self {
        let default = DEFAULT_SOLVER_CONSTANTS;
        Self {
            contact_epsilon: contact_epsilon.unwrap_or(default.contact_epsilon),
            max_gjk_iterations: max_gjk_iterations.unwrap_or(default.max_gjk_iterations),
            bisection_steps: bisection_steps.unwrap_or(default.bisection_steps),
            probe_angle_deg: probe_angle_deg.unwrap_or(default.probe_angle_deg),
            torsion_bar_return_speed: torsion_bar_return_speed.unwrap_or(default.torsion_bar_return_speed),
        }
    }
}
