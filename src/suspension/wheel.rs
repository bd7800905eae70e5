/// A road wheel attached to a suspension arm
///
/// The wheel's center follows the arm: the solver republishes it whenever the
/// arm angle changes. The spin angle belongs to the drivetrain and is never
/// read by the solver.
#[derive(Debug, Clone)]
pub struct RoadWheel {
    /// Wheel radius
    pub radius: f64,
    /// World space rotation axis, unit length, pointing out of the hull
    pub axis: (f64, f64, f64),
    /// World space center of the wheel
    pub center: (f64, f64, f64),
    /// Accumulated spin around `axis`, in radians
    pub spin_angle: f64,
}

impl RoadWheel {
    pub fn new(radius: f64, axis: (f64, f64, f64), center: (f64, f64, f64)) -> Self {
        Self {
            radius,
            axis,
            center,
            spin_angle: 0.0,
        }
    }

    /// Advances the spin angle for a given track travel distance. Called by
    /// the drivetrain, not the solver.
    pub fn advance_spin(&mut self, distance: f64) {
        if self.radius > 0.0 {
            self.spin_angle += distance / self.radius;
        }
    }
}
