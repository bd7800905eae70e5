use crate::intersections::{dot_product, vector_magnitude};
use crate::models::{Collider, Quaternion};
use crate::suspension::RoadWheel;
use crate::utils::errors::CollisionError;
use crate::utils::{approach, MAX_ARM_ANGLE_DEG};

/// A pivoting suspension arm connecting a road wheel to the hull
///
/// The arm rotates around the wheel axis at its pivot; positive angles swing
/// the wheel away from the terrain. Mirrored arms on the two sides of the
/// vehicle rotate in opposite world directions, captured once at construction
/// by the side sign.
#[derive(Debug, Clone)]
pub struct SuspensionArm {
    /// World position of the arm's pivot
    pub pivot: (f64, f64, f64),
    /// Wheel carried at the free end of the arm
    pub wheel: RoadWheel,
    /// Track width, which the wheel's swept cylinder spans
    pub track_width: f64,
    /// Pivot-to-wheel-center offset at angle 0, from the child bone offset
    rest_offset: (f64, f64, f64),
    arm_length: f64,
    /// +1 or -1 depending on which side of the vehicle the arm sits on
    side: f64,
    /// Current rotation, degrees, always within [0, 90]
    angle_deg: f64,
}

impl SuspensionArm {
    /// Creates a suspension arm at `pivot` carrying `wheel`.
    ///
    /// # Arguments
    /// * `pivot` - World position of the arm pivot.
    /// * `rest_offset` - Offset from the pivot to the wheel center with the
    ///   arm at rest; its length becomes the arm length.
    /// * `wheel` - The attached road wheel. Its axis must be unit length.
    /// * `track_width` - Width of the track running over the wheel.
    /// * `vehicle_right` - The vehicle's lateral axis, used once to derive
    ///   the side sign.
    ///
    /// # Errors
    /// Returns [`CollisionError::InvalidArgument`] for a degenerate arm or
    /// wheel axis.
    pub fn new(
        pivot: (f64, f64, f64),
        rest_offset: (f64, f64, f64),
        wheel: RoadWheel,
        track_width: f64,
        vehicle_right: (f64, f64, f64),
    ) -> Result<Self, CollisionError> {
        let arm_length = vector_magnitude(rest_offset);
        if arm_length < 1e-10 {
            return Err(CollisionError::InvalidArgument("suspension arm has zero length"));
        }
        if vector_magnitude(wheel.axis) < 1e-10 {
            return Err(CollisionError::InvalidArgument("wheel axis is a zero vector"));
        }
        if track_width <= 0.0 {
            return Err(CollisionError::InvalidArgument("track width must be positive"));
        }

        let side = if dot_product(wheel.axis, vehicle_right) >= 0.0 { 1.0 } else { -1.0 };

        let mut arm = Self {
            pivot,
            wheel,
            track_width,
            rest_offset,
            arm_length,
            side,
            angle_deg: 0.0,
        };
        arm.publish_wheel_center();

        Ok(arm)
    }

    pub fn angle(&self) -> f64 {
        self.angle_deg
    }

    pub fn arm_length(&self) -> f64 {
        self.arm_length
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    /// Sets the arm rotation, clamped to [0, 90] degrees, and republishes the
    /// wheel center.
    pub fn set_angle(&mut self, angle_deg: f64) {
        self.angle_deg = angle_deg.clamp(0.0, MAX_ARM_ANGLE_DEG);
        self.publish_wheel_center();
    }

    /// Relaxes the arm toward its rest angle at `rate * 90` degrees per
    /// second — the torsion bar springing back once the wheel leaves the
    /// ground.
    pub fn relax_toward_rest(&mut self, rate: f64, delta_time: f64) {
        let relaxed = approach(self.angle_deg, 0.0, rate * MAX_ARM_ANGLE_DEG * delta_time);
        self.set_angle(relaxed);
    }

    /// World space wheel center with the arm rotated to `angle_deg`.
    pub fn wheel_center_at(&self, angle_deg: f64) -> (f64, f64, f64) {
        let angle = (angle_deg * self.side).to_radians();
        let rotation = Quaternion::from_axis_angle(self.wheel.axis, angle);
        let swung = rotation.rotate_point(self.rest_offset);

        (
            self.pivot.0 + swung.0,
            self.pivot.1 + swung.1,
            self.pivot.2 + swung.2,
        )
    }

    /// The wheel's swept volume with the arm rotated to `angle_deg`: a
    /// cylinder of the wheel's radius spanning the track width, centered on
    /// the wheel axis.
    pub fn swept_cylinder_at(&self, angle_deg: f64) -> Collider {
        Collider::swept_cylinder(
            self.wheel_center_at(angle_deg),
            self.wheel.axis,
            self.wheel.radius,
            self.track_width,
        )
    }

    fn publish_wheel_center(&mut self) {
        self.wheel.center = self.wheel_center_at(self.angle_deg);
    }
}
