use crate::intersections::{cross_product, dot_product, vector_magnitude};

/// Quaternion representation for collider poses and arm rotations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    /// Creates a new identity quaternion (no rotation)
    pub fn identity() -> Self {
        Self {
            w: 1.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Creates a quaternion from axis-angle representation
    pub fn from_axis_angle(axis: (f64, f64, f64), angle: f64) -> Self {
        let half_angle = angle / 2.0;
        let sin_half = half_angle.sin();
        let (ax, ay, az) = axis;
        let magnitude = (ax * ax + ay * ay + az * az).sqrt();

        if magnitude < 1e-10 {
            return Quaternion::identity();
        }

        let nx = ax / magnitude;
        let ny = ay / magnitude;
        let nz = az / magnitude;

        Quaternion {
            w: half_angle.cos(),
            x: nx * sin_half,
            y: ny * sin_half,
            z: nz * sin_half,
        }
    }

    /// Creates the rotation that carries the local +X axis onto `forward`.
    ///
    /// Used to pose cylinders, whose height extends along local +X. Falls
    /// back to the identity for a zero `forward`, and to a half turn around
    /// +Z when `forward` points along -X.
    pub fn looking_along(forward: (f64, f64, f64)) -> Self {
        let magnitude = vector_magnitude(forward);
        if magnitude < 1e-10 {
            return Quaternion::identity();
        }

        let dir = (forward.0 / magnitude, forward.1 / magnitude, forward.2 / magnitude);
        let x_axis = (1.0, 0.0, 0.0);
        let cos_angle = dot_product(x_axis, dir);

        if cos_angle >= 1.0 - 1e-10 {
            return Quaternion::identity();
        }
        if cos_angle <= -1.0 + 1e-10 {
            return Quaternion::from_axis_angle((0.0, 0.0, 1.0), std::f64::consts::PI);
        }

        let axis = cross_product(x_axis, dir);
        Quaternion::from_axis_angle(axis, cos_angle.acos())
    }

    /// Returns the length/magnitude of the quaternion
    pub fn magnitude(&self) -> f64 {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns a normalized version of the quaternion
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag < 1e-10 {
            return Quaternion::identity();
        }
        Quaternion {
            w: self.w / mag,
            x: self.x / mag,
            y: self.y / mag,
            z: self.z / mag,
        }
    }

    /// Multiplies two quaternions (composition of rotations)
    pub fn multiply(&self, other: &Quaternion) -> Quaternion {
        Quaternion {
            w: self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
            x: self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            y: self.w * other.y - self.x * other.z + self.y * other.w + self.z * other.x,
            z: self.w * other.z + self.x * other.y - self.y * other.x + self.z * other.w,
        }
    }

    /// Returns the conjugate of the quaternion
    pub fn conjugate(&self) -> Quaternion {
        Quaternion {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// Returns the inverse of the quaternion
    pub fn inverse(&self) -> Quaternion {
        let mag_squared = self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z;
        if mag_squared < 1e-10 {
            return Quaternion::identity();
        }

        let conj = self.conjugate();
        Quaternion {
            w: conj.w / mag_squared,
            x: conj.x / mag_squared,
            y: conj.y / mag_squared,
            z: conj.z / mag_squared,
        }
    }

    /// Rotates a point using the quaternion
    pub fn rotate_point(&self, point: (f64, f64, f64)) -> (f64, f64, f64) {
        // Convert the point to a quaternion with w=0
        let p = Quaternion {
            w: 0.0,
            x: point.0,
            y: point.1,
            z: point.2,
        };

        // Apply rotation: q * p * q^-1
        let q_normalized = self.normalized();
        let q_inv = q_normalized.inverse();
        let rotated = q_normalized.multiply(&p).multiply(&q_inv);

        (rotated.x, rotated.y, rotated.z)
    }
}
