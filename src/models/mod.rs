mod quaternion;
mod collider;
mod simplex;

pub use quaternion::*;
pub use collider::*;
pub use simplex::*;
