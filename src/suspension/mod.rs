mod wheel;
mod arm;
mod solver;

pub use wheel::*;
pub use arm::*;
pub use solver::*;
