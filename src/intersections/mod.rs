mod vector_ops;
mod gjk;

pub use vector_ops::*;
pub use gjk::*;

#[cfg(test)]
mod gjk_tests;
