use std::fmt;
use std::error::Error;

/// Represents errors that can occur during intersection testing and
/// suspension solving.
///
/// All of these are local and non-fatal: a failed query degrades a single
/// shape pair toward "no contact" without affecting other arms or colliders.
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionError {
    /// Indicates a missing or malformed input (e.g. a zero-length arm or a
    /// zero rotation axis). Raised before any computation happens.
    InvalidArgument(&'static str),
    /// Indicates a collider kind with no support-mapping implementation.
    /// Carries the collider's diagnostic label.
    UnsupportedShape(String),
    /// Indicates that the GJK iteration bound was exhausted without a
    /// conclusive answer, or that the simplex collapsed mid-search.
    DegenerateGeometry,
}

impl fmt::Display for CollisionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CollisionError::InvalidArgument(what) => write!(f, "Invalid argument: {}", what),
            CollisionError::UnsupportedShape(label) => write!(f, "Unsupported collider shape: {}", label),
            CollisionError::DegenerateGeometry => write!(f, "Degenerate geometry in intersection test"),
        }
    }
}

impl Error for CollisionError {}
