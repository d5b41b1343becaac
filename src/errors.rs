use std::fmt;
use std::error::Error;

/// Represents errors that can occur while configuring collision queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollisionError {
    /// Indicates an invalid search direction (e.g., the zero vector).
    InvalidDirection,
    /// Indicates an invalid iteration limit (e.g., a limit of zero).
    InvalidIterationLimit,
}

impl fmt::Display for CollisionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CollisionError::InvalidDirection => write!(f, "Invalid search direction"),
            CollisionError::InvalidIterationLimit => write!(f, "Invalid iteration limit"),
        }
    }
}

impl Error for CollisionError {}
