//! Errors raised when building or editing a scene.

use core::fmt;

/// Rejected inputs. The simulation step itself never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// A particle handle is stale or was never issued by this scene.
    ParticleNotFound,
    /// A constraint needs two distinct endpoints.
    SelfLink,
    /// Grid rows and columns must both be non-zero.
    InvalidGridDimensions { rows: usize, cols: usize },
    /// Grid spacing must be positive and finite.
    InvalidSpacing,
    /// Pinning the top row needs a non-zero stride.
    InvalidPinStride,
    /// Damping must be in (0, 1].
    InvalidDamping,
    /// Bounce must be in [0, 1].
    InvalidBounce,
    /// Bounds need `min < max` on both axes.
    InvalidBounds,
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::ParticleNotFound => write!(f, "particle handle is stale or unknown"),
            PhysicsError::SelfLink => write!(f, "cannot link a particle to itself"),
            PhysicsError::InvalidGridDimensions { rows, cols } => {
                write!(f, "grid needs at least one row and column (got {}x{})", rows, cols)
            }
            PhysicsError::InvalidSpacing => write!(f, "grid spacing must be positive and finite"),
            PhysicsError::InvalidPinStride => write!(f, "pin stride must be at least 1"),
            PhysicsError::InvalidDamping => write!(f, "damping must be in (0, 1]"),
            PhysicsError::InvalidBounce => write!(f, "bounce must be in [0, 1]"),
            PhysicsError::InvalidBounds => write!(f, "bounds min must be below max on both axes"),
        }
    }
}
