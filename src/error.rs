//! Placement failures.

use thiserror::Error;

use crate::brick::BrickSize;

/// Result type alias for placement operations.
pub type Result<T> = std::result::Result<T, PlacementError>;

/// Ways adding a brick can fail. Moves never fail; they are rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    /// The directed slot search ran out of offsets.
    #[error("no space available for new brick ({size})")]
    NoSlotFound { size: BrickSize },

    /// Every sampled random position collided.
    #[error("random placement abandoned after {attempts} attempts ({size})")]
    RandomPlacementAbandoned { attempts: u32, size: BrickSize },
}
