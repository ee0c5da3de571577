//! Composite cache keys
//!
//! The caches are keyed by the full set of classification axes for a query.
//! Using struct keys instead of bit-packed integers makes two distinct axis
//! combinations unequal by construction; there is no bit range to overlap.

use crate::types::{BackendGeneration, CameraFacing, SizeFor};
use serde::{Deserialize, Serialize};

/// Cache key for a size query: one value from each of the three axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeKey {
    pub facing: CameraFacing,
    pub size_for: SizeFor,
    pub generation: BackendGeneration,
}

impl SizeKey {
    pub fn new(facing: CameraFacing, size_for: SizeFor, generation: BackendGeneration) -> Self {
        Self {
            facing,
            size_for,
            generation,
        }
    }
}

/// Cache key for a zoom-ratio query.
///
/// Zoom ratios are only reported by the legacy backend, so the generation
/// axis is omitted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RatioKey {
    pub facing: CameraFacing,
}

impl RatioKey {
    pub fn new(facing: CameraFacing) -> Self {
        Self { facing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_axes_produce_identical_keys() {
        let a = SizeKey::new(
            CameraFacing::Rear,
            SizeFor::Preview,
            BackendGeneration::Legacy,
        );
        let b = SizeKey::new(
            CameraFacing::Rear,
            SizeFor::Preview,
            BackendGeneration::Legacy,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_any_axis_change_produces_distinct_key() {
        let base = SizeKey::new(
            CameraFacing::Rear,
            SizeFor::Preview,
            BackendGeneration::Legacy,
        );
        assert_ne!(
            base,
            SizeKey::new(
                CameraFacing::Front,
                SizeFor::Preview,
                BackendGeneration::Legacy
            )
        );
        assert_ne!(
            base,
            SizeKey::new(
                CameraFacing::Rear,
                SizeFor::Video,
                BackendGeneration::Legacy
            )
        );
        assert_ne!(
            base,
            SizeKey::new(
                CameraFacing::Rear,
                SizeFor::Preview,
                BackendGeneration::Structured
            )
        );
    }
}
