//! Core value types for camera capability resolution
//!
//! These are pure data: size pairs, zoom ratios, and the closed enumerations
//! that classify a capability query (facing side, what the size is for, and
//! which backend generation answered it).

use crate::errors::CapabilityError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A hardware-supported media size as a (width, height) pair.
///
/// Two sizes are equal iff both components match. Lists of sizes preserve
/// the order the backend reported them in; no further ordering is implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Create a new size
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Map a backend's raw (width, height) listing into normalized sizes,
    /// preserving source order
    pub fn from_pairs(pairs: &[(u32, u32)]) -> Vec<Size> {
        pairs.iter().map(|&(w, h)| Size::new(w, h)).collect()
    }

    /// Total pixel count, useful for callers ranking candidate sizes
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Scale factor from integer hardware zoom units to a zoom ratio.
pub const ZOOM_UNIT_SCALE: f32 = 0.01;

/// A zoom ratio reported by the camera hardware.
///
/// Hardware reports zoom as integer units; the normalized ratio is the unit
/// scaled by [`ZOOM_UNIT_SCALE`], so a unit of 100 is a 1.0x ratio.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ZoomRatio(pub f32);

impl ZoomRatio {
    /// Convert an integer hardware zoom unit into a normalized ratio
    pub fn from_hardware_unit(unit: i32) -> Self {
        ZoomRatio(unit as f32 * ZOOM_UNIT_SCALE)
    }

    /// The ratio as a plain float
    pub fn value(&self) -> f32 {
        self.0
    }
}

impl fmt::Display for ZoomRatio {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

/// Which physical direction a camera sensor points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraFacing {
    Front,
    Rear,
}

impl CameraFacing {
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraFacing::Front => "front",
            CameraFacing::Rear => "rear",
        }
    }
}

impl TryFrom<i32> for CameraFacing {
    type Error = CapabilityError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CameraFacing::Front),
            1 => Ok(CameraFacing::Rear),
            other => Err(CapabilityError::InvalidArgument(format!(
                "unknown camera facing {}",
                other
            ))),
        }
    }
}

/// What a queried size is for: still capture, the preview stream, or video
/// recording. Each variant selects a different accessor group on the
/// capability source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeFor {
    Picture,
    Preview,
    Video,
}

impl SizeFor {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeFor::Picture => "picture",
            SizeFor::Preview => "preview",
            SizeFor::Video => "video",
        }
    }
}

impl TryFrom<i32> for SizeFor {
    type Error = CapabilityError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SizeFor::Picture),
            1 => Ok(SizeFor::Preview),
            2 => Ok(SizeFor::Video),
            other => Err(CapabilityError::InvalidArgument(format!(
                "unsupported size-for value {}",
                other
            ))),
        }
    }
}

/// Which of the two hardware-query API styles supplied the capability data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackendGeneration {
    /// The older parameter-bag style API
    Legacy,
    /// The newer structured capability-map API
    Structured,
}

impl BackendGeneration {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendGeneration::Legacy => "legacy",
            BackendGeneration::Structured => "structured",
        }
    }
}

impl TryFrom<i32> for BackendGeneration {
    type Error = CapabilityError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BackendGeneration::Legacy),
            1 => Ok(BackendGeneration::Structured),
            other => Err(CapabilityError::InvalidArgument(format!(
                "unknown backend generation {}",
                other
            ))),
        }
    }
}

/// An aspect ratio expressed as a reduced-or-not x:y pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AspectRatio {
    pub x: u32,
    pub y: u32,
}

impl AspectRatio {
    /// Create an aspect ratio of x:y
    pub fn of(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The ratio as a float (x / y)
    pub fn ratio(&self) -> f32 {
        self.x as f32 / self.y as f32
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

/// Default media kind produced by a capture session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    Picture,
    Video,
}

/// Default media quality preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaQuality {
    Lowest,
    Low,
    Medium,
    High,
    Highest,
}

/// Default flash behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlashMode {
    Auto,
    On,
    Off,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_equality() {
        assert_eq!(Size::new(1920, 1080), Size::new(1920, 1080));
        assert_ne!(Size::new(1920, 1080), Size::new(1080, 1920));
    }

    #[test]
    fn test_size_from_pairs_preserves_order() {
        let sizes = Size::from_pairs(&[(1920, 1080), (1280, 720), (640, 480)]);
        assert_eq!(sizes[0], Size::new(1920, 1080));
        assert_eq!(sizes[1], Size::new(1280, 720));
        assert_eq!(sizes[2], Size::new(640, 480));
    }

    #[test]
    fn test_zoom_ratio_scaling() {
        assert_eq!(ZoomRatio::from_hardware_unit(0).value(), 0.0);
        assert_eq!(ZoomRatio::from_hardware_unit(100).value(), 1.0);
        assert_eq!(ZoomRatio::from_hardware_unit(250).value(), 2.5);
    }

    #[test]
    fn test_facing_from_raw() {
        assert_eq!(CameraFacing::try_from(0).unwrap(), CameraFacing::Front);
        assert_eq!(CameraFacing::try_from(1).unwrap(), CameraFacing::Rear);
        assert!(CameraFacing::try_from(2).is_err());
    }

    #[test]
    fn test_size_for_from_raw_rejects_unknown() {
        let err = SizeFor::try_from(7).unwrap_err();
        assert!(err.to_string().contains("unsupported size-for value"));
    }

    #[test]
    fn test_aspect_ratio() {
        let ratio = AspectRatio::of(3, 4);
        assert_eq!(ratio.to_string(), "3:4");
        assert!((ratio.ratio() - 0.75).abs() < f32::EPSILON);
    }
}
