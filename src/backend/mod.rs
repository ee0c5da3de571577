//! Capability-source traits and backend adapters
//!
//! Two hardware-query mechanisms exist in the wild: an older parameter-bag
//! style API and a newer structured capability-map API. Each gets its own
//! source trait (implemented by the platform integration layer) and its own
//! adapter that normalizes the native listing into [`Size`] / [`ZoomRatio`]
//! values. The [`ConfigurationProvider`](crate::provider::ConfigurationProvider)
//! selects the adapter; the adapters never probe platform support themselves.

pub mod legacy;
pub mod structured;

use crate::errors::CapabilityError;
use crate::types::BackendGeneration;
use serde::{Deserialize, Serialize};

/// The older parameter-bag style capability source.
///
/// Exposes one accessor group per size purpose plus the integer zoom-ratio
/// units. Queries may block on hardware/driver I/O; a failing source reports
/// [`CapabilityError::CollaboratorFailure`], which propagates unchanged.
pub trait LegacyCapabilitySource {
    fn supported_picture_sizes(&self) -> Result<Vec<(u32, u32)>, CapabilityError>;
    fn supported_preview_sizes(&self) -> Result<Vec<(u32, u32)>, CapabilityError>;
    fn supported_video_sizes(&self) -> Result<Vec<(u32, u32)>, CapabilityError>;

    /// Integer hardware zoom units, e.g. 100 for 1.0x
    fn zoom_ratio_units(&self) -> Result<Vec<i32>, CapabilityError>;
}

/// Output-target discriminator for the structured capability map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputTarget {
    /// Still-image output format
    StillFormat,
    /// Preview-surface consumer
    PreviewSurface,
    /// Video-recorder consumer
    VideoRecorder,
}

/// The newer structured capability-map source.
pub trait StructuredCapabilitySource {
    /// Output sizes the hardware supports for the given target
    fn output_sizes(&self, target: OutputTarget) -> Result<Vec<(u32, u32)>, CapabilityError>;
}

/// A borrowed handle to whichever capability source a resolution call should
/// query, tagging it with its backend generation.
#[derive(Clone, Copy)]
pub enum CapabilityBackend<'a> {
    Legacy(&'a dyn LegacyCapabilitySource),
    Structured(&'a dyn StructuredCapabilitySource),
}

impl CapabilityBackend<'_> {
    /// Which generation this backend belongs to (one axis of the cache key)
    pub fn generation(&self) -> BackendGeneration {
        match self {
            CapabilityBackend::Legacy(_) => BackendGeneration::Legacy,
            CapabilityBackend::Structured(_) => BackendGeneration::Structured,
        }
    }
}

impl std::fmt::Debug for CapabilityBackend<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(match self {
            CapabilityBackend::Legacy(_) => "CapabilityBackend::Legacy",
            CapabilityBackend::Structured(_) => "CapabilityBackend::Structured",
        })
    }
}
