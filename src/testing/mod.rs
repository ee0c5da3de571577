//! Testing utilities: deterministic in-memory capability sources
//!
//! These stand in for the hardware capability collaborators so resolution and
//! caching behavior can be tested offline. `StaticCapabilitySource` answers
//! from configurable listings and counts every query it receives, which lets
//! tests assert that memoization actually short-circuits hardware access.

use crate::backend::{LegacyCapabilitySource, OutputTarget, StructuredCapabilitySource};
use crate::errors::CapabilityError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

/// An in-memory capability source implementing both backend generations.
///
/// Listings are replaceable mid-test (e.g. to prove a second resolution was
/// served from cache rather than the source), and query counters record how
/// often each accessor group was hit.
#[derive(Default)]
pub struct StaticCapabilitySource {
    picture_sizes: RwLock<Vec<(u32, u32)>>,
    preview_sizes: RwLock<Vec<(u32, u32)>>,
    video_sizes: RwLock<Vec<(u32, u32)>>,
    zoom_units: RwLock<Vec<i32>>,
    size_queries: AtomicUsize,
    zoom_queries: AtomicUsize,
}

impl StaticCapabilitySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_picture_sizes(self, sizes: Vec<(u32, u32)>) -> Self {
        self.set_picture_sizes(sizes);
        self
    }

    pub fn with_preview_sizes(self, sizes: Vec<(u32, u32)>) -> Self {
        self.set_preview_sizes(sizes);
        self
    }

    pub fn with_video_sizes(self, sizes: Vec<(u32, u32)>) -> Self {
        self.set_video_sizes(sizes);
        self
    }

    pub fn with_zoom_units(self, units: Vec<i32>) -> Self {
        self.set_zoom_units(units);
        self
    }

    pub fn set_picture_sizes(&self, sizes: Vec<(u32, u32)>) {
        *self.picture_sizes.write().unwrap() = sizes;
    }

    pub fn set_preview_sizes(&self, sizes: Vec<(u32, u32)>) {
        *self.preview_sizes.write().unwrap() = sizes;
    }

    pub fn set_video_sizes(&self, sizes: Vec<(u32, u32)>) {
        *self.video_sizes.write().unwrap() = sizes;
    }

    pub fn set_zoom_units(&self, units: Vec<i32>) {
        *self.zoom_units.write().unwrap() = units;
    }

    /// How many size queries this source has answered (any accessor group)
    pub fn size_queries(&self) -> usize {
        self.size_queries.load(Ordering::SeqCst)
    }

    /// How many zoom-unit queries this source has answered
    pub fn zoom_queries(&self) -> usize {
        self.zoom_queries.load(Ordering::SeqCst)
    }

    fn answer_sizes(&self, group: &RwLock<Vec<(u32, u32)>>) -> Vec<(u32, u32)> {
        self.size_queries.fetch_add(1, Ordering::SeqCst);
        group.read().unwrap().clone()
    }
}

impl LegacyCapabilitySource for StaticCapabilitySource {
    fn supported_picture_sizes(&self) -> Result<Vec<(u32, u32)>, CapabilityError> {
        Ok(self.answer_sizes(&self.picture_sizes))
    }

    fn supported_preview_sizes(&self) -> Result<Vec<(u32, u32)>, CapabilityError> {
        Ok(self.answer_sizes(&self.preview_sizes))
    }

    fn supported_video_sizes(&self) -> Result<Vec<(u32, u32)>, CapabilityError> {
        Ok(self.answer_sizes(&self.video_sizes))
    }

    fn zoom_ratio_units(&self) -> Result<Vec<i32>, CapabilityError> {
        self.zoom_queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.zoom_units.read().unwrap().clone())
    }
}

impl StructuredCapabilitySource for StaticCapabilitySource {
    fn output_sizes(&self, target: OutputTarget) -> Result<Vec<(u32, u32)>, CapabilityError> {
        let group = match target {
            OutputTarget::StillFormat => &self.picture_sizes,
            OutputTarget::PreviewSurface => &self.preview_sizes,
            OutputTarget::VideoRecorder => &self.video_sizes,
        };
        Ok(self.answer_sizes(group))
    }
}

/// A capability source whose every query fails, for collaborator-failure paths
pub struct FailingCapabilitySource;

impl FailingCapabilitySource {
    fn failure() -> CapabilityError {
        CapabilityError::CollaboratorFailure("hardware unavailable".to_string())
    }
}

impl LegacyCapabilitySource for FailingCapabilitySource {
    fn supported_picture_sizes(&self) -> Result<Vec<(u32, u32)>, CapabilityError> {
        Err(Self::failure())
    }

    fn supported_preview_sizes(&self) -> Result<Vec<(u32, u32)>, CapabilityError> {
        Err(Self::failure())
    }

    fn supported_video_sizes(&self) -> Result<Vec<(u32, u32)>, CapabilityError> {
        Err(Self::failure())
    }

    fn zoom_ratio_units(&self) -> Result<Vec<i32>, CapabilityError> {
        Err(Self::failure())
    }
}

impl StructuredCapabilitySource for FailingCapabilitySource {
    fn output_sizes(&self, _target: OutputTarget) -> Result<Vec<(u32, u32)>, CapabilityError> {
        Err(Self::failure())
    }
}
