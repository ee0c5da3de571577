//! Configuration provider: capability resolution, memoization, and defaults
//!
//! The provider is the single access point for resolving hardware-supported
//! sizes and zoom ratios. Results are memoized per composite key so each
//! distinct query shape hits the hardware at most once per process lifetime;
//! hardware capabilities are assumed constant while the process runs, so
//! entries are inserted once and never invalidated.

use crate::backend::{self, CapabilityBackend, LegacyCapabilitySource};
use crate::errors::CapabilityError;
use crate::key::{RatioKey, SizeKey};
use crate::types::{
    AspectRatio, BackendGeneration, CameraFacing, FlashMode, MediaQuality, MediaType, Size,
    SizeFor, ZoomRatio,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

lazy_static::lazy_static! {
    static ref GLOBAL_PROVIDER: ConfigurationProvider = ConfigurationProvider::new();
}

/// Process-wide default settings for capture sessions.
///
/// Plain mutable configuration state; none of it influences capability
/// resolution or caching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraDefaults {
    pub facing: CameraFacing,
    pub media_type: MediaType,
    pub media_quality: MediaQuality,
    pub aspect_ratio: AspectRatio,
    pub flash_mode: FlashMode,
    pub voice_enabled: bool,
    pub auto_focus: bool,
    /// Maximum video file size in bytes, unlimited when `None`
    pub max_video_file_size: Option<u64>,
    /// Maximum video duration in milliseconds, unlimited when `None`
    pub max_video_duration_ms: Option<u32>,
}

impl Default for CameraDefaults {
    fn default() -> Self {
        Self {
            facing: CameraFacing::Rear,
            media_type: MediaType::Picture,
            media_quality: MediaQuality::High,
            aspect_ratio: AspectRatio::of(3, 4),
            flash_mode: FlashMode::Auto,
            voice_enabled: true,
            auto_focus: true,
            max_video_file_size: None,
            max_video_duration_ms: None,
        }
    }
}

/// Capability resolution facade with per-key memoization.
///
/// Explicitly constructible for dependency injection; a lazily created
/// process-wide instance is available through [`ConfigurationProvider::global`].
pub struct ConfigurationProvider {
    caching_enabled: AtomicBool,
    structured_supported: AtomicBool,
    debug: AtomicBool,
    size_cache: RwLock<HashMap<SizeKey, Arc<Vec<Size>>>>,
    ratio_cache: RwLock<HashMap<RatioKey, Arc<Vec<ZoomRatio>>>>,
    defaults: RwLock<CameraDefaults>,
}

impl Default for ConfigurationProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationProvider {
    /// Create a provider with empty caches, caching enabled, structured
    /// backend support declared, and default capture settings
    pub fn new() -> Self {
        Self {
            caching_enabled: AtomicBool::new(true),
            structured_supported: AtomicBool::new(true),
            debug: AtomicBool::new(false),
            size_cache: RwLock::new(HashMap::new()),
            ratio_cache: RwLock::new(HashMap::new()),
            defaults: RwLock::new(CameraDefaults::default()),
        }
    }

    /// The process-wide provider instance, created on first access.
    ///
    /// Initialization is guaranteed to run exactly once even under
    /// concurrent first access.
    pub fn global() -> &'static ConfigurationProvider {
        &GLOBAL_PROVIDER
    }

    /// Resolve the hardware-supported sizes for one query shape.
    ///
    /// Builds the composite key from (facing, size_for, backend generation)
    /// and serves a cached result when caching is enabled; otherwise the
    /// backend's adapter queries the capability source. A fresh result is
    /// stored before returning only when caching is enabled; failed
    /// resolutions are never cached.
    pub fn resolve_sizes(
        &self,
        backend: CapabilityBackend<'_>,
        facing: CameraFacing,
        size_for: SizeFor,
    ) -> Result<Arc<Vec<Size>>, CapabilityError> {
        let generation = backend.generation();
        if generation == BackendGeneration::Structured && !self.is_structured_supported() {
            return Err(CapabilityError::UnsupportedBackend(
                "structured capability API not available on this platform".to_string(),
            ));
        }

        let key = SizeKey::new(facing, size_for, generation);
        if self.is_caching_enabled() {
            if let Some(sizes) = self.cached_sizes(key) {
                log::debug!("size cache hit for {:?}", key);
                return Ok(sizes);
            }
        }

        let sizes = match backend {
            CapabilityBackend::Legacy(source) => backend::legacy::resolve_sizes(source, size_for)?,
            CapabilityBackend::Structured(source) => {
                backend::structured::resolve_sizes(source, size_for)?
            }
        };
        let sizes = Arc::new(sizes);

        if self.is_caching_enabled() {
            log::debug!("caching {} sizes for {:?}", sizes.len(), key);
            self.size_cache
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(key, Arc::clone(&sizes));
        }
        Ok(sizes)
    }

    /// Resolve the hardware-supported zoom ratios for one camera facing.
    ///
    /// Zoom ratios are only reported by the legacy backend, so the cache key
    /// omits the generation axis. Integer hardware units are scaled by 0.01
    /// in source order.
    pub fn resolve_zoom_ratios(
        &self,
        source: &dyn LegacyCapabilitySource,
        facing: CameraFacing,
    ) -> Result<Arc<Vec<ZoomRatio>>, CapabilityError> {
        let key = RatioKey::new(facing);
        if self.is_caching_enabled() {
            if let Some(ratios) = self.cached_ratios(key) {
                log::debug!("ratio cache hit for {:?}", key);
                return Ok(ratios);
            }
        }

        let ratios = Arc::new(backend::legacy::resolve_zoom_ratios(source)?);

        if self.is_caching_enabled() {
            log::debug!("caching {} zoom ratios for {:?}", ratios.len(), key);
            self.ratio_cache
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(key, Arc::clone(&ratios));
        }
        Ok(ratios)
    }

    fn cached_sizes(&self, key: SizeKey) -> Option<Arc<Vec<Size>>> {
        // A poisoned lock still guards valid data: writes are insert-only
        // and idempotent for a fixed hardware state.
        self.size_cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }

    fn cached_ratios(&self, key: RatioKey) -> Option<Arc<Vec<ZoomRatio>>> {
        self.ratio_cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }

    /// Whether resolved results are memoized
    pub fn is_caching_enabled(&self) -> bool {
        self.caching_enabled.load(Ordering::SeqCst)
    }

    /// Toggle memoization. Disabling does not drop existing entries; it only
    /// bypasses them, so re-enabling resumes serving previously cached lists.
    pub fn set_caching_enabled(&self, enabled: bool) {
        self.caching_enabled.store(enabled, Ordering::SeqCst);
    }

    /// Whether the platform declares the structured capability API
    pub fn is_structured_supported(&self) -> bool {
        self.structured_supported.load(Ordering::SeqCst)
    }

    /// Declare structured capability support. Selected once at configuration
    /// time; resolving through the structured backend without support fails
    /// fast with [`CapabilityError::UnsupportedBackend`].
    pub fn set_structured_supported(&self, supported: bool) {
        self.structured_supported.store(supported, Ordering::SeqCst);
    }

    /// Whether debug logging is enabled
    pub fn is_debug(&self) -> bool {
        self.debug.load(Ordering::SeqCst)
    }

    /// Toggle debug logging. Forwards to the logging layer; purely
    /// observational, never influences resolution results.
    pub fn set_debug(&self, debug: bool) {
        self.debug.store(debug, Ordering::SeqCst);
        log::set_max_level(if debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        });
    }

    /// Snapshot of the current default capture settings
    pub fn defaults(&self) -> CameraDefaults {
        self.defaults
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the default capture settings wholesale
    pub fn set_defaults(&self, defaults: CameraDefaults) {
        *self
            .defaults
            .write()
            .unwrap_or_else(PoisonError::into_inner) = defaults;
    }

    pub fn default_facing(&self) -> CameraFacing {
        self.defaults().facing
    }

    pub fn set_default_facing(&self, facing: CameraFacing) {
        self.update_defaults(|d| d.facing = facing);
    }

    pub fn default_media_type(&self) -> MediaType {
        self.defaults().media_type
    }

    pub fn set_default_media_type(&self, media_type: MediaType) {
        self.update_defaults(|d| d.media_type = media_type);
    }

    pub fn default_media_quality(&self) -> MediaQuality {
        self.defaults().media_quality
    }

    pub fn set_default_media_quality(&self, quality: MediaQuality) {
        self.update_defaults(|d| d.media_quality = quality);
    }

    pub fn default_aspect_ratio(&self) -> AspectRatio {
        self.defaults().aspect_ratio
    }

    pub fn set_default_aspect_ratio(&self, ratio: AspectRatio) {
        self.update_defaults(|d| d.aspect_ratio = ratio);
    }

    pub fn default_flash_mode(&self) -> FlashMode {
        self.defaults().flash_mode
    }

    pub fn set_default_flash_mode(&self, mode: FlashMode) {
        self.update_defaults(|d| d.flash_mode = mode);
    }

    pub fn is_voice_enabled(&self) -> bool {
        self.defaults().voice_enabled
    }

    pub fn set_voice_enabled(&self, enabled: bool) {
        self.update_defaults(|d| d.voice_enabled = enabled);
    }

    pub fn is_auto_focus(&self) -> bool {
        self.defaults().auto_focus
    }

    pub fn set_auto_focus(&self, auto_focus: bool) {
        self.update_defaults(|d| d.auto_focus = auto_focus);
    }

    pub fn max_video_file_size(&self) -> Option<u64> {
        self.defaults().max_video_file_size
    }

    pub fn set_max_video_file_size(&self, bytes: Option<u64>) {
        self.update_defaults(|d| d.max_video_file_size = bytes);
    }

    pub fn max_video_duration_ms(&self) -> Option<u32> {
        self.defaults().max_video_duration_ms
    }

    pub fn set_max_video_duration_ms(&self, millis: Option<u32>) {
        self.update_defaults(|d| d.max_video_duration_ms = millis);
    }

    fn update_defaults(&self, f: impl FnOnce(&mut CameraDefaults)) {
        let mut defaults = self
            .defaults
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut *defaults);
    }
}
