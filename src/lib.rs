//! CamCaps: camera capability resolution and caching
//!
//! This crate resolves the hardware-supported media sizes and zoom ratios of
//! a camera device and memoizes the results, so expensive capability queries
//! against the camera subsystem run at most once per distinct query shape.
//! Two structurally incompatible query mechanisms (the legacy parameter-bag
//! API and the structured capability-map API) are unified behind one
//! normalized result type.
//!
//! # Features
//! - Normalized [`Size`](types::Size) / [`ZoomRatio`](types::ZoomRatio) results
//!   from either backend generation
//! - Collision-free struct cache keys over facing, size purpose, and backend
//! - Caller-controlled memoization (insert-only, process-lifetime cache)
//! - Thread-safe shared provider with lazily created global instance
//! - Process-wide default capture settings
//!
//! # Usage
//! ```rust
//! use camcaps::backend::CapabilityBackend;
//! use camcaps::testing::StaticCapabilitySource;
//! use camcaps::types::{CameraFacing, SizeFor};
//! use camcaps::ConfigurationProvider;
//!
//! let provider = ConfigurationProvider::new();
//! let camera = StaticCapabilitySource::new().with_preview_sizes(vec![(1920, 1080)]);
//!
//! let sizes = provider
//!     .resolve_sizes(
//!         CapabilityBackend::Legacy(&camera),
//!         CameraFacing::Rear,
//!         SizeFor::Preview,
//!     )
//!     .unwrap();
//! assert_eq!(sizes[0].width, 1920);
//! ```
pub mod backend;
pub mod errors;
pub mod key;
pub mod provider;
pub mod types;

// Testing utilities - deterministic capability sources for offline tests
pub mod testing;

// Re-exports for convenience
pub use backend::{CapabilityBackend, LegacyCapabilitySource, StructuredCapabilitySource};
pub use errors::CapabilityError;
pub use provider::{CameraDefaults, ConfigurationProvider};
pub use types::{BackendGeneration, CameraFacing, Size, SizeFor, ZoomRatio};

/// Initialize logging for the capability layer
pub fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "camcaps=info");
    }
    let _ = env_logger::try_init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

#[cfg(test)]
mod lib_tests {
    use super::*;

    #[test]
    fn test_crate_metadata() {
        assert_eq!(NAME, "camcaps");
        assert!(!VERSION.is_empty());
        assert!(!DESCRIPTION.is_empty());
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging();
        init_logging();
    }
}
