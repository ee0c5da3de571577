//! Adapter for the structured capability-map source
//!
//! The structured API exposes one query, "output sizes for target", so the
//! size purpose maps onto an output-target discriminator instead of selecting
//! between accessor groups. Whether the platform actually provides the
//! structured API is the provider's concern, not this adapter's.

use crate::backend::{OutputTarget, StructuredCapabilitySource};
use crate::errors::CapabilityError;
use crate::types::{Size, SizeFor};

/// The output target a size purpose queries on the structured map
pub fn target_for(size_for: SizeFor) -> OutputTarget {
    match size_for {
        SizeFor::Picture => OutputTarget::StillFormat,
        SizeFor::Preview => OutputTarget::PreviewSurface,
        SizeFor::Video => OutputTarget::VideoRecorder,
    }
}

/// Resolve the supported sizes for one purpose from a structured source.
pub fn resolve_sizes(
    source: &dyn StructuredCapabilitySource,
    size_for: SizeFor,
) -> Result<Vec<Size>, CapabilityError> {
    let target = target_for(size_for);
    let pairs = source.output_sizes(target)?;
    log::debug!(
        "structured source reported {} sizes for {:?}",
        pairs.len(),
        target
    );
    Ok(Size::from_pairs(&pairs))
}
