//! Adapter for the legacy parameter-bag capability source

use crate::backend::LegacyCapabilitySource;
use crate::errors::CapabilityError;
use crate::types::{Size, SizeFor, ZoomRatio};

/// Resolve the supported sizes for one purpose from a legacy source.
///
/// Selects the accessor group matching `size_for` and normalizes the raw
/// listing, preserving source order.
pub fn resolve_sizes(
    source: &dyn LegacyCapabilitySource,
    size_for: SizeFor,
) -> Result<Vec<Size>, CapabilityError> {
    let pairs = match size_for {
        SizeFor::Picture => source.supported_picture_sizes()?,
        SizeFor::Preview => source.supported_preview_sizes()?,
        SizeFor::Video => source.supported_video_sizes()?,
    };
    log::debug!(
        "legacy source reported {} {} sizes",
        pairs.len(),
        size_for.as_str()
    );
    Ok(Size::from_pairs(&pairs))
}

/// Resolve the supported zoom ratios from a legacy source.
///
/// Reads the integer hardware zoom units and scales each by 0.01, keeping
/// source order. Only the legacy backend reports zoom ratios.
pub fn resolve_zoom_ratios(
    source: &dyn LegacyCapabilitySource,
) -> Result<Vec<ZoomRatio>, CapabilityError> {
    let units = source.zoom_ratio_units()?;
    log::debug!("legacy source reported {} zoom units", units.len());
    Ok(units
        .into_iter()
        .map(ZoomRatio::from_hardware_unit)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StaticCapabilitySource;

    #[test]
    fn test_resolve_picture_sizes() {
        let source = StaticCapabilitySource::new()
            .with_picture_sizes(vec![(4032, 3024), (1920, 1080)]);
        let sizes = resolve_sizes(&source, SizeFor::Picture).unwrap();
        assert_eq!(sizes, vec![Size::new(4032, 3024), Size::new(1920, 1080)]);
    }

    #[test]
    fn test_axis_selects_distinct_accessor_group() {
        let source = StaticCapabilitySource::new()
            .with_picture_sizes(vec![(4032, 3024)])
            .with_preview_sizes(vec![(1280, 720)])
            .with_video_sizes(vec![(1920, 1080)]);
        assert_eq!(
            resolve_sizes(&source, SizeFor::Preview).unwrap(),
            vec![Size::new(1280, 720)]
        );
        assert_eq!(
            resolve_sizes(&source, SizeFor::Video).unwrap(),
            vec![Size::new(1920, 1080)]
        );
    }

    #[test]
    fn test_zoom_ratio_scaling_preserves_order() {
        let source = StaticCapabilitySource::new().with_zoom_units(vec![0, 100, 250]);
        let ratios = resolve_zoom_ratios(&source).unwrap();
        let values: Vec<f32> = ratios.iter().map(|r| r.value()).collect();
        assert_eq!(values, vec![0.0, 1.0, 2.5]);
    }

    #[test]
    fn test_source_failure_propagates() {
        let source = crate::testing::FailingCapabilitySource;
        let err = resolve_sizes(&source, SizeFor::Picture).unwrap_err();
        assert!(matches!(err, CapabilityError::CollaboratorFailure(_)));
    }
}
