//! Tests for the conversion configuration snapshot.

use super::*;

/// Ensures the default configuration passes its own validation.
#[test]
fn default_config_is_valid() {
    let cfg = ConversionConfig::default();
    let rebuilt = ConversionConfig::new(
        cfg.image_size,
        cfg.nozzle_size,
        cfg.bezier_segments,
        cfg.layer_colors,
    )
    .unwrap();
    assert_eq!(cfg, rebuilt);
}

#[test]
fn bezier_step_is_reciprocal_of_segments() {
    let cfg = ConversionConfig::new(100.0, 0.4, 4.0, 1).unwrap();
    assert_eq!(cfg.bezier_step(), 0.25);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        ConversionConfig::new(0.0, 0.4, 5.0, 1).unwrap_err(),
        ConfigError::InvalidImageSize(0.0)
    );
    assert_eq!(
        ConversionConfig::new(200.0, -1.0, 5.0, 1).unwrap_err(),
        ConfigError::InvalidNozzleSize(-1.0)
    );
    assert_eq!(
        ConversionConfig::new(200.0, 0.4, 0.0, 1).unwrap_err(),
        ConfigError::InvalidBezierSegments(0.0)
    );
    assert_eq!(
        ConversionConfig::new(200.0, 0.4, 5.0, 0).unwrap_err(),
        ConfigError::InvalidLayerColors(0)
    );
}

#[test]
fn nan_values_are_rejected() {
    assert!(ConversionConfig::new(f64::NAN, 0.4, 5.0, 1).is_err());
    assert!(ConversionConfig::new(200.0, 0.4, f64::NAN, 1).is_err());
    assert!(ConversionConfig::new(200.0, 0.4, f64::INFINITY, 1).is_err());
}

#[test]
fn error_display_names_the_field() {
    let err = ConfigError::InvalidLayerColors(0);
    assert!(err.to_string().contains("layer colors"));
}

#[test]
fn bezier_segments_are_capped() {
    assert!(ConversionConfig::new(200.0, 0.4, MAX_BEZIER_SEGMENTS, 1).is_ok());
    assert_eq!(
        ConversionConfig::new(200.0, 0.4, 1e9, 1).unwrap_err(),
        ConfigError::InvalidBezierSegments(1e9)
    );
}
