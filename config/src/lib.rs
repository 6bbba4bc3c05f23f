//! # Config Crate
//!
//! Centralized configuration constants for the image-to-puzzle pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ConversionConfig, DEFAULT_BEZIER_SEGMENTS};
//!
//! let config = ConversionConfig::default();
//! assert_eq!(config.bezier_segments, DEFAULT_BEZIER_SEGMENTS);
//!
//! // Finer curve interpolation for a small print
//! let fine = ConversionConfig::new(80.0, 0.25, 12.0, 1).unwrap();
//! assert!(fine.bezier_step() < config.bezier_step());
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Immutable**: A run's settings are a value, never global state
//! - **Validated**: Invalid settings are rejected before any work starts

pub mod constants;
