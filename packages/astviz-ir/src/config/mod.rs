//! Configuration System
//!
//! A single YAML document (schema version 1) with two sections:
//!
//! ```yaml
//! version: 1
//! converter:
//!   include_positions: true
//! api:
//!   default_language: python
//! ```
//!
//! Every field has a default, so an empty section (or no file) is valid.

pub mod error;
pub mod visualizer_config;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use visualizer_config::{ApiConfig, ConverterConfig, VisualizerConfig, SUPPORTED_LANGUAGES};
