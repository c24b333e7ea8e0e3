/*
 * Astviz IR - Python syntax trees for graph visualization
 *
 * Feature-First Architecture:
 * - shared/      : Common models (Scalar, Span) and tree-sitter helpers
 * - features/    : Vertical slices (parsing → conversion → flattening)
 * - pipeline/    : parse_code orchestration
 * - config/      : YAML configuration
 *
 * Every call is self-contained: the id counter lives in one TreeConverter,
 * the grammar schema is immutable shared data.
 */

/// Shared models and utilities
pub mod shared;

/// Feature modules (parsing, conversion, flattening)
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConverterConfig, VisualizerConfig};
pub use errors::{AstvizError, Result};
pub use features::conversion::{ChildEdge, Converted, ConvertedNode, TreeConverter};
pub use features::flattening::{flatten, FlatNode, FlatTree, FlattenOutput, HierarchyNode, Link};
pub use pipeline::{count_lines, parse_code, parse_code_with, parse_file, ParseResult};
