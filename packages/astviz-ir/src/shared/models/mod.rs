//! Shared models

mod scalar;
mod span;

pub use scalar::Scalar;
pub use span::Span;

/// Attribute map carried by converted, flat and hierarchy nodes.
///
/// `None` is a field that exists on the node type but holds nothing
/// (serialized as JSON `null`).
pub type Attributes = std::collections::BTreeMap<String, Option<Scalar>>;

/// Node identifier, unique within one parse
pub type NodeId = u32;
