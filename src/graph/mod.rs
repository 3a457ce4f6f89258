//! Read-only views onto the routing graph consumed by the
//! costing models.
//!
//! The graph layer owns tile loading and the storage of its
//! edges and nodes. Costing only ever sees them through the
//! [`DirectedEdge`] and [`NodeInfo`] traits, so any tile
//! representation can be costed by implementing those two.
//!
//! [`EdgeRecord`] and [`NodeRecord`] are plain value
//! implementations for callers without their own representation.

pub mod access;
pub mod edge;
pub mod node;
pub mod restriction;

#[doc(inline)]
pub use access::*;
#[doc(inline)]
pub use edge::*;
#[doc(inline)]
pub use node::*;
#[doc(inline)]
pub use restriction::Restriction;

/// A tier in the hierarchical road network.
/// Lower levels hold the more important (faster, sparser) roads.
pub type HierarchyLevel = u8;
