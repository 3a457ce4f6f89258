#![doc = include_str!("../readme.md")]

pub mod costing;
pub mod error;
pub mod graph;

#[doc(inline)]
pub use costing::{AutoCost, AutoCostConfig, Cost, DynamicCost, EdgeFilter, SharedCost};
#[doc(inline)]
pub use error::CostingError;
#[doc(inline)]
pub use graph::{DirectedEdge, NodeInfo, Restriction, TravelMode};
