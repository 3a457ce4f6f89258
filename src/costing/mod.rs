//! Costing models decide whether the search may traverse an edge
//! or node, and what traversing an edge costs.
//!
//! ## Structure
//! Every travel mode implements the [`DynamicCost`] trait. The
//! search consults it for each edge it expands:
//!
//! 1. [`DynamicCost::allowed`] / [`DynamicCost::node_allowed`]
//!    prune edges and nodes the mode may not take.
//! 2. [`DynamicCost::edge_cost`] gives the [`Cost`] to accumulate.
//! 3. [`DynamicCost::heuristic_factor`] scales the remaining
//!    straight-line distance into the A* estimate.
//! 4. [`DynamicCost::unit_size`] sizes the frontier buckets.
//!
//! Location search uses [`DynamicCost::filter`] independently, before
//! any search begins.
//!
//! ```rust
//! use routers_costing::costing::{create_costing, AutoCostConfig};
//! use routers_costing::graph::{Access, EdgeRecord, Restriction, TravelMode};
//!
//! let costing = create_costing(TravelMode::Auto, AutoCostConfig::default())?;
//! let edge = EdgeRecord::new(1000.0, 60, Access::AUTO);
//!
//! assert!(costing.allowed(&edge, Restriction::NONE, false, 20_000.0));
//! assert_eq!(costing.edge_cost(&edge).secs.round(), 60.0);
//! # Ok::<(), routers_costing::CostingError>(())
//! ```
//!
//! ### Default Models:
//! - [`AutoCost`]: Motor vehicles
//!
#[doc(hidden)]
pub mod auto;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod cost;
#[doc(hidden)]
pub mod definition;
#[doc(hidden)]
pub mod factory;
#[doc(hidden)]
pub mod filter;
#[doc(hidden)]
pub mod speed;


#[doc(inline)]
pub use auto::*;
#[doc(inline)]
pub use config::*;
#[doc(inline)]
pub use cost::*;
#[doc(inline)]
pub use definition::*;
#[doc(inline)]
pub use factory::*;
#[doc(inline)]
pub use filter::*;
#[doc(inline)]
pub use speed::*;
