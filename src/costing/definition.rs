use crate::costing::{Cost, EdgeFilter};
use crate::graph::{DirectedEdge, NodeInfo, Restriction, TravelMode};

/// A travel-mode costing policy, consulted by the search for every
/// edge and node it considers.
///
/// Implementations must be immutable once built: every method is a
/// pure function of its arguments, so a single model may be shared
/// between any number of concurrent searches.
pub trait DynamicCost {
    /// The travel mode this model costs for.
    fn travel_mode(&self) -> TravelMode;

    /// Checks if the search may step onto `edge`.
    ///
    /// * `restriction` - Turn restrictions in force at the start node
    ///   of the edge, compared against its local edge index.
    /// * `uturn` - Whether this step reverses the previous one.
    /// * `dist2dest` - Straight-line distance (meters) from the edge
    ///   to the destination.
    fn allowed(
        &self,
        edge: &dyn DirectedEdge,
        restriction: Restriction,
        uturn: bool,
        dist2dest: f32,
    ) -> bool;

    /// Checks if the search may pass through `node`.
    fn node_allowed(&self, node: &dyn NodeInfo) -> bool;

    /// The cost of traversing the edge.
    fn edge_cost(&self, edge: &dyn DirectedEdge) -> Cost;

    /// The time, in seconds, taken to traverse the edge.
    fn edge_seconds(&self, edge: &dyn DirectedEdge) -> f32;

    /// Cost per meter at the fastest plausible speed. Multiplied with
    /// the remaining straight-line distance this must underestimate
    /// the true remaining cost, keeping the A* search optimal.
    fn heuristic_factor(&self) -> f32;

    /// Costs within this unit of each other are considered equal by
    /// the approximate bucket sort of the search frontier.
    fn unit_size(&self) -> f32;

    /// The location search filter for this mode.
    fn filter(&self) -> EdgeFilter;

    /// Whether location search should discard `edge`.
    #[inline]
    fn exclude(&self, edge: &dyn DirectedEdge) -> bool {
        self.filter().excludes(edge)
    }
}
