use crate::costing::{AutoCostConfig, Cost, DynamicCost, EdgeFilter, SpeedCostTable};
use crate::error::CostingError;
use crate::graph::{Access, DirectedEdge, NodeInfo, Restriction, TravelMode};

use log::debug;

/// Costing for cars and other private motor vehicles.
///
/// Both the ranking cost and the reported time of an edge are the
/// time to drive its length at its speed category. Access follows the
/// [`Access::AUTO`] bit, with hierarchy transitions, shortcuts and
/// no-through edges gated on the distance remaining to the
/// destination (see [`AutoCostConfig`]).
#[derive(Clone, Debug)]
pub struct AutoCost {
    access: Access,
    speed_factor: SpeedCostTable,
    config: AutoCostConfig,
}

impl AutoCost {
    pub fn new(config: AutoCostConfig) -> Result<Self, CostingError> {
        config.validate()?;
        debug!("Creating auto costing with {config:?}");

        Ok(Self {
            access: TravelMode::Auto.to_flag(),
            speed_factor: SpeedCostTable::new(),
            config,
        })
    }

    pub fn config(&self) -> &AutoCostConfig {
        &self.config
    }

    pub fn speed_table(&self) -> &SpeedCostTable {
        &self.speed_factor
    }

    #[inline(always)]
    fn traversal_seconds(&self, edge: &dyn DirectedEdge) -> f32 {
        edge.length() * self.speed_factor.factor(edge.speed())
    }
}

impl Default for AutoCost {
    fn default() -> Self {
        Self {
            access: TravelMode::Auto.to_flag(),
            speed_factor: SpeedCostTable::new(),
            config: AutoCostConfig::default(),
        }
    }
}

impl DynamicCost for AutoCost {
    fn travel_mode(&self) -> TravelMode {
        TravelMode::Auto
    }

    fn allowed(
        &self,
        edge: &dyn DirectedEdge,
        restriction: Restriction,
        uturn: bool,
        dist2dest: f32,
    ) -> bool {
        // Turn restrictions take precedence over every other rule
        if restriction.forbids(edge.local_edge_index()) {
            return false;
        }

        // Moving up only pays off while far from the destination
        if edge.transitions_up() {
            return dist2dest > self.config.transition_up.distance(edge.end_node_level());
        }

        // Moving down only pays off once close to the destination
        if edge.transitions_down() {
            return dist2dest < self.config.transition_down.distance(edge.end_node_level());
        }

        // Shortcuts overshoot destinations close by
        if edge.is_shortcut() && dist2dest < self.config.shortcut_min_distance {
            return false;
        }

        if uturn || (edge.not_thru() && dist2dest > self.config.not_thru_max_distance) {
            return false;
        }

        edge.forward_access().contains(self.access)
    }

    #[inline]
    fn node_allowed(&self, node: &dyn NodeInfo) -> bool {
        node.access().contains(self.access)
    }

    fn edge_cost(&self, edge: &dyn DirectedEdge) -> Cost {
        #[cfg(any(debug_assertions, feature = "diagnostics"))]
        if edge.speed() > self.config.speed_warning {
            log::warn!("Speed = {}", edge.speed());
        }

        let secs = self.traversal_seconds(edge);
        Cost::new(secs, secs)
    }

    #[inline]
    fn edge_seconds(&self, edge: &dyn DirectedEdge) -> f32 {
        self.traversal_seconds(edge)
    }

    fn heuristic_factor(&self) -> f32 {
        self.speed_factor.factor(self.config.heuristic_speed)
    }

    fn unit_size(&self) -> f32 {
        self.config.unit_size
    }

    fn filter(&self) -> EdgeFilter {
        EdgeFilter::new(self.access)
    }
}
