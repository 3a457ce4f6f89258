//! Drives an A* search over small hierarchical networks, with every
//! pruning and costing decision delegated to the costing model.

use approx::assert_relative_eq;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use routers_costing::costing::{create_costing, AutoCostConfig, Cost, SharedCost};
use routers_costing::graph::{
    Access, DirectedEdge, EdgeFlags, EdgeRecord, HierarchyLevel, NodeRecord, Restriction,
    TravelMode,
};

#[derive(Clone, Copy, Debug)]
struct Junction {
    node: NodeRecord,
    position: (f32, f32),
    restriction: Restriction,
}

impl Junction {
    fn at(x: f32, y: f32) -> Self {
        Self {
            node: NodeRecord::open(),
            position: (x, y),
            restriction: Restriction::NONE,
        }
    }

    fn gated(self) -> Self {
        Self {
            node: NodeRecord::new(Access::PEDESTRIAN | Access::BICYCLE),
            ..self
        }
    }

    fn distance(&self, other: &Junction) -> f32 {
        let (dx, dy) = (
            self.position.0 - other.position.0,
            self.position.1 - other.position.1,
        );
        (dx * dx + dy * dy).sqrt()
    }
}

type Network = DiGraph<Junction, EdgeRecord>;

fn auto() -> SharedCost {
    create_costing(TravelMode::Auto, AutoCostConfig::default()).expect("default costing")
}

fn road(length: f32, speed: u8, local_index: u8) -> EdgeRecord {
    EdgeRecord::new(length, speed, Access::AUTO | Access::PEDESTRIAN).with_local_index(local_index)
}

fn transition(from: HierarchyLevel, to: HierarchyLevel, local_index: u8) -> EdgeRecord {
    EdgeRecord::transition(from, to, Access::AUTO).with_local_index(local_index)
}

fn route(
    network: &Network,
    costing: &SharedCost,
    start: NodeIndex,
    goal: NodeIndex,
) -> Option<(Cost, Vec<NodeIndex>)> {
    let destination = network[goal];
    let factor = costing.heuristic_factor();

    let (cost, path) = petgraph::algo::astar(
        network,
        start,
        |node| node == goal,
        |edge| {
            let from = network[edge.source()];
            let to = network[edge.target()];
            let dist2dest = to.distance(&destination);

            let allowed = costing.allowed(edge.weight(), from.restriction, false, dist2dest)
                && costing.node_allowed(&to.node);

            if allowed {
                costing.edge_cost(edge.weight())
            } else {
                Cost::INFINITE
            }
        },
        |node| {
            let estimate = factor * network[node].distance(&destination);
            Cost::new(estimate, estimate)
        },
    )?;

    cost.is_finite().then_some((cost, path))
}

/// Three ways from `origin` to `destination`, 10km apart:
/// - a fast road through a gated junction,
/// - a longer detour at 80km/h,
/// - a direct but slow road.
fn gated_network() -> (Network, [NodeIndex; 4]) {
    let mut network = Network::new();

    let origin = network.add_node(Junction::at(0.0, 0.0));
    let gate = network.add_node(Junction::at(5_000.0, 0.0).gated());
    let detour = network.add_node(Junction::at(5_000.0, 4_900.0));
    let destination = network.add_node(Junction::at(10_000.0, 0.0));

    network.add_edge(origin, gate, road(5_000.0, 100, 0));
    network.add_edge(gate, destination, road(5_000.0, 100, 0));
    network.add_edge(origin, detour, road(7_000.0, 80, 1));
    network.add_edge(detour, destination, road(7_000.0, 80, 0));
    network.add_edge(origin, destination, road(10_000.0, 30, 2));

    (network, [origin, gate, detour, destination])
}

#[test_log::test]
fn avoids_gated_junctions() {
    let (network, [origin, _, detour, destination]) = gated_network();
    let costing = auto();

    let (cost, path) = route(&network, &costing, origin, destination).expect("route exists");

    assert_eq!(path, vec![origin, detour, destination]);
    assert_relative_eq!(cost.secs, 630.0, max_relative = 1e-4);
    assert_eq!(cost.cost, cost.secs);
}

#[test_log::test]
fn honours_turn_restrictions() {
    let (mut network, [origin, _, _, destination]) = gated_network();
    network[origin].restriction = Restriction::from_indices([1]);

    let costing = auto();
    let (cost, path) = route(&network, &costing, origin, destination).expect("route exists");

    assert_eq!(path, vec![origin, destination]);
    assert_relative_eq!(cost.secs, 1_200.0, max_relative = 1e-4);
}

#[test_log::test]
fn no_route_when_every_way_is_closed() {
    let (mut network, [origin, _, _, destination]) = gated_network();
    network[origin].restriction = Restriction::from_indices([1, 2]);

    assert!(route(&network, &auto(), origin, destination).is_none());
}

/// A local origin and destination, `span` meters apart, joined by a
/// local road and by a highway reached through hierarchy transitions.
fn hierarchical_network(span: f32) -> (Network, [NodeIndex; 5]) {
    let mut network = Network::new();
    let exit = span - 5_000.0;

    let origin = network.add_node(Junction::at(0.0, 0.0));
    let on_ramp = network.add_node(Junction::at(0.0, 0.0));
    let off_ramp = network.add_node(Junction::at(exit, 0.0));
    let local_exit = network.add_node(Junction::at(exit, 0.0));
    let destination = network.add_node(Junction::at(span, 0.0));

    network.add_edge(origin, on_ramp, transition(2, 0, 0));
    network.add_edge(on_ramp, off_ramp, road(exit, 120, 0));
    network.add_edge(off_ramp, local_exit, transition(0, 2, 0));
    network.add_edge(local_exit, destination, road(5_000.0, 50, 0));
    network.add_edge(origin, destination, road(span, 60, 1));

    (network, [origin, on_ramp, off_ramp, local_exit, destination])
}

#[test_log::test]
fn takes_the_highway_far_from_the_destination() {
    let (network, nodes) = hierarchical_network(100_000.0);
    let [origin, .., destination] = nodes;

    let (cost, path) = route(&network, &auto(), origin, destination).expect("route exists");

    assert_eq!(path, nodes.to_vec());
    assert_relative_eq!(cost.secs, 2_850.0 + 360.0, max_relative = 1e-4);
}

#[test_log::test]
fn stays_local_close_to_the_destination() {
    let (network, [origin, .., destination]) = hierarchical_network(40_000.0);

    let (cost, path) = route(&network, &auto(), origin, destination).expect("route exists");

    // The highway would be faster, but is not entered within 50km
    assert_eq!(path, vec![origin, destination]);
    assert_relative_eq!(cost.secs, 2_400.0, max_relative = 1e-4);
}

#[test_log::test]
fn shortcuts_give_way_to_detail_near_the_destination() {
    let mut network = Network::new();

    let origin = network.add_node(Junction::at(0.0, 0.0));
    let middle = network.add_node(Junction::at(4_000.0, 0.0));
    let destination = network.add_node(Junction::at(8_000.0, 0.0));

    network.add_edge(
        origin,
        destination,
        road(8_000.0, 90, 0).with_flags(EdgeFlags::SHORTCUT),
    );
    network.add_edge(origin, middle, road(4_000.0, 90, 1));
    network.add_edge(middle, destination, road(4_000.0, 90, 0));

    let (_, path) = route(&network, &auto(), origin, destination).expect("route exists");
    assert_eq!(path, vec![origin, middle, destination]);
}

#[test_log::test]
fn location_search_skips_unusable_edges() {
    let (network, _) = hierarchical_network(100_000.0);
    let filter = auto().filter();

    let candidates = network
        .edge_references()
        .map(|edge| edge.weight())
        .filter(|edge| filter.accepts(*edge))
        .collect::<Vec<_>>();

    // Both transitions are dropped, the three roads remain
    assert_eq!(candidates.len(), 3);
    assert!(candidates.iter().all(|edge| !edge.is_transition()));
}
