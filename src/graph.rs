use std::collections::HashMap;

use log::{trace, warn};
use smallvec::SmallVec;

use crate::{Edge, Fuel, FuelNetwork};

pub type StopIdx = u32;
pub type BusIdx = u32;

pub const DEFAULT_HUB: &str = "USB";

/// Full named route of one bus, kept for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct BusRoute {
    pub bus: BusIdx,
    /// Intermediate stops then the final destination. The hub it leaves from is implicit.
    pub stops: SmallVec<[StopIdx; 8]>,
    pub fuel_cost: Fuel,
}

/// Bus hops around a hub, with stop and bus names interned into dense indices.
#[derive(Debug)]
pub struct RouteGraph {
    hub: StopIdx,
    edges: Vec<Edge<StopIdx, BusIdx>>,
    // symmetric: both orderings of a pair are stored
    distances: HashMap<(StopIdx, StopIdx), f64>,
    bus_routes: HashMap<BusIdx, BusRoute>,

    stop_id_to_idx: HashMap<String, StopIdx>,
    idx_to_stop_id: Vec<String>,
    bus_id_to_idx: HashMap<String, BusIdx>,
    idx_to_bus_id: Vec<String>,
}

impl Default for RouteGraph {
    fn default() -> Self {
        Self::new(DEFAULT_HUB)
    }
}

impl RouteGraph {
    pub fn new(hub: &str) -> Self {
        let mut graph = Self {
            hub: 0,
            edges: Vec::new(),
            distances: HashMap::new(),
            bus_routes: HashMap::new(),
            stop_id_to_idx: HashMap::new(),
            idx_to_stop_id: Vec::new(),
            bus_id_to_idx: HashMap::new(),
            idx_to_bus_id: Vec::new(),
        };
        graph.hub = graph.intern_stop(hub);
        graph
    }

    fn intern_stop(&mut self, stop_id: &str) -> StopIdx {
        if let Some(&idx) = self.stop_id_to_idx.get(stop_id) {
            return idx;
        }

        let idx = self.idx_to_stop_id.len() as StopIdx;
        self.stop_id_to_idx.insert(stop_id.to_owned(), idx);
        self.idx_to_stop_id.push(stop_id.to_owned());
        idx
    }

    fn intern_bus(&mut self, bus_id: &str) -> BusIdx {
        if let Some(&idx) = self.bus_id_to_idx.get(bus_id) {
            return idx;
        }

        let idx = self.idx_to_bus_id.len() as BusIdx;
        self.bus_id_to_idx.insert(bus_id.to_owned(), idx);
        self.idx_to_bus_id.push(bus_id.to_owned());
        idx
    }

    pub fn hub(&self) -> StopIdx {
        self.hub
    }

    /// Appends one hop. Duplicate hops are kept.
    pub fn add_edge(&mut self, bus: &str, start: &str, destination: &str, fuel_cost: Fuel) {
        let edge = Edge {
            bus: self.intern_bus(bus),
            start: self.intern_stop(start),
            destination: self.intern_stop(destination),
            fuel_cost,
        };
        trace!("{bus}: {start} -> {destination} ({fuel_cost} L)");
        self.edges.push(edge);
    }

    /// Records the physical distance between `a` and `b`, in both directions.
    /// A later call for the same pair overwrites the earlier value.
    pub fn add_distance(&mut self, a: &str, b: &str, distance: f64) {
        let a = self.intern_stop(a);
        let b = self.intern_stop(b);
        self.distances.insert((a, b), distance);
        self.distances.insert((b, a), distance);
    }

    pub fn distance(&self, a: StopIdx, b: StopIdx) -> Option<f64> {
        self.distances.get(&(a, b)).copied()
    }

    /// Like [`RouteGraph::distance`], by stop name.
    pub fn distance_between(&self, a: &str, b: &str) -> Option<f64> {
        self.distance(self.lookup_stop(a)?, self.lookup_stop(b)?)
    }

    /// Stores the full route of `bus`. The first route registered for a bus is the one
    /// [`RouteGraph::bus_route`] returns; later ones are ignored.
    pub fn add_bus_route<S: AsRef<str>>(&mut self, bus: &str, stops: &[S], fuel_cost: Fuel) {
        let bus_idx = self.intern_bus(bus);
        if self.bus_routes.contains_key(&bus_idx) {
            warn!("bus {bus} already has a route, keeping the first one");
            return;
        }

        let stops = stops
            .iter()
            .map(|stop| self.intern_stop(stop.as_ref()))
            .collect();

        self.bus_routes.insert(
            bus_idx,
            BusRoute {
                bus: bus_idx,
                stops,
                fuel_cost,
            },
        );
    }

    pub fn bus_route(&self, bus: BusIdx) -> Option<&BusRoute> {
        self.bus_routes.get(&bus)
    }

    /// Registers the route of `bus` and one hop per listed stop: the first hop leaves the
    /// hub, each next one leaves the previous stop. All hops carry the route's total cost.
    pub fn add_route<S: AsRef<str>>(&mut self, bus: &str, stops: &[S], fuel_cost: Fuel) {
        self.add_bus_route(bus, stops, fuel_cost);

        let hub = self.idx_to_stop_id[self.hub as usize].clone();
        let mut start = hub.as_str();
        for stop in stops {
            let destination = stop.as_ref();
            self.add_edge(bus, start, destination, fuel_cost);
            start = destination;
        }
    }

    pub fn lookup_stop(&self, stop_id: &str) -> Option<StopIdx> {
        self.stop_id_to_idx.get(stop_id).copied()
    }

    pub fn resolve_stop(&self, idx: StopIdx) -> Option<&str> {
        self.idx_to_stop_id.get(idx as usize).map(|s| s.as_str())
    }

    pub fn lookup_bus(&self, bus_id: &str) -> Option<BusIdx> {
        self.bus_id_to_idx.get(bus_id).copied()
    }

    pub fn resolve_bus(&self, idx: BusIdx) -> Option<&str> {
        self.idx_to_bus_id.get(idx as usize).map(|s| s.as_str())
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of distinct stops known, including the hub and stops only named in distances.
    pub fn stop_count(&self) -> usize {
        self.idx_to_stop_id.len()
    }

    pub fn bus_count(&self) -> usize {
        self.idx_to_bus_id.len()
    }
}

impl FuelNetwork for RouteGraph {
    type Stop = StopIdx;
    type Bus = BusIdx;

    fn edges(&self) -> &[Edge<StopIdx, BusIdx>] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hub_is_interned_first() {
        let graph = RouteGraph::default();

        assert_eq!(graph.lookup_stop(DEFAULT_HUB), Some(graph.hub()));
        assert_eq!(graph.resolve_stop(graph.hub()), Some("USB"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn distances_are_symmetric() {
        let mut graph = RouteGraph::default();
        graph.add_distance("USB", "StopA", 10.0);
        graph.add_distance("StopB", "USB", 4.5);

        for (a, b) in [("USB", "StopA"), ("USB", "StopB")] {
            assert_eq!(graph.distance_between(a, b), graph.distance_between(b, a));
        }
        assert_eq!(graph.distance_between("StopA", "USB"), Some(10.0));
    }

    #[test]
    fn distance_overwrites_and_reports_missing() {
        let mut graph = RouteGraph::default();
        graph.add_distance("USB", "StopA", 10.0);
        graph.add_distance("StopA", "USB", 12.0);

        assert_eq!(graph.distance_between("USB", "StopA"), Some(12.0));
        assert_eq!(graph.distance_between("StopA", "StopB"), None);
        assert_eq!(graph.distance_between("Nowhere", "USB"), None);
    }

    #[test]
    fn duplicate_edges_are_kept() {
        let mut graph = RouteGraph::default();
        graph.add_edge("Bus1", "USB", "StopA", 5.0);
        graph.add_edge("Bus1", "USB", "StopA", 5.0);

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edges()[0], graph.edges()[1]);
    }

    #[test]
    fn route_hops_start_at_hub() {
        let mut graph = RouteGraph::default();
        graph.add_route("Bus3", &["StopA", "StopB", "USB"], 7.0);

        let hops: Vec<(&str, &str, Fuel)> = graph
            .edges()
            .iter()
            .map(|edge| {
                (
                    graph.resolve_stop(edge.start).unwrap(),
                    graph.resolve_stop(edge.destination).unwrap(),
                    edge.fuel_cost,
                )
            })
            .collect();

        assert_eq!(
            hops,
            vec![
                ("USB", "StopA", 7.0),
                ("StopA", "StopB", 7.0),
                ("StopB", "USB", 7.0),
            ]
        );
    }

    #[test]
    fn first_bus_route_wins() {
        let mut graph = RouteGraph::default();
        graph.add_route("Bus1", &["StopA"], 5.0);
        graph.add_route("Bus1", &["StopB"], 2.0);

        let bus = graph.lookup_bus("Bus1").unwrap();
        let route = graph.bus_route(bus).unwrap();

        assert_eq!(route.fuel_cost, 5.0);
        assert_eq!(route.stops.as_slice(), &[graph.lookup_stop("StopA").unwrap()]);
        // hops of both registrations stay in the graph
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn unknown_bus_has_no_route() {
        let graph = RouteGraph::default();

        assert_eq!(graph.lookup_bus("Ghost"), None);
        assert_eq!(graph.bus_route(42), None);
        assert_eq!(graph.resolve_bus(42), None);
    }

    #[test]
    fn custom_hub() {
        let mut graph = RouteGraph::new("Terminal");
        graph.add_route("Bus1", &["StopA"], 1.0);

        let edge = graph.edges()[0];
        assert_eq!(edge.start, graph.hub());
        assert_eq!(graph.lookup_stop("USB"), None);
    }
}
