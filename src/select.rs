use log::debug;

use crate::graph::{BusIdx, RouteGraph, StopIdx};
use crate::{Edge, Fuel, FuelNetwork};

/// An MST edge resolved back to its bus's named route, borrowed from the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedRoute<'g> {
    pub edge: Edge<StopIdx, BusIdx>,
    pub bus: &'g str,
    /// Stops of the bus's full route; empty when no route is registered for the bus.
    pub stops: Vec<&'g str>,
    /// `None` when no distance was recorded for the edge's endpoints.
    pub distance: Option<f64>,
    pub fuel_cost: Fuel,
}

/// Cheapest MST edges out of and into the hub, plus the cheapest overall.
/// Each one is `None` when no MST edge qualifies.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSelection<'g> {
    pub outbound: Option<SelectedRoute<'g>>,
    pub inbound: Option<SelectedRoute<'g>>,
    pub cheapest: Option<SelectedRoute<'g>>,
    pub total_fuel: Fuel,
}

impl RouteGraph {
    /// Resolves `edge` to its bus's name, stops and recorded distance.
    pub fn resolve_edge(&self, edge: Edge<StopIdx, BusIdx>) -> SelectedRoute<'_> {
        let stops: Vec<&str> = self
            .bus_route(edge.bus)
            .map(|route| {
                route
                    .stops
                    .iter()
                    .filter_map(|&stop| self.resolve_stop(stop))
                    .collect()
            })
            .unwrap_or_default();

        SelectedRoute {
            edge,
            bus: self.resolve_bus(edge.bus).unwrap_or_default(),
            stops,
            distance: self.distance(edge.start, edge.destination),
            fuel_cost: edge.fuel_cost,
        }
    }

    /// Picks the cheapest outbound and inbound hub edges out of `mst`, independently.
    pub fn select_routes(&self, mst: &[Edge<StopIdx, BusIdx>]) -> RouteSelection<'_> {
        let hub = self.hub();

        let outbound = self.cheapest_departure(mst, hub);
        let inbound = self.cheapest_arrival(mst, hub);
        debug!(
            "outbound pick {:?}, inbound pick {:?}",
            outbound.map(|edge| edge.bus),
            inbound.map(|edge| edge.bus)
        );

        RouteSelection {
            outbound: outbound.map(|edge| self.resolve_edge(edge)),
            inbound: inbound.map(|edge| self.resolve_edge(edge)),
            cheapest: self.cheapest(mst).map(|edge| self.resolve_edge(edge)),
            total_fuel: crate::mst_total_fuel(mst),
        }
    }

    /// Runs Kruskal and selects routes from its result.
    pub fn cheapest_routes(&self) -> RouteSelection<'_> {
        let mst = self.kruskal();
        self.select_routes(&mst)
    }
}
