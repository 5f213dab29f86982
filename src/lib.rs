use std::fmt::Debug;

use log::{debug, trace};

pub mod graph;
pub mod input;
pub mod report;
pub mod select;
pub mod union_find;

pub use graph::{BusIdx, BusRoute, DEFAULT_HUB, RouteGraph, StopIdx};
pub use select::{RouteSelection, SelectedRoute};
pub use union_find::UnionFind;

pub type Fuel = f64;

/// One hop taken by a bus, weighted by that bus's total fuel cost.
///
/// Every hop generated from the same bus route carries the same `fuel_cost`: only the
/// route total is known, so it is broadcast onto each hop rather than divided up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<S, B> {
    pub bus: B,
    pub start: S,
    pub destination: S,
    pub fuel_cost: Fuel,
}

/// Sum of the fuel costs of `edges`.
pub fn mst_total_fuel<S, B>(edges: &[Edge<S, B>]) -> Fuel {
    edges.iter().fold(0.0, |total, edge| total + edge.fuel_cost)
}

/// A network of bus hops, the shape Kruskal and the route selection run over.
pub trait FuelNetwork {
    type Stop: Ord + Copy + Debug;
    type Bus: Copy + Debug;

    /// Every hop in insertion order. Duplicates are kept.
    fn edges(&self) -> &[Edge<Self::Stop, Self::Bus>];

    /// Minimum fuel-cost spanning forest of [`FuelNetwork::edges`].
    ///
    /// Edges are ranked by fuel cost alone. The sort is stable, so among equal costs the
    /// edge inserted first is considered first. Returned edges are in acceptance order.
    /// A disconnected network simply yields a forest, and no edges yield an empty result.
    fn kruskal(&self) -> Vec<Edge<Self::Stop, Self::Bus>> {
        let edges = self.edges();

        // fresh forest on every run, nothing leaks between calls
        let mut forest = UnionFind::from_stops(
            edges
                .iter()
                .flat_map(|edge| [edge.start, edge.destination]),
        );

        let mut ranked: Vec<&Edge<Self::Stop, Self::Bus>> = edges.iter().collect();
        ranked.sort_by(|a, b| a.fuel_cost.total_cmp(&b.fuel_cost));

        let mut mst = Vec::with_capacity(forest.len().saturating_sub(1));
        for edge in ranked {
            if forest.same(edge.start, edge.destination) {
                trace!("rejected {edge:?}, endpoints already connected");
                continue;
            }

            forest.union(edge.start, edge.destination);
            trace!("accepted {edge:?}");
            mst.push(*edge);
        }

        debug!(
            "spanning forest over {} stops keeps {} of {} edges",
            forest.len(),
            mst.len(),
            edges.len()
        );

        mst
    }

    /// Cheapest edge of `mst` leaving `stop`. The first one wins a tie.
    fn cheapest_departure(
        &self,
        mst: &[Edge<Self::Stop, Self::Bus>],
        stop: Self::Stop,
    ) -> Option<Edge<Self::Stop, Self::Bus>> {
        cheapest_of(mst.iter().filter(|edge| edge.start == stop))
    }

    /// Cheapest edge of `mst` arriving at `stop`. The first one wins a tie.
    fn cheapest_arrival(
        &self,
        mst: &[Edge<Self::Stop, Self::Bus>],
        stop: Self::Stop,
    ) -> Option<Edge<Self::Stop, Self::Bus>> {
        cheapest_of(mst.iter().filter(|edge| edge.destination == stop))
    }

    /// Cheapest edge of `mst` in any direction.
    fn cheapest(
        &self,
        mst: &[Edge<Self::Stop, Self::Bus>],
    ) -> Option<Edge<Self::Stop, Self::Bus>> {
        cheapest_of(mst.iter())
    }
}

fn cheapest_of<'a, S: Copy + 'a, B: Copy + 'a>(
    edges: impl Iterator<Item = &'a Edge<S, B>>,
) -> Option<Edge<S, B>> {
    // min_by keeps the first of equal elements
    edges
        .min_by(|a, b| a.fuel_cost.total_cmp(&b.fuel_cost))
        .copied()
}
