use std::fmt;

use crate::select::{RouteSelection, SelectedRoute};

const NOT_FOUND: &str = "No route found.";

impl fmt::Display for SelectedRoute<'_> {
    /// `Bus3: StopA StopB USB (12.5 km, 7 L)`, with `unknown` for a missing distance.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.bus)?;
        for stop in &self.stops {
            write!(f, " {stop}")?;
        }

        match self.distance {
            Some(distance) => write!(f, " ({distance} km, {} L)", self.fuel_cost),
            None => write!(f, " (unknown km, {} L)", self.fuel_cost),
        }
    }
}

fn section(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    route: Option<&SelectedRoute<'_>>,
) -> fmt::Result {
    writeln!(f, "{title}:")?;
    match route {
        Some(route) => writeln!(f, "  {route}"),
        None => writeln!(f, "  {NOT_FOUND}"),
    }
}

impl fmt::Display for RouteSelection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        section(f, "Cheapest route leaving the hub", self.outbound.as_ref())?;
        section(f, "Cheapest route arriving at the hub", self.inbound.as_ref())?;
        section(f, "Cheapest route overall", self.cheapest.as_ref())?;
        write!(f, "Spanning forest fuel: {} L", self.total_fuel)
    }
}

#[cfg(test)]
mod tests {
    use crate::RouteGraph;

    #[test]
    fn route_line_lists_stops_distance_and_fuel() {
        let mut graph = RouteGraph::default();
        graph.add_distance("USB", "StopA", 12.5);
        graph.add_route("Bus1", &["StopA", "StopB"], 7.0);

        let selection = graph.cheapest_routes();
        let outbound = selection.outbound.unwrap();

        assert_eq!(outbound.to_string(), "Bus1: StopA StopB (12.5 km, 7 L)");
    }

    #[test]
    fn unknown_distance_and_route() {
        let mut graph = RouteGraph::default();
        graph.add_edge("Bus2", "USB", "StopC", 1.5);

        let outbound = graph.cheapest_routes().outbound.unwrap();

        assert_eq!(outbound.to_string(), "Bus2: (unknown km, 1.5 L)");
    }

    #[test]
    fn empty_selection_reports_not_found() {
        let graph = RouteGraph::default();

        assert_eq!(
            graph.cheapest_routes().to_string(),
            "Cheapest route leaving the hub:\n  No route found.\n\
             Cheapest route arriving at the hub:\n  No route found.\n\
             Cheapest route overall:\n  No route found.\n\
             Spanning forest fuel: 0 L"
        );
    }
}
