//! Reader for the plain-text route listing.
//!
//! ```text
//! 3 3                          <bus count> <route count>
//! StopA 10.0 StopB 12.5        hub distances, <stop> <km> pairs
//! Bus1 StopA 5.0               <bus> <stop>+ <total fuel>
//! Bus2 StopA 3.0
//! Bus3 StopA StopB USB 7.0
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::graph::RouteGraph;

#[derive(Debug)]
pub enum ParseError {
    Io(io::Error),
    /// The listing ended before the named section.
    UnexpectedEof { expected: &'static str },
    InvalidNumber { line: usize, token: String },
    NegativeValue { line: usize, value: f64 },
    /// A route needs a bus, at least one stop and a fuel cost.
    ShortRoute { line: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read route listing: {err}"),
            Self::UnexpectedEof { expected } => {
                write!(f, "route listing ended before {expected}")
            }
            Self::InvalidNumber { line, token } => {
                write!(f, "line {line}: '{token}' is not a number")
            }
            Self::NegativeValue { line, value } => {
                write!(f, "line {line}: {value} is not a non-negative amount")
            }
            Self::ShortRoute { line } => {
                write!(f, "line {line}: expected '<bus> <stop>+ <fuel>'")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Lines of the listing with their 1-based numbers.
struct Lines<R> {
    inner: io::Lines<R>,
    number: usize,
}

impl<R: BufRead> Lines<R> {
    /// The next line as is, even when blank.
    fn next_raw(&mut self, expected: &'static str) -> Result<(usize, String), ParseError> {
        let line = self
            .inner
            .next()
            .ok_or(ParseError::UnexpectedEof { expected })??;
        self.number += 1;
        Ok((self.number, line))
    }

    /// The next non-blank line.
    fn next_line(&mut self, expected: &'static str) -> Result<(usize, String), ParseError> {
        for line in self.inner.by_ref() {
            self.number += 1;
            let line = line?;
            if !line.trim().is_empty() {
                return Ok((self.number, line));
            }
        }
        Err(ParseError::UnexpectedEof { expected })
    }
}

fn parse_count(line: usize, token: Option<&str>) -> Result<usize, ParseError> {
    let token = token.ok_or(ParseError::UnexpectedEof {
        expected: "the bus and route counts",
    })?;
    token.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        token: token.to_owned(),
    })
}

fn parse_amount(line: usize, token: &str) -> Result<f64, ParseError> {
    let value: f64 = token.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        token: token.to_owned(),
    })?;

    if !value.is_finite() || value < 0.0 {
        return Err(ParseError::NegativeValue { line, value });
    }
    Ok(value)
}

/// Builds a [`RouteGraph`] around `hub` from a route listing.
pub fn parse_network<R: BufRead>(reader: R, hub: &str) -> Result<RouteGraph, ParseError> {
    let mut lines = Lines {
        inner: reader.lines(),
        number: 0,
    };
    let mut graph = RouteGraph::new(hub);

    let (number, header) = lines.next_line("the bus and route counts")?;
    let mut counts = header.split_whitespace();
    let declared_buses = parse_count(number, counts.next())?;
    let route_count = parse_count(number, counts.next())?;

    let (number, distances) = lines.next_raw("the hub distances")?;
    let tokens: Vec<&str> = distances.split_whitespace().collect();
    let mut pairs = tokens.chunks_exact(2);
    for pair in pairs.by_ref() {
        graph.add_distance(hub, pair[0], parse_amount(number, pair[1])?);
    }
    if let [leftover] = pairs.remainder() {
        warn!("line {number}: ignoring unpaired token '{leftover}'");
    }

    for _ in 0..route_count {
        let (number, route) = lines.next_line("all declared routes")?;
        let tokens: Vec<&str> = route.split_whitespace().collect();

        let [bus, stops @ .., fuel] = tokens.as_slice() else {
            return Err(ParseError::ShortRoute { line: number });
        };
        if stops.is_empty() {
            return Err(ParseError::ShortRoute { line: number });
        }

        let fuel_cost = parse_amount(number, fuel)?;
        graph.add_route(bus, stops, fuel_cost);
    }

    if graph.bus_count() != declared_buses {
        debug!(
            "listing declares {declared_buses} buses but its routes name {}",
            graph.bus_count()
        );
    }
    debug!(
        "read {route_count} routes into {} edges over {} stops",
        graph.edge_count(),
        graph.stop_count()
    );

    Ok(graph)
}

/// Reads the listing at `path`. The file is closed before this returns, on success or error.
pub fn read_network(path: impl AsRef<Path>, hub: &str) -> Result<RouteGraph, ParseError> {
    let file = File::open(path)?;
    parse_network(BufReader::new(file), hub)
}
