//! Text summary of a stitched path for the hosting page or a terminal.

use std::fmt;

use crate::location::StitchedPath;

pub const PLACEHOLDER: &str =
    "Select start and end points on the map and click \"Find Path\" to see the route details";

/// Route stations and total cost of a stitched path.
///
/// Costs from the pathfinding service are metres; they are shown in
/// kilometres. A missing path, or one with zero cost, renders the
/// placeholder instead.
#[derive(Debug, Clone, Copy)]
pub struct PathDetails<'a> {
    path: Option<&'a StitchedPath>,
}

impl<'a> PathDetails<'a> {
    pub fn new(path: Option<&'a StitchedPath>) -> Self {
        Self { path }
    }

    fn shown(&self) -> Option<&'a StitchedPath> {
        self.path.filter(|p| !p.is_empty() && p.total_cost != 0.0)
    }

    pub fn stops(&self) -> usize {
        self.shown().map_or(0, StitchedPath::len)
    }

    pub fn total_km(&self) -> Option<f64> {
        self.shown().map(|p| p.total_cost / 1000.0)
    }
}

impl fmt::Display for PathDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Path Details")?;
        let Some(stitched) = self.shown() else {
            return writeln!(f, "{}", PLACEHOLDER);
        };

        writeln!(f, "Route Stations: {} stops", stitched.len())?;
        for (index, location) in stitched.path.iter().enumerate() {
            writeln!(
                f,
                "{:>3}. {} ({:.6}, {:.6})",
                index + 1,
                location.name,
                location.latitude,
                location.longitude
            )?;
        }
        writeln!(f, "Total Distance Cost: {:.2} KM", stitched.total_cost / 1000.0)
    }
}
