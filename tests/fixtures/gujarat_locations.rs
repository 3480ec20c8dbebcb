//! Real Gujarat locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. All of them sit inside the
//! default geofence.

use waypoint_planner::location::Location;

/// A named location with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl City {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub fn location(&self) -> Location {
        Location::new(self.name, self.lat, self.lng)
    }
}

pub const AHMEDABAD: City = City::new("Ahmedabad", 23.0225, 72.5714);
pub const GANDHINAGAR: City = City::new("Gandhinagar", 23.2156, 72.6369);
pub const NADIAD: City = City::new("Nadiad", 22.6916, 72.8634);
pub const ANAND: City = City::new("Anand", 22.5645, 72.9289);
pub const VADODARA: City = City::new("Vadodara", 22.3072, 73.1812);
pub const BHARUCH: City = City::new("Bharuch", 21.7051, 72.9959);
pub const SURAT: City = City::new("Surat", 21.1702, 72.8311);
pub const RAJKOT: City = City::new("Rajkot", 22.3039, 70.8022);
pub const BHAVNAGAR: City = City::new("Bhavnagar", 21.7645, 72.1519);
pub const JAMNAGAR: City = City::new("Jamnagar", 22.4707, 70.0577);

/// Outside the geofence: Mumbai, Jodhpur, Karachi.
pub const OUTSIDE: &[City] = &[
    City::new("Mumbai", 19.0760, 72.8777),
    City::new("Jodhpur", 26.2389, 73.0243),
    City::new("Karachi", 24.8607, 67.0011),
];

pub fn locations(cities: &[City]) -> Vec<Location> {
    cities.iter().map(City::location).collect()
}
