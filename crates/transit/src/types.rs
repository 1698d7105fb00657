//! Lookup result types.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// An upcoming bus at a stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusArrival {
    /// Route number, e.g. `500K`.
    pub route_number: String,
    /// Final destination of the route.
    pub destination: String,
    /// Minutes until the bus arrives.
    pub eta_minutes: u32,
    /// Wall-clock arrival estimate.
    pub eta_timestamp: DateTime<Utc>,
}

/// Static description of a bus route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    /// Route number, e.g. `335E`.
    pub route_number: String,
    /// First stop / terminal.
    pub origin: String,
    /// Last stop / terminal.
    pub destination: String,
    /// Stops in travel order.
    pub stops: Vec<String>,
    /// Headway in minutes, if published.
    pub frequency_minutes: Option<u32>,
}

impl RouteInfo {
    /// Whether the route calls at `stop` (exact name match).
    pub fn serves(&self, stop: &str) -> bool {
        self.stops.iter().any(|s| s == stop)
    }
}

/// Fare estimate between two stops.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FareInfo {
    /// Boarding stop.
    pub from_stop: String,
    /// Alighting stop.
    pub to_stop: String,
    /// Fare in rupees.
    pub fare_inr: f64,
    /// Trip distance in kilometres, if known.
    pub distance_km: Option<f64>,
}
