//! The TransitProvider trait definition.

use async_trait::async_trait;

use crate::error::TransitError;
use crate::types::{BusArrival, FareInfo, RouteInfo};

/// Maximum number of arrivals returned for a stop.
pub const MAX_ARRIVALS: usize = 3;

/// Maximum number of stop names returned by a search.
pub const MAX_STOP_MATCHES: usize = 5;

/// Lookups a transit data backend must answer.
///
/// The demo implementation is in-memory; real backends will call out to a
/// network service, hence the async methods. Object-safe, so callers can hold
/// an `Arc<dyn TransitProvider>`.
#[async_trait]
pub trait TransitProvider: Send + Sync {
    /// Upcoming buses at a stop, soonest first. Unknown stops give an empty list.
    async fn get_arrivals(&self, stop_name: &str) -> Result<Vec<BusArrival>, TransitError>;

    /// Route details, or `None` when the route is not known.
    async fn get_route_info(&self, route_number: &str) -> Result<Option<RouteInfo>, TransitError>;

    /// Fare estimate between two stops.
    async fn get_fare(&self, from_stop: &str, to_stop: &str) -> Result<FareInfo, TransitError>;

    /// Stop names containing `query` (case-insensitive), at most [`MAX_STOP_MATCHES`].
    async fn search_stops(&self, query: &str) -> Result<Vec<String>, TransitError>;

    /// Human-readable name of the backend.
    fn name(&self) -> &str;
}
