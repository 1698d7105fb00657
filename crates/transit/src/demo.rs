//! Demo transit provider backed by a small hardcoded BMTC dataset.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use indexmap::IndexMap;
use tracing::{info, warn};

use crate::error::TransitError;
use crate::provider::{TransitProvider, MAX_ARRIVALS, MAX_STOP_MATCHES};
use crate::stops::normalize_stop_name;
use crate::types::{BusArrival, FareInfo, RouteInfo};

const BASE_FARE_INR: f64 = 10.0;
const PER_STOP_FARE_INR: f64 = 5.0;
const DEMO_DISTANCE_KM: f64 = 8.5;

/// First arrival ETA and spacing between consecutive arrivals, in minutes.
const FIRST_ETA_MINUTES: u32 = 4;
const ETA_STEP_MINUTES: u32 = 5;

/// Mock provider for demos and tests.
///
/// Routes and the stop → routes index are seeded once in [`new`](Self::new)
/// and never change afterwards.
#[derive(Debug, Clone)]
pub struct DemoTransitProvider {
    routes: IndexMap<String, RouteInfo>,
    stop_routes: IndexMap<String, Vec<String>>,
}

impl Default for DemoTransitProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn route(
    number: &str,
    origin: &str,
    destination: &str,
    stops: &[&str],
    frequency_minutes: u32,
) -> RouteInfo {
    RouteInfo {
        route_number: number.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        stops: stops.iter().map(|s| s.to_string()).collect(),
        frequency_minutes: Some(frequency_minutes),
    }
}

impl DemoTransitProvider {
    /// Build the provider with the built-in mock dataset.
    pub fn new() -> Self {
        let routes: IndexMap<String, RouteInfo> = [
            route(
                "335E",
                "Kengeri Bus Terminal",
                "Kadugodi",
                &["Kengeri", "Vijayanagar", "Majestic", "Shivajinagar", "Indiranagar", "Kadugodi"],
                15,
            ),
            route(
                "G-4",
                "Banashankari",
                "Hebbal",
                &["Banashankari", "Jayanagar", "Majestic", "Yeshwanthpur", "Hebbal"],
                20,
            ),
            route(
                "500K",
                "Kempegowda Bus Station",
                "Hosur Road",
                &["Majestic", "Corporation", "Shantinagar", "BTM Layout", "Hosur Road"],
                12,
            ),
            route(
                "215Y",
                "Yehalanka",
                "Silkboard",
                &["Yehalanka", "Hebbal", "Mekhri Circle", "Majestic", "Silkboard"],
                18,
            ),
        ]
        .into_iter()
        .map(|r| (r.route_number.clone(), r))
        .collect();

        let stop_routes: IndexMap<String, Vec<String>> = [
            ("Majestic", &["335E", "G-4", "500K", "215Y"][..]),
            ("BTM Layout", &["500K", "335E"][..]),
            ("Silk Board", &["215Y", "335E"][..]),
            ("Hebbal", &["G-4", "215Y"][..]),
            ("Indiranagar", &["335E"][..]),
        ]
        .into_iter()
        .map(|(stop, numbers)| {
            (
                stop.to_string(),
                numbers.iter().map(|n| n.to_string()).collect(),
            )
        })
        .collect();

        info!(
            routes = routes.len(),
            stops = stop_routes.len(),
            "Demo transit provider initialized with mock data"
        );

        Self {
            routes,
            stop_routes,
        }
    }

    /// All known stop names, in dataset order.
    pub fn stop_names(&self) -> impl Iterator<Item = &str> {
        self.stop_routes.keys().map(String::as_str)
    }
}

#[async_trait]
impl TransitProvider for DemoTransitProvider {
    async fn get_arrivals(&self, stop_name: &str) -> Result<Vec<BusArrival>, TransitError> {
        let stop = normalize_stop_name(stop_name);

        let Some(route_numbers) = self.stop_routes.get(&stop) else {
            warn!(stop = %stop, "Stop not found");
            return Ok(Vec::new());
        };

        let now = Utc::now();
        let arrivals: Vec<BusArrival> = route_numbers
            .iter()
            .take(MAX_ARRIVALS)
            .filter_map(|number| self.routes.get(number))
            .zip((0u32..).map(|i| FIRST_ETA_MINUTES + i * ETA_STEP_MINUTES))
            .map(|(route, eta_minutes)| BusArrival {
                route_number: route.route_number.clone(),
                destination: route.destination.clone(),
                eta_minutes,
                eta_timestamp: now + Duration::minutes(i64::from(eta_minutes)),
            })
            .collect();

        info!(stop = %stop, count = arrivals.len(), "Found arrivals");
        Ok(arrivals)
    }

    async fn get_route_info(&self, route_number: &str) -> Result<Option<RouteInfo>, TransitError> {
        let key = route_number.trim().to_uppercase();
        let route = self.routes.get(&key).cloned();

        if route.is_some() {
            info!(route = %key, "Found route info");
        } else {
            warn!(route = %key, "Route not found");
        }

        Ok(route)
    }

    async fn get_fare(&self, from_stop: &str, to_stop: &str) -> Result<FareInfo, TransitError> {
        Ok(FareInfo {
            from_stop: normalize_stop_name(from_stop),
            to_stop: normalize_stop_name(to_stop),
            fare_inr: BASE_FARE_INR + PER_STOP_FARE_INR,
            distance_km: Some(DEMO_DISTANCE_KM),
        })
    }

    async fn search_stops(&self, query: &str) -> Result<Vec<String>, TransitError> {
        let needle = query.trim().to_lowercase();

        Ok(self
            .stop_names()
            .filter(|stop| stop.to_lowercase().contains(&needle))
            .take(MAX_STOP_MATCHES)
            .map(str::to_string)
            .collect())
    }

    fn name(&self) -> &str {
        "DemoTransitProvider"
    }
}
