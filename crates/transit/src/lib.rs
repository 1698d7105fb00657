//! Transit data for the BMTC WhatsApp bot.
//!
//! - [`TransitProvider`] - Lookups a transit backend must answer
//! - [`DemoTransitProvider`] - In-memory mock BMTC dataset
//! - [`BusArrival`], [`RouteInfo`], [`FareInfo`] - Lookup results
//! - [`normalize_stop_name`] - Alias and title-case normalization of stop names
//!
//! The demo data is placeholder content with no real-world accuracy. A real
//! backend only has to implement [`TransitProvider`].
//!
//! # Example
//!
//! ```rust
//! use transit::{DemoTransitProvider, TransitProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), transit::TransitError> {
//!     let provider = DemoTransitProvider::new();
//!     let route = provider.get_route_info("500k").await?;
//!     assert_eq!(route.map(|r| r.destination), Some("Hosur Road".to_string()));
//!     Ok(())
//! }
//! ```

mod demo;
mod error;
mod provider;
mod stops;
mod types;

pub use demo::DemoTransitProvider;
pub use error::TransitError;
pub use provider::{TransitProvider, MAX_ARRIVALS, MAX_STOP_MATCHES};
pub use stops::{normalize_stop_name, title_case};
pub use types::{BusArrival, FareInfo, RouteInfo};
