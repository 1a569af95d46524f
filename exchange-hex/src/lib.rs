//! # Exchange Hex
//!
//! Application services and HTTP adapter for the exchange catalog.
//!
//! ## Architecture
//!
//! - `service/` - Application services (enforce catalog invariants)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi` - OpenAPI document served by the adapter
//!
//! The services are generic over the repository ports, allowing
//! different repository implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::{CurrencyService, ExchangeService};
