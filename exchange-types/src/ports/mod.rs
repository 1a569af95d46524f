//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod ids;
mod repository;

pub use ids::{IdSource, RandomIds};
pub use repository::{CurrencyRepository, ExchangeRepository};
