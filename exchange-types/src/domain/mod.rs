//! Domain models for the exchange catalog.

pub mod currency;
pub mod exchange;
pub mod rate;

pub use currency::Currency;
pub use exchange::{Exchange, Reversed};
