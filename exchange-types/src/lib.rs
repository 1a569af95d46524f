//! # Exchange Types
//!
//! Domain types and port traits for the currency exchange catalog.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Currency, Exchange, Reversed) and rate arithmetic
//! - `mapping/` - Projection traits turning entities into output shapes
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod mapping;
pub mod ports;

// Re-export commonly used types
pub use domain::{Currency, Exchange, Reversed};
pub use dto::*;
pub use error::{AppError, DomainError, RepoError};
pub use mapping::{
    CurrencyCodeMapper, CurrencyMapper, CurrencyViewMapper, ExchangeMapper, ExchangeViewMapper,
};
pub use ports::{CurrencyRepository, ExchangeRepository, IdSource, RandomIds};
pub use rust_decimal::Decimal;
