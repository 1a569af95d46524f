//! Application Services
//!
//! Orchestrate domain operations through the repository ports.
//! Contain NO infrastructure logic - pure business orchestration.
//!
//! Both services are generic over their repositories and their output
//! mapper, so adapters and projections are injected at compile time:
//! - Swapping repositories without code changes
//! - Testing with in-memory or recording repos
//! - Compile-time checks for port implementation

mod currency;
mod exchange;

pub use currency::CurrencyService;
pub use exchange::ExchangeService;
