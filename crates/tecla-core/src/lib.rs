//! # Tecla Core
//!
//! The domain layer of the Tecla user service: entities, ports, domain
//! services and the use cases the HTTP layer calls.
//! This crate has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod use_cases;

#[cfg(test)]
mod testing;

pub use error::DomainError;
