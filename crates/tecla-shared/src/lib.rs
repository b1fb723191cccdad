//! # Tecla Shared
//!
//! Transport types shared by the use cases and the HTTP layer.
//! Nothing in here knows about the domain; payloads are plain data.

pub mod dto;
pub mod response;

pub use response::{ResponseCode, StandardResponse};
