//! Data models for the panel API.
//!
//! This module contains the envelopes and resource structures exchanged with
//! the panel's application API.

// Export submodules
pub mod api_response;
pub mod flexible;
pub mod server;
pub mod user;

pub use api_response::{ListResponse, Meta, Pagination, Resource};
pub use flexible::FlexibleValue;
