//! # panel-client
//!
//! A Rust client library for the application API of a game server
//! management panel.
//!
//! This crate provides a type-safe, async interface for managing the panel's
//! servers and users: listing them page by page, fetching, creating,
//! updating and deleting them.
//!
//! ## Features
//!
//! - 🔐 Bearer-token authentication against the application API
//! - 🖥️ Server management (list, get, allocations, create, details/build/startup updates, delete)
//! - 👤 User management (list, get, get by external id, create, update, delete)
//! - 🛡️ Errors that separate transport failures, HTTP status failures and the panel's own error envelope
//!
//! ## Example
//!
//! ```rust,no_run
//! use panel_client::{ApiError, PanelClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PanelClient::builder()
//!         .base_url("https://panel.example.com")
//!         .api_key_from_env("PANEL_API_KEY")?
//!         .build()?;
//!
//!     let servers = client.servers().list().send().await?;
//!     for server in servers.attributes() {
//!         println!("{server}");
//!     }
//!
//!     match client.users().get(7).await {
//!         Ok(user) => println!("Found {}", user.attributes),
//!         Err(e) if e.is_not_found() => println!("No user #7"),
//!         Err(ApiError::Panel { code, detail, .. }) => println!("{code}: {detail}"),
//!         Err(e) => return Err(e.into()),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
mod client;
pub mod endpoint;
mod error;
pub mod models;

pub use api::servers::{ListServersBuilder, ServerHandler};
pub use api::users::{ListUsersBuilder, UserHandler};
#[cfg(feature = "default-client")]
pub use client::{initialize, instance};
pub use client::{PanelClient, PanelClientBuilder, Verb};
pub use endpoint::Endpoint;
pub use error::{decode_error, ApiError, ApiResult, PanelErrorObject, UrlParseError};
pub use models::api_response::{ListResponse, Meta, Pagination, Resource};
pub use models::flexible::FlexibleValue;
pub use models::server::{
    AllocationAttributes, Server, ServerAllocation, ServerAttributes, ServerChange,
    ServerChangeBuilder, ServerContainer, ServerFeatureLimits, ServerLimits, ServerList,
    ServerRelationships,
};
pub use models::user::{User, UserAttributes, UserChange, UserChangeBuilder, UserList};
