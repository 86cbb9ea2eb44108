//! Typed accessors for the application API, grouped per resource.

// Export submodules
pub mod servers;
pub mod users;
