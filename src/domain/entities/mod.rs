//! Core domain entities.
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! - [`Link`] - A persisted short code to URL mapping
//! - [`NewLink`] - Input for creating a link

pub mod link;

pub use link::{Link, NewLink};
