//! Domain types and pure field rules for the films service.
//!
//! Nothing in this crate touches the filesystem or the network.

pub mod error;
pub mod film;
pub mod types;
