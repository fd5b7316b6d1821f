//! Persisted records and request DTOs.

pub mod film;
