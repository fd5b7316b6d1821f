//! Request handlers.
//!
//! Handlers delegate to the repositories in `filmstore_db` and map errors
//! via [`crate::error::AppError`].

pub mod films;
