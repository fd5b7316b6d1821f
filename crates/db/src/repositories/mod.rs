//! Service layer over [`crate::FilmStore`].
//!
//! Each repository is a zero-sized struct with async associated functions
//! that take the store as their first argument.

pub mod film_repo;

pub use film_repo::{FilmRepo, ReplaceOutcome};
