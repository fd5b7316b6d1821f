//! JSON-file persistence and the film service layer.
//!
//! [`store::FilmStore`] owns the backing document; [`repositories::FilmRepo`]
//! implements every query and mutation on top of it.

pub mod models;
pub mod repositories;
pub mod store;

pub use store::FilmStore;
