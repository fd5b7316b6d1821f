//! Route trees.
//!
//! ```text
//! /health                 service and store health
//! /films                  list, create
//! /films/{id}             get, replace, partial update, delete
//! ```

pub mod films;
pub mod health;
