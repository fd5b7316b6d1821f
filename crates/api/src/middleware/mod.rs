//! Request middleware.
//!
//! - [`request_counter::count_get_requests`] -- Counts GET requests and logs the running total.

pub mod request_counter;
