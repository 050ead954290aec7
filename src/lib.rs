//! Movie recommendations from a precomputed similarity matrix.
//!
//! A [`services::Catalog`] pairs the title list with its similarity matrix;
//! [`services::top_k`] ranks a row of that matrix and [`services::recommend`]
//! wraps it with title resolution. [`routes::create_router`] serves it over HTTP.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
