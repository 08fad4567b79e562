//! In-memory user records served over a small JSON HTTP API.
//!
//! `db` holds the record store, `api` the route table and handlers.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
