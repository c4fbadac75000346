#![warn(clippy::all)]

pub mod clock;
pub mod config;
pub mod recency;
pub mod render;
pub mod routes;
pub mod store;
pub mod types;
pub mod views;
