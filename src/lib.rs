//! PriceDB: an in-memory item → price store served over HTTP.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
pub mod routes;
pub mod services;
pub mod state;
