//! Bootstrap and HTTP surface of the paygate API server.

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod docs;
pub mod routes;
