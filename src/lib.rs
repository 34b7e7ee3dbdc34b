// Library exports for testing and benchmarking

pub mod api;
pub mod auth;
pub mod config;
pub mod middleware;
pub mod monitoring;
pub mod routing;
pub mod server;
pub mod state;
pub mod web;

#[cfg(test)]
pub mod test_utils;
