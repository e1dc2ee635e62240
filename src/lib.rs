//! Aggregates daily factory simulation results into period dashboards.

pub mod commands;
pub mod config;
pub mod domain;
pub mod logging;
pub mod services;

#[cfg(test)]
mod test_support;
