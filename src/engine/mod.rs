pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod simulator;
pub mod versus;
