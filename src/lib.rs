pub mod client;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod instruments;
pub mod observability;
pub mod render;
pub mod resilience;
