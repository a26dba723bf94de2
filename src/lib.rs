pub mod cache;
pub mod client;
pub mod commands;
pub mod config;
pub mod connection;
pub mod data_provider;
pub mod fixtures;
pub mod form;
pub mod formatting;
pub mod schema;
pub mod settings;
pub mod swaparr;
pub mod types;

#[cfg(any(test, feature = "development"))]
pub mod dev;
