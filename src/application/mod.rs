/// Environment based configuration
pub mod config;
/// Session state and request execution
pub mod connection;
/// Service interfaces, one trait per endpoint group
pub mod interfaces;
/// Service implementations on [`connection::Connection`]
pub mod services;
