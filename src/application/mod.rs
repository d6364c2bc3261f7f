/// Typed client built on the gateway
pub mod client;
/// Application configuration module
pub mod config;
/// Authenticated request gateway with token renewal
pub mod gateway;
/// Service interfaces
pub mod interfaces;
/// Endpoint service implementations
pub mod services;
/// HTTP transport abstraction
pub mod transport;
