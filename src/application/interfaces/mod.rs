/// Authentication and profile service interface
pub mod auth;
/// Category service interface
pub mod category;
/// Task service interface
pub mod task;
