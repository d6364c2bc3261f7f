/// Category models
pub mod category;
/// Task, attachment and statistics models
pub mod task;
/// User profile models
pub mod user;
