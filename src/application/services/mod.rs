/// Module containing the authentication and profile service
pub mod auth_service;
/// Module containing the category service
pub mod category_service;
/// Module containing the task service
pub mod task_service;

pub use crate::application::interfaces::auth::*;
pub use crate::application::interfaces::category::*;
pub use crate::application::interfaces::task::*;
pub use auth_service::AuthServiceImpl;
pub use category_service::CategoryServiceImpl;
pub use task_service::TaskServiceImpl;
