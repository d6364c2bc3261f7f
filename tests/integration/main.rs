mod auth_tests;
mod service_tests;
