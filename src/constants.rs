/// Base URL used when `TASK_API_URL` is unset or empty
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";
/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "TASK_API_URL";
/// Environment variable holding the request timeout in seconds
pub const API_TIMEOUT_ENV: &str = "TASK_API_TIMEOUT";
/// Environment variable naming the file used by the persistent credential store
pub const CREDENTIALS_PATH_ENV: &str = "TASK_CREDENTIALS_PATH";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("task-client/", env!("CARGO_PKG_VERSION"));
/// Path of the access token renewal endpoint, relative to the base URL
pub const REFRESH_PATH: &str = "/auth/refresh/";
/// Capacity of the session event broadcast channel
pub const SESSION_EVENT_CAPACITY: usize = 16;
/// Length of the correlation id attached to each dispatch span
pub const REQUEST_ID_LEN: usize = 8;
