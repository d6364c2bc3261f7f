/// HTTP request and response descriptors
pub mod http;
/// Request payloads
pub mod requests;
/// Response payloads
pub mod responses;
