/// Credential store trait and key names
pub mod credentials;
/// JSON file backed store
pub mod file;
/// In-memory store
pub mod memory;

pub use credentials::{CredentialKey, CredentialStore};
pub use file::FileCredentialStore;
pub use memory::MemoryCredentialStore;
