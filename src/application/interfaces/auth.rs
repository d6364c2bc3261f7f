use crate::error::AppError;
use crate::model::requests::{LoginRequest, RegisterRequest, UpdateProfileRequest};
use crate::model::responses::AuthResponse;
use crate::presentation::user::User;
use async_trait::async_trait;

/// Interface for authentication and profile operations
///
/// `login` and `register` store the issued tokens; every later request is
/// authenticated with them automatically.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Creates an account and starts a session for it
    async fn register(&self, data: &RegisterRequest) -> Result<AuthResponse, AppError>;

    /// Starts a session
    async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, AppError>;

    /// Gets the profile of the signed-in user and caches it
    async fn get_profile(&self) -> Result<User, AppError>;

    /// Updates the profile of the signed-in user and caches the result
    async fn update_profile(&self, data: &UpdateProfileRequest) -> Result<User, AppError>;

    /// Ends the session by removing every stored credential
    async fn logout(&self) -> Result<(), AppError>;

    /// Returns the cached profile without contacting the server
    async fn cached_user(&self) -> Result<Option<User>, AppError>;

    /// True when an access token is stored
    async fn is_authenticated(&self) -> Result<bool, AppError>;
}
