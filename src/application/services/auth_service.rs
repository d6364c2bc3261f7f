use crate::application::client::TaskApiClient;
use crate::application::interfaces::auth::AuthService;
use crate::error::AppError;
use crate::model::requests::{LoginRequest, RegisterRequest, UpdateProfileRequest};
use crate::model::responses::AuthResponse;
use crate::presentation::user::User;
use crate::storage::CredentialKey;
use async_trait::async_trait;
use tracing::{debug, info, warn};

const REGISTER_PATH: &str = "/auth/register/";
const LOGIN_PATH: &str = "/auth/login/";
const PROFILE_PATH: &str = "/auth/profile/";
const PROFILE_UPDATE_PATH: &str = "/auth/profile/update/";

/// Implementation of the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceImpl {
    client: TaskApiClient,
}

impl AuthServiceImpl {
    /// Creates the service on top of `client`
    pub fn new(client: TaskApiClient) -> Self {
        Self { client }
    }

    async fn cache_user(&self, user: &User) -> Result<(), AppError> {
        let json = serde_json::to_string(user)?;
        self.client.store().set(CredentialKey::UserData, &json).await
    }

    /// Persists the tokens and user carried by a login or registration response
    ///
    /// Returns false when the response carried no token pair.
    async fn start_session(&self, response: &AuthResponse) -> Result<bool, AppError> {
        let Some(tokens) = response.token_pair() else {
            return Ok(false);
        };
        self.client
            .store()
            .set_tokens(&tokens.access, &tokens.refresh)
            .await?;
        if let Some(user) = &response.user {
            self.cache_user(user).await?;
        }
        Ok(true)
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn register(&self, data: &RegisterRequest) -> Result<AuthResponse, AppError> {
        info!("Registering user {}", data.username);
        let response: AuthResponse = self.client.post(REGISTER_PATH, data).await?;

        if self.start_session(&response).await? {
            info!("✓ Registered and signed in as {}", data.username);
        } else {
            warn!("Registration response carried no tokens, user must log in");
        }
        Ok(response)
    }

    async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, AppError> {
        info!("Logging in as {}", credentials.username);
        let response: AuthResponse = self.client.post(LOGIN_PATH, credentials).await?;

        if !self.start_session(&response).await? {
            return Err(AppError::Deserialization(
                "login response carried no access/refresh tokens".to_string(),
            ));
        }
        info!("✓ Login successful");
        Ok(response)
    }

    async fn get_profile(&self) -> Result<User, AppError> {
        let user: User = self.client.get(PROFILE_PATH).await?;
        self.cache_user(&user).await?;
        debug!("Profile obtained for {}", user.username);
        Ok(user)
    }

    async fn update_profile(&self, data: &UpdateProfileRequest) -> Result<User, AppError> {
        info!("Updating profile");
        let user: User = self.client.patch(PROFILE_UPDATE_PATH, data).await?;
        self.cache_user(&user).await?;
        Ok(user)
    }

    async fn logout(&self) -> Result<(), AppError> {
        info!("Logging out");
        self.client.store().clear().await?;
        info!("✓ Logged out successfully");
        Ok(())
    }

    async fn cached_user(&self) -> Result<Option<User>, AppError> {
        match self.client.store().get(CredentialKey::UserData).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self
            .client
            .store()
            .get(CredentialKey::AccessToken)
            .await?
            .is_some())
    }
}
