use reqwest::Method;

use super::AuthApi;
use crate::client::{JewelLinkClient, RequestAuth};
use crate::error::Result;
use crate::models::{AuthResponse, LoginRequest, LogoutRequest, RegisterRequest, User, UserUpdate};

#[async_trait::async_trait]
impl AuthApi for JewelLinkClient {
    async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse> {
        log::debug!("[AUTH] Logging in user '{}'", credentials.username);
        self.send_json(Method::POST, "auth/login/", Some(credentials), RequestAuth::Anonymous)
            .await
    }

    async fn register(&self, user_data: &RegisterRequest) -> Result<AuthResponse> {
        log::debug!("[AUTH] Registering user '{}'", user_data.username);
        self.send_json(Method::POST, "auth/register/", Some(user_data), RequestAuth::Anonymous)
            .await
    }

    async fn logout(&self, refresh_token: &str) -> Result<()> {
        let body = LogoutRequest {
            refresh: refresh_token.to_string(),
        };
        self.send(Method::POST, "auth/logout/", Some(&body), RequestAuth::Session)
            .await?;
        Ok(())
    }

    async fn get_profile(&self) -> Result<User> {
        self.send_json(Method::GET, "auth/profile/", None::<&()>, RequestAuth::Session)
            .await
    }

    async fn update_profile(&self, update: &UserUpdate) -> Result<User> {
        self.send_json(Method::PATCH, "auth/profile/", Some(update), RequestAuth::Session)
            .await
    }
}
