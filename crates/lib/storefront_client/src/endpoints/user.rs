//! `/user/*`: accounts and session tokens.

use reqwest::Method;
use storefront_core::models::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, TokenPair,
    UpdateProfileRequest, UserProfile,
};
use tracing::{info, warn};

use crate::{Client, ClientError, ClientResult, send_json};

pub struct User<'a> {
    pub(crate) client: &'a Client,
}

impl User<'_> {
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<MessageResponse> {
        send_json(
            self.client
                .anonymous(Method::POST, "/user/auth/register")
                .json(request),
        )
        .await
    }

    /// Log in and store the returned token pair in the session.
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        let response: LoginResponse = send_json(
            self.client
                .anonymous(Method::POST, "/user/auth/login")
                .json(request),
        )
        .await?;

        let Some(access) = response.access_token() else {
            let reason = response
                .message
                .clone()
                .unwrap_or_else(|| "no access token in response".to_string());
            return Err(ClientError::LoginRejected(reason));
        };
        let refresh = response.token.as_ref().and_then(|t| t.refresh.as_deref());
        self.client.session().set_tokens(access, refresh)?;
        info!(email = %request.email, "logged in");
        Ok(response)
    }

    /// Tell the server to end the session, then clear local tokens no
    /// matter how that went.
    ///
    /// A failure to clear the local tokens takes precedence over a server
    /// failure, since it means credentials are still stored.
    pub async fn logout(&self) -> ClientResult<MessageResponse> {
        let reply = send_json(self.client.request(Method::POST, "/user/auth/logout")).await;
        let cleared = self.client.session().clear();

        match (&reply, &cleared) {
            (Err(server), Ok(())) => {
                warn!(error = %server, "server logout failed; local session cleared anyway");
            }
            (Err(server), Err(local)) => {
                warn!(error = %server, "server logout failed");
                warn!(error = %local, "clearing the local session failed; tokens may still be stored");
            }
            (Ok(_), Err(local)) => {
                warn!(error = %local, "clearing the local session failed; tokens may still be stored");
            }
            (Ok(_), Ok(())) => {}
        }
        cleared?;
        reply
    }

    pub async fn profile(&self) -> ClientResult<UserProfile> {
        send_json(self.client.request(Method::GET, "/user/profile")).await
    }

    pub async fn update_profile(
        &self,
        user_id: i64,
        request: &UpdateProfileRequest,
    ) -> ClientResult<MessageResponse> {
        send_json(
            self.client
                .request(Method::PUT, &format!("/user/updation/{user_id}"))
                .json(request),
        )
        .await
    }

    /// Exchange the stored refresh token for a new pair and store it.
    ///
    /// Only ever called explicitly; nothing refreshes on expiry.
    pub async fn refresh(&self) -> ClientResult<TokenPair> {
        let refresh_token = self
            .client
            .session()
            .refresh_token()
            .ok_or(ClientError::NotAuthenticated("refresh token"))?;

        let pair: TokenPair = send_json(
            self.client
                .anonymous(Method::GET, "/user/refresh")
                .bearer_auth(refresh_token),
        )
        .await?;

        match pair.access.as_deref().filter(|a| !a.is_empty()) {
            Some(access) => {
                self.client
                    .session()
                    .set_tokens(access, pair.refresh.as_deref())?;
                Ok(pair)
            }
            None => Err(ClientError::Decode("refresh returned no access token".into())),
        }
    }

    /// Start a password reset; the server mails a one-time code.
    pub async fn reset_password(&self, email: &str) -> ClientResult<MessageResponse> {
        send_json(
            self.client
                .anonymous(Method::POST, "/user/auth/reset-password")
                .query(&[("email", email)]),
        )
        .await
    }

    pub async fn verify_otp(&self, email: &str, otp: &str) -> ClientResult<MessageResponse> {
        send_json(
            self.client
                .anonymous(Method::POST, "/user/auth/verify-otp")
                .query(&[("email", email), ("otp", otp)]),
        )
        .await
    }

    pub async fn change_password(
        &self,
        email: &str,
        new_password: &str,
        otp: Option<&str>,
    ) -> ClientResult<MessageResponse> {
        let mut query = vec![("email", email), ("newPassword", new_password)];
        if let Some(otp) = otp {
            query.push(("otp", otp));
        }
        send_json(
            self.client
                .anonymous(Method::POST, "/user/auth/change-password")
                .query(&query),
        )
        .await
    }
}
