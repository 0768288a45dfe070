use chrono::Utc;
use reqwest::Method;

use super::{
    client::{error_from_response, read_json, session_expiry, ApiClient},
    query::Query,
    types::{
        ApiError, PasswordGrant, PasswordUpdate, RefreshGrant, Session, TokenResponse,
        UserProfile,
    },
};

impl ApiClient {
    async fn token_grant<T: serde::Serialize>(
        &self,
        grant_type: &str,
        body: &T,
    ) -> Result<TokenResponse, ApiError> {
        let backend = self.resolved_backend().await?;
        let url = format!("{}/auth/v1/token?grant_type={}", backend.url, grant_type);
        // Grants authenticate with the project key only.
        let response = self
            .http_client()
            .post(url)
            .header("apikey", &backend.anon_key)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        if response.status().is_success() {
            read_json(response).await
        } else {
            Err(error_from_response(response).await)
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        self.token_grant(
            "password",
            &PasswordGrant {
                email: email.trim().to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    pub async fn refresh_tokens(&self, refresh_token: &str) -> Result<TokenResponse, ApiError> {
        self.token_grant(
            "refresh_token",
            &RefreshGrant {
                refresh_token: refresh_token.to_string(),
            },
        )
        .await
    }

    pub async fn fetch_profile(
        &self,
        user_id: &str,
        token: Option<&str>,
    ) -> Result<Option<UserProfile>, ApiError> {
        let query = Query::new().select("*").eq("id", user_id);
        self.select_single("profiles", &query, token).await
    }

    /// Password sign-in followed by the role lookup in `profiles`.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let tokens = self.sign_in(email, password).await?;
        let profile = self
            .fetch_profile(&tokens.user.id, Some(&tokens.access_token))
            .await?;
        let Some(mut profile) = profile else {
            log::error!("no profile row for auth user {}", tokens.user.id);
            return Err(ApiError::profile_missing());
        };
        if profile.email.is_empty() {
            profile.email = tokens.user.email.clone().unwrap_or_default();
        }
        let session = Session {
            expires_at: session_expiry(&tokens, Utc::now()),
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            user: profile,
        };
        self.set_session(session.clone());
        log::info!("signed in as {} ({})", session.user.email, session.user.role.as_str());
        Ok(session)
    }

    /// Returns the stored session, refreshing it once if it has expired.
    pub async fn restore_session(&self) -> Option<Session> {
        let stored = self.session()?;
        let now = Utc::now();
        if !stored.is_expired_at(now) {
            return Some(stored);
        }
        match self.refresh_tokens(&stored.refresh_token).await {
            Ok(tokens) => {
                let session = Session {
                    expires_at: session_expiry(&tokens, now),
                    access_token: tokens.access_token,
                    refresh_token: tokens.refresh_token,
                    user: stored.user,
                };
                self.set_session(session.clone());
                Some(session)
            }
            Err(err) => {
                log::warn!("session refresh failed: {}", err);
                self.clear_session();
                None
            }
        }
    }

    pub async fn update_password(&self, new_password: &str) -> Result<(), ApiError> {
        let backend = self.resolved_backend().await?;
        let request = self
            .with_auth(
                self.http_client()
                    .request(Method::PUT, format!("{}/auth/v1/user", backend.url)),
                &backend,
                None,
            )
            .json(&PasswordUpdate {
                password: new_password.to_string(),
            });
        self.send(request).await.map(|_| ())
    }

    /// Revokes the session server-side when possible; always clears it locally.
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        if self.session().is_none() {
            return Ok(());
        }
        let result = async {
            let backend = self.resolved_backend().await?;
            let request = self.with_auth(
                self.http_client()
                    .post(format!("{}/auth/v1/logout", backend.url)),
                &backend,
                None,
            );
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
            if response.status().is_success() {
                Ok(())
            } else {
                Err(error_from_response(response).await)
            }
        }
        .await;
        self.clear_session();
        if let Err(err) = &result {
            log::warn!("remote sign-out failed: {}", err);
        }
        result
    }
}
