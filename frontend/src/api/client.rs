use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Duration, Utc};
use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::{cell::RefCell, rc::Rc};

pub use crate::config::BackendConfig;
use crate::{
    api::{query::Query, types::*},
    config,
    utils::storage as storage_utils,
};

pub const SESSION_STORAGE_KEY: &str = "technolease_session";
const PGRST_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Thin client over the hosted auth, table and storage endpoints.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    backend: Option<BackendConfig>,
    session: Rc<RefCell<Option<Session>>>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            backend: None,
            session: Rc::new(RefCell::new(load_persisted_session())),
        }
    }

    pub fn new_with_backend(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            backend: Some(BackendConfig::new(url, anon_key)),
            session: Rc::new(RefCell::new(None)),
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn resolved_backend(&self) -> Result<BackendConfig, ApiError> {
        match &self.backend {
            Some(backend) => Ok(backend.clone()),
            None => config::await_backend_config().await,
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    pub fn set_session(&self, session: Session) {
        persist_session(&session);
        *self.session.borrow_mut() = Some(session);
    }

    pub fn clear_session(&self) {
        clear_persisted_session();
        self.session.borrow_mut().take();
    }

    /// Attaches the project key and the caller's bearer token.
    pub(super) fn with_auth(
        &self,
        builder: RequestBuilder,
        backend: &BackendConfig,
        token: Option<&str>,
    ) -> RequestBuilder {
        let bearer = token
            .map(str::to_string)
            .or_else(|| self.session().map(|s| s.access_token))
            .unwrap_or_else(|| backend.anon_key.clone());
        builder
            .header("apikey", &backend.anon_key)
            .header(header::AUTHORIZATION, format!("Bearer {}", bearer))
    }

    pub(super) fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("session rejected by backend; signing out");
            self.clear_session();
            Self::redirect_to_login_if_needed();
        }
    }

    fn redirect_to_login_if_needed() {
        if storage_utils::current_path().as_deref() == Some("/") {
            return;
        }
        storage_utils::redirect_to("/");
    }

    /// Sends a data request; non-2xx responses become `ApiError`.
    pub(super) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status();
        self.handle_unauthorized_status(status);
        if status.is_success() {
            Ok(response)
        } else {
            Err(error_from_response(response).await)
        }
    }

    fn rest_url(backend: &BackendConfig, table: &str, query: &Query) -> String {
        let base = format!("{}/rest/v1/{}", backend.url, table);
        if query.is_empty() {
            base
        } else {
            format!("{}?{}", base, query.to_query_string())
        }
    }

    pub(super) async fn rest_request(
        &self,
        method: Method,
        table: &str,
        query: &Query,
    ) -> Result<RequestBuilder, ApiError> {
        let backend = self.resolved_backend().await?;
        let url = Self::rest_url(&backend, table, query);
        Ok(self.with_auth(self.client.request(method, url), &backend, None))
    }

    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
    ) -> Result<Vec<T>, ApiError> {
        let request = self.rest_request(Method::GET, table, query).await?;
        let response = self.send(request).await?;
        read_json(response).await
    }

    /// Single-row read; `Ok(None)` when no row matches.
    pub async fn select_single<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
        token: Option<&str>,
    ) -> Result<Option<T>, ApiError> {
        let backend = self.resolved_backend().await?;
        let url = Self::rest_url(&backend, table, query);
        let request = self
            .with_auth(self.client.get(url), &backend, token)
            .header(header::ACCEPT, PGRST_OBJECT);
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status();
        if status == StatusCode::NOT_ACCEPTABLE {
            return Ok(None);
        }
        self.handle_unauthorized_status(status);
        if !status.is_success() {
            return Err(error_from_response(response).await);
        }
        read_json(response).await.map(Some)
    }

    pub async fn insert<T: Serialize, R: DeserializeOwned>(
        &self,
        table: &str,
        row: &T,
    ) -> Result<R, ApiError> {
        let request = self
            .rest_request(Method::POST, table, &Query::new())
            .await?
            .header("Prefer", "return=representation")
            .json(row);
        let response = self.send(request).await?;
        let rows: Vec<R> = read_json(response).await?;
        rows.into_iter()
            .next()
            .ok_or_else(ApiError::no_row_returned)
    }

    pub async fn update<T: Serialize>(
        &self,
        table: &str,
        query: &Query,
        patch: &T,
    ) -> Result<(), ApiError> {
        let request = self
            .rest_request(Method::PATCH, table, query)
            .await?
            .header("Prefer", "return=minimal")
            .json(patch);
        self.send(request).await.map(|_| ())
    }

    pub async fn delete(&self, table: &str, query: &Query) -> Result<(), ApiError> {
        let request = self.rest_request(Method::DELETE, table, query).await?;
        self.send(request).await.map(|_| ())
    }
}

pub(super) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|e| ApiError::parse(format!("Failed to parse response: {}", e)))
}

pub(super) async fn error_from_response(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    error_from_body(status, &body)
}

/// Maps the auth / table / storage error bodies onto `ApiError`.
pub(super) fn error_from_body(status: u16, body: &str) -> ApiError {
    let fallback = || ApiError::http(status, format!("Request failed with status {}", status));
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return fallback();
    };
    let message = ["message", "msg", "error_description", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .filter(|msg| !msg.trim().is_empty());
    let Some(message) = message else {
        return fallback();
    };
    let code = value
        .get("error_code")
        .or_else(|| value.get("code"))
        .and_then(|code| match code {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        })
        .unwrap_or_else(|| format!("HTTP_{}", status));
    ApiError {
        error: message.to_string(),
        code,
        details: value.get("details").filter(|d| !d.is_null()).cloned(),
    }
}

/// Reads the `exp` claim without verifying the token.
pub(super) fn decode_exp(token: &str) -> Option<DateTime<Utc>> {
    let payload = token.split('.').nth(1)?;
    let decoded = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let value: Value = serde_json::from_slice(&decoded).ok()?;
    let exp = value.get("exp")?.as_i64()?;
    DateTime::<Utc>::from_timestamp(exp, 0)
}

pub(super) fn session_expiry(tokens: &TokenResponse, now: DateTime<Utc>) -> DateTime<Utc> {
    tokens
        .expires_at
        .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
        .or_else(|| decode_exp(&tokens.access_token))
        .unwrap_or_else(|| now + Duration::seconds(tokens.expires_in.unwrap_or(3600)))
}

fn load_persisted_session() -> Option<Session> {
    let storage = storage_utils::local_storage().ok()?;
    let raw = storage.get_item(SESSION_STORAGE_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            log::warn!("discarding unreadable stored session: {}", err);
            let _ = storage.remove_item(SESSION_STORAGE_KEY);
            None
        }
    }
}

fn persist_session(session: &Session) {
    let Ok(storage) = storage_utils::local_storage() else {
        return;
    };
    match serde_json::to_string(session) {
        Ok(json) => {
            if storage.set_item(SESSION_STORAGE_KEY, &json).is_err() {
                log::warn!("failed to persist session");
            }
        }
        Err(err) => log::warn!("failed to serialize session: {}", err),
    }
}

fn clear_persisted_session() {
    if let Ok(storage) = storage_utils::local_storage() {
        let _ = storage.remove_item(SESSION_STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        format!("header.{}.sig", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn postgrest_error_uses_message_and_code() {
        let err = error_from_body(
            409,
            r#"{"code":"23505","details":"Key (email) exists","hint":null,"message":"duplicate key"}"#,
        );
        assert_eq!(err.error, "duplicate key");
        assert_eq!(err.code, "23505");
        assert!(err.details.is_some());
    }

    #[test]
    fn auth_error_uses_error_description() {
        let err = error_from_body(
            400,
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );
        assert_eq!(err.error, "Invalid login credentials");
        assert_eq!(err.code, "HTTP_400");
    }

    #[test]
    fn numeric_codes_fall_back_to_status_code() {
        let err = error_from_body(
            422,
            r#"{"code":422,"error_code":"weak_password","msg":"Password should be at least 6 characters"}"#,
        );
        assert_eq!(err.error, "Password should be at least 6 characters");
        assert_eq!(err.code, "weak_password");
    }

    #[test]
    fn unparseable_body_yields_status_message() {
        let err = error_from_body(502, "<html>bad gateway</html>");
        assert_eq!(err.error, "Request failed with status 502");
        assert_eq!(err.code, "HTTP_502");
    }

    #[test]
    fn decode_exp_reads_claim() {
        let token = token_with_payload(r#"{"sub":"u1","exp":1700000000}"#);
        let exp = decode_exp(&token).unwrap();
        assert_eq!(exp.timestamp(), 1_700_000_000);
        assert!(decode_exp("not-a-jwt").is_none());
    }

    #[test]
    fn session_expiry_prefers_explicit_timestamp() {
        let now = DateTime::<Utc>::from_timestamp(1_000, 0).unwrap();
        let tokens = TokenResponse {
            access_token: token_with_payload(r#"{"exp":5000}"#),
            refresh_token: "r".into(),
            expires_in: Some(60),
            expires_at: Some(9_000),
            user: AuthUser {
                id: "u1".into(),
                email: None,
            },
        };
        assert_eq!(session_expiry(&tokens, now).timestamp(), 9_000);

        let from_jwt = TokenResponse {
            expires_at: None,
            ..tokens.clone()
        };
        assert_eq!(session_expiry(&from_jwt, now).timestamp(), 5_000);

        let from_ttl = TokenResponse {
            access_token: "opaque".into(),
            expires_at: None,
            ..tokens
        };
        assert_eq!(session_expiry(&from_ttl, now).timestamp(), 1_060);
    }

    #[test]
    fn rest_url_appends_query_only_when_present() {
        let backend = BackendConfig::new("https://x.supabase.co/", "anon");
        assert_eq!(
            ApiClient::rest_url(&backend, "kits", &Query::new()),
            "https://x.supabase.co/rest/v1/kits"
        );
        assert_eq!(
            ApiClient::rest_url(&backend, "kits", &Query::new().eq("id", "k1")),
            "https://x.supabase.co/rest/v1/kits?id=eq.k1"
        );
    }
}
