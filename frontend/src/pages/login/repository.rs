use crate::api::{ApiClient, ApiError, LoginRequest, Session};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl Default for LoginRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<Session, ApiError> {
        self.client.login(&request.email, &request.password).await
    }

    pub async fn restore(&self) -> Option<Session> {
        self.client.restore_session().await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.sign_out().await
    }
}
