use crate::api::{ApiClient, ApiError, Kit};
use std::rc::Rc;

#[derive(Clone)]
pub struct AvailableKitsRepository {
    client: Rc<ApiClient>,
}

impl AvailableKitsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_active_kits(&self) -> Result<Vec<Kit>, ApiError> {
        self.client.list_active_kits().await
    }
}
