use crate::api::{ApiClient, ApiError, Lead};
use std::rc::Rc;

#[derive(Clone)]
pub struct ResellerDashboardRepository {
    client: Rc<ApiClient>,
}

impl ResellerDashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_leads(&self, reseller_id: Option<String>) -> Result<Vec<Lead>, ApiError> {
        match reseller_id {
            Some(id) => self.client.list_leads(&id).await,
            None => Ok(Vec::new()),
        }
    }
}
