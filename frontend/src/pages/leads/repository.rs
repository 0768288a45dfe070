use crate::api::{ApiClient, ApiError, Lead, LeadStatus, NewLead};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeadsRepository {
    client: Rc<ApiClient>,
}

impl LeadsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_leads(&self, reseller_id: Option<String>) -> Result<Vec<Lead>, ApiError> {
        match reseller_id {
            Some(id) => self.client.list_leads(&id).await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn create_lead(&self, lead: NewLead) -> Result<Lead, ApiError> {
        self.client.create_lead(&lead).await
    }

    pub async fn set_status(&self, lead_id: String, status: LeadStatus) -> Result<(), ApiError> {
        self.client.update_lead_status(&lead_id, status).await
    }
}
