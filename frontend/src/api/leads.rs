use super::{
    client::ApiClient,
    query::{Order, Query},
    types::{ApiError, Lead, LeadStatus, NewLead, StatusPatch},
};

const LEADS: &str = "leads";

impl ApiClient {
    pub async fn list_leads(&self, reseller_id: &str) -> Result<Vec<Lead>, ApiError> {
        let query = Query::new()
            .select("*")
            .eq("reseller_id", reseller_id)
            .order("last_contact", Order::Desc);
        self.select(LEADS, &query).await
    }

    pub async fn create_lead(&self, lead: &NewLead) -> Result<Lead, ApiError> {
        self.insert(LEADS, lead).await
    }

    pub async fn update_lead_status(
        &self,
        lead_id: &str,
        status: LeadStatus,
    ) -> Result<(), ApiError> {
        self.update(LEADS, &Query::new().eq("id", lead_id), &StatusPatch { status })
            .await
    }
}
