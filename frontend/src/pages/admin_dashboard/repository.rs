use crate::api::{ApiClient, ApiError, Kit, ResellerApplication, UserProfile};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminOverview {
    pub kits: Vec<Kit>,
    pub applications: Vec<ResellerApplication>,
    pub resellers: Vec<UserProfile>,
}

#[derive(Clone)]
pub struct AdminDashboardRepository {
    client: Rc<ApiClient>,
}

impl AdminDashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_overview(&self) -> Result<AdminOverview, ApiError> {
        let kits = self.client.list_kits().await?;
        let applications = self.client.list_applications().await?;
        let resellers = self.client.list_resellers().await?;
        Ok(AdminOverview {
            kits,
            applications,
            resellers,
        })
    }
}
