use serde::Deserialize;

use super::{
    client::ApiClient,
    query::Query,
    types::{ApiError, KitAssignment, Role, UserProfile},
};

const PROFILES: &str = "profiles";
const RESELLER_KITS: &str = "reseller_kits";

#[derive(Deserialize)]
struct AssignedKit {
    kit_id: String,
}

impl ApiClient {
    pub async fn list_resellers(&self) -> Result<Vec<UserProfile>, ApiError> {
        let query = Query::new()
            .select("*")
            .eq("role", Role::Reseller.as_str());
        self.select(PROFILES, &query).await
    }

    pub async fn list_assigned_kit_ids(&self, reseller_id: &str) -> Result<Vec<String>, ApiError> {
        let query = Query::new()
            .select("kit_id")
            .eq("reseller_id", reseller_id);
        let rows: Vec<AssignedKit> = self.select(RESELLER_KITS, &query).await?;
        Ok(rows.into_iter().map(|row| row.kit_id).collect())
    }

    pub async fn assign_kit(&self, reseller_id: &str, kit_id: &str) -> Result<(), ApiError> {
        let row = KitAssignment {
            reseller_id: reseller_id.to_string(),
            kit_id: kit_id.to_string(),
        };
        let _: KitAssignment = self.insert(RESELLER_KITS, &row).await?;
        Ok(())
    }

    pub async fn unassign_kit(&self, reseller_id: &str, kit_id: &str) -> Result<(), ApiError> {
        let query = Query::new()
            .eq("reseller_id", reseller_id)
            .eq("kit_id", kit_id);
        self.delete(RESELLER_KITS, &query).await
    }
}
