use super::{
    client::ApiClient,
    query::{Order, Query},
    types::{ApiError, Kit, KitStatus, NewKit},
};

const KITS: &str = "kits";

impl ApiClient {
    pub async fn list_kits(&self) -> Result<Vec<Kit>, ApiError> {
        let query = Query::new()
            .select("*")
            .order("created_at", Order::Desc);
        self.select(KITS, &query).await
    }

    pub async fn list_active_kits(&self) -> Result<Vec<Kit>, ApiError> {
        let query = Query::new()
            .select("*")
            .eq("status", KitStatus::Active.as_str());
        self.select(KITS, &query).await
    }

    pub async fn create_kit(&self, kit: &NewKit) -> Result<Kit, ApiError> {
        self.insert(KITS, kit).await
    }

    pub async fn delete_kit(&self, kit_id: &str) -> Result<(), ApiError> {
        self.delete(KITS, &Query::new().eq("id", kit_id)).await
    }
}
