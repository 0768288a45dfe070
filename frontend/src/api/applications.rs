use super::{
    client::ApiClient,
    query::{Order, Query},
    types::{ApiError, ApplicationStatus, NewApplication, ResellerApplication, StatusPatch},
};

const APPLICATIONS: &str = "reseller_applications";

impl ApiClient {
    pub async fn list_applications(&self) -> Result<Vec<ResellerApplication>, ApiError> {
        let query = Query::new()
            .select("*")
            .order("created_at", Order::Desc);
        self.select(APPLICATIONS, &query).await
    }

    /// Every new application enters the pipeline as `new`.
    pub async fn create_application(
        &self,
        application: &NewApplication,
    ) -> Result<ResellerApplication, ApiError> {
        let row = NewApplication {
            status: ApplicationStatus::New,
            ..application.clone()
        };
        self.insert(APPLICATIONS, &row).await
    }

    /// Unconditional: any status may be written over any other.
    pub async fn update_application_status(
        &self,
        application_id: &str,
        status: ApplicationStatus,
    ) -> Result<(), ApiError> {
        self.update(
            APPLICATIONS,
            &Query::new().eq("id", application_id),
            &StatusPatch { status },
        )
        .await
    }
}
