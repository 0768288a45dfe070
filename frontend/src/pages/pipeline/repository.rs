use crate::api::{
    ApiClient, ApiError, ApplicationStatus, NewApplication, ResellerApplication,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct PipelineRepository {
    client: Rc<ApiClient>,
}

impl PipelineRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_applications(&self) -> Result<Vec<ResellerApplication>, ApiError> {
        self.client.list_applications().await
    }

    pub async fn create_application(
        &self,
        application: NewApplication,
    ) -> Result<ResellerApplication, ApiError> {
        self.client.create_application(&application).await
    }

    pub async fn set_status(
        &self,
        application_id: String,
        status: ApplicationStatus,
    ) -> Result<(), ApiError> {
        self.client
            .update_application_status(&application_id, status)
            .await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn approve_patches_single_row() {
        let server = MockServer::start_async().await;
        let patch = server.mock(|when, then| {
            when.method("PATCH")
                .path("/rest/v1/reseller_applications")
                .query_param("id", "eq.app-9")
                .json_body(json!({ "status": "approved" }));
            then.status(204);
        });

        let repo = PipelineRepository::new_with_client(Rc::new(ApiClient::new_with_backend(
            server.base_url(),
            "anon-key",
        )));
        repo.set_status("app-9".into(), ApplicationStatus::Approved)
            .await
            .unwrap();
        patch.assert();
    }
}
