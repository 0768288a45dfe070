use super::utils::AssignmentToggle;
use crate::api::{ApiClient, ApiError, Kit, UserProfile};
use std::rc::Rc;

#[derive(Clone)]
pub struct ResellersRepository {
    client: Rc<ApiClient>,
}

impl ResellersRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_resellers(&self) -> Result<Vec<UserProfile>, ApiError> {
        self.client.list_resellers().await
    }

    pub async fn fetch_active_kits(&self) -> Result<Vec<Kit>, ApiError> {
        self.client.list_active_kits().await
    }

    pub async fn fetch_assigned(&self, reseller_id: Option<String>) -> Result<Vec<String>, ApiError> {
        match reseller_id {
            Some(id) => self.client.list_assigned_kit_ids(&id).await,
            None => Ok(Vec::new()),
        }
    }

    /// Writes one toggle and hands it back once the backend accepted it.
    pub async fn toggle(&self, toggle: AssignmentToggle) -> Result<AssignmentToggle, ApiError> {
        if toggle.assign {
            self.client
                .assign_kit(&toggle.reseller_id, &toggle.kit_id)
                .await?;
        } else {
            self.client
                .unassign_kit(&toggle.reseller_id, &toggle.kit_id)
                .await?;
        }
        Ok(toggle)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repo(server: &MockServer) -> ResellersRepository {
        ResellersRepository::new_with_client(Rc::new(ApiClient::new_with_backend(
            server.base_url(),
            "anon-key",
        )))
    }

    #[tokio::test]
    async fn toggle_inserts_or_deletes_assignment_row() {
        let server = MockServer::start_async().await;
        let insert = server.mock(|when, then| {
            when.method(POST)
                .path("/rest/v1/reseller_kits")
                .json_body(json!({ "reseller_id": "r1", "kit_id": "k1" }));
            then.status(201)
                .json_body(json!([{ "reseller_id": "r1", "kit_id": "k1" }]));
        });
        let delete = server.mock(|when, then| {
            when.method(DELETE)
                .path("/rest/v1/reseller_kits")
                .query_param("reseller_id", "eq.r1")
                .query_param("kit_id", "eq.k2");
            then.status(204);
        });

        let repo = repo(&server);
        let added = repo
            .toggle(AssignmentToggle {
                reseller_id: "r1".into(),
                kit_id: "k1".into(),
                assign: true,
            })
            .await
            .unwrap();
        assert!(added.assign);
        repo.toggle(AssignmentToggle {
            reseller_id: "r1".into(),
            kit_id: "k2".into(),
            assign: false,
        })
        .await
        .unwrap();

        insert.assert();
        delete.assert();
    }

    #[tokio::test]
    async fn no_reseller_means_no_request() {
        let server = MockServer::start_async().await;
        let any = server.mock(|when, then| {
            when.path_contains("/rest/v1/");
            then.status(500);
        });
        assert!(repo(&server).fetch_assigned(None).await.unwrap().is_empty());
        assert_eq!(any.hits(), 0);
    }
}
