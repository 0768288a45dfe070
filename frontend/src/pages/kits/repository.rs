use super::utils::{attach_image_url, ImageSlot};
use crate::{
    api::{storage::KIT_IMAGES_BUCKET, ApiClient, ApiError, Kit, NewKit},
    utils::files::PickedFile,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct KitsRepository {
    client: Rc<ApiClient>,
}

impl KitsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_kits(&self) -> Result<Vec<Kit>, ApiError> {
        self.client.list_kits().await
    }

    /// Uploads each picked image, then inserts the kit with the public URLs.
    pub async fn create_kit(
        &self,
        mut kit: NewKit,
        images: Vec<(ImageSlot, PickedFile)>,
    ) -> Result<Kit, ApiError> {
        for (slot, file) in images {
            let url = self
                .client
                .upload_public_image(KIT_IMAGES_BUCKET, &file.name, file.bytes, &file.content_type)
                .await?;
            attach_image_url(&mut kit, slot, url);
        }
        self.client.create_kit(&kit).await
    }

    pub async fn delete_kit(&self, id: String) -> Result<(), ApiError> {
        self.client.delete_kit(&id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::KitStatus;
    use httpmock::prelude::*;
    use serde_json::json;

    fn draft() -> NewKit {
        NewKit {
            name: "Executive Suite".into(),
            description: "MacBook Pro, iPad Pro".into(),
            marketing_description: None,
            deal_code: "DEAL-1".into(),
            rental_price: 299.0,
            rental_term: "24 Months".into(),
            hero_image_url: None,
            detail1_image_url: None,
            detail2_image_url: None,
            status: KitStatus::Active,
        }
    }

    #[tokio::test]
    async fn create_kit_uploads_images_before_insert() {
        let server = MockServer::start_async().await;
        let upload = server.mock(|when, then| {
            when.method(POST)
                .path_contains("/storage/v1/object/kit-images/")
                .header("content-type", "image/jpeg");
            then.status(200).json_body(json!({ "Key": "kit-images/x.jpg" }));
        });
        let insert = server.mock(|when, then| {
            when.method(POST)
                .path("/rest/v1/kits")
                .json_body_partial(r#"{ "status": "active", "name": "Executive Suite" }"#)
                .body_contains("/storage/v1/object/public/kit-images/");
            then.status(201).json_body(json!([{
                "id": "k1",
                "name": "Executive Suite",
                "status": "active",
                "hero_image_url": "https://cdn/x.jpg"
            }]));
        });

        let repo = KitsRepository::new_with_client(Rc::new(ApiClient::new_with_backend(
            server.base_url(),
            "anon-key",
        )));
        let kit = repo
            .create_kit(
                draft(),
                vec![(
                    ImageSlot::Hero,
                    PickedFile {
                        name: "hero.JPG".into(),
                        content_type: "image/jpeg".into(),
                        bytes: vec![1, 2, 3],
                    },
                )],
            )
            .await
            .unwrap();

        upload.assert();
        insert.assert();
        assert_eq!(kit.id, "k1");
    }

    #[tokio::test]
    async fn failed_upload_skips_insert() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path_contains("/storage/v1/object/");
            then.status(400).json_body(json!({ "message": "Bucket not found" }));
        });
        let insert = server.mock(|when, then| {
            when.method(POST).path("/rest/v1/kits");
            then.status(201).json_body(json!([]));
        });

        let repo = KitsRepository::new_with_client(Rc::new(ApiClient::new_with_backend(
            server.base_url(),
            "anon-key",
        )));
        let err = repo
            .create_kit(
                draft(),
                vec![(
                    ImageSlot::Detail1,
                    PickedFile {
                        name: "d1.png".into(),
                        content_type: "image/png".into(),
                        bytes: vec![0],
                    },
                )],
            )
            .await
            .unwrap_err();
        assert_eq!(err.error, "Bucket not found");
        assert_eq!(insert.hits(), 0);
    }
}
