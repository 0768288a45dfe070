use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::header;
use uuid::Uuid;

use super::{client::ApiClient, types::ApiError};

pub const KIT_IMAGES_BUCKET: &str = "kit-images";

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'?')
    .add(b'<')
    .add(b'>');

/// Random object name that keeps the original file extension.
pub fn object_name_for(file_name: &str) -> String {
    let stem = Uuid::new_v4().simple().to_string();
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) => {
            format!("{}.{}", stem, ext.to_ascii_lowercase())
        }
        _ => stem,
    }
}

fn object_url(base: &str, bucket: &str, path: &str, public: bool) -> String {
    let scope = if public { "object/public" } else { "object" };
    format!(
        "{}/storage/v1/{}/{}/{}",
        base,
        scope,
        bucket,
        utf8_percent_encode(path, PATH_SEGMENT)
    )
}

impl ApiClient {
    pub async fn upload_object(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ApiError> {
        let backend = self.resolved_backend().await?;
        let url = object_url(&backend.url, bucket, path, false);
        let content_type = if content_type.is_empty() {
            "application/octet-stream"
        } else {
            content_type
        };
        let request = self
            .with_auth(self.http_client().post(url), &backend, None)
            .header(header::CONTENT_TYPE, content_type)
            .body(bytes);
        self.send(request).await.map(|_| ())
    }

    pub async fn public_object_url(&self, bucket: &str, path: &str) -> Result<String, ApiError> {
        let backend = self.resolved_backend().await?;
        Ok(object_url(&backend.url, bucket, path, true))
    }

    /// Uploads into `bucket` under a random name and returns the public URL.
    pub async fn upload_public_image(
        &self,
        bucket: &str,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, ApiError> {
        let path = object_name_for(file_name);
        self.upload_object(bucket, &path, bytes, content_type).await?;
        self.public_object_url(bucket, &path).await
    }
}
