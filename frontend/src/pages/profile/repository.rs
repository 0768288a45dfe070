use crate::api::{ApiClient, ApiError};

pub async fn update_password(client: ApiClient, new_password: String) -> Result<(), ApiError> {
    client.update_password(&new_password).await
}
