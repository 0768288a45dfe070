use super::repository::AvailableKitsRepository;
use crate::api::{ApiClient, ApiError, Kit};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AvailableKitsViewModel {
    pub kits_resource: Resource<u32, Result<Vec<Kit>, ApiError>>,
}

pub fn use_available_kits_view_model() -> AvailableKitsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AvailableKitsRepository::new_with_client(Rc::new(api));
    let kits_resource = create_resource(
        || 0u32,
        move |_| {
            let repo = repository.clone();
            async move { repo.fetch_active_kits().await }
        },
    );
    AvailableKitsViewModel { kits_resource }
}
