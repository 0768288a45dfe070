use super::{
    repository::{AdminDashboardRepository, AdminOverview},
    utils::{compute_stats, AdminStats},
};
use crate::api::{ApiClient, ApiError};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AdminDashboardViewModel {
    pub overview_resource: Resource<u32, Result<AdminOverview, ApiError>>,
    pub stats: Memo<Option<AdminStats>>,
    pub reload: RwSignal<u32>,
}

pub fn use_admin_dashboard_view_model() -> AdminDashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AdminDashboardRepository::new_with_client(Rc::new(api));
    let reload = create_rw_signal(0u32);

    let overview_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repository.clone();
            async move { repo.fetch_overview().await }
        },
    );

    let stats = create_memo(move |_| {
        overview_resource
            .get()
            .and_then(|result| result.ok())
            .map(|overview| compute_stats(&overview))
    });

    AdminDashboardViewModel {
        overview_resource,
        stats,
        reload,
    }
}
