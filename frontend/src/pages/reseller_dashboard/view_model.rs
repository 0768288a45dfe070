use super::{
    repository::ResellerDashboardRepository,
    utils::{compute_lead_stats, LeadStats},
};
use crate::{
    api::{ApiClient, ApiError, Lead},
    state::auth::use_auth,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ResellerDashboardViewModel {
    pub leads_resource: Resource<Option<String>, Result<Vec<Lead>, ApiError>>,
    pub stats: Memo<Option<LeadStats>>,
}

pub fn use_reseller_dashboard_view_model() -> ResellerDashboardViewModel {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ResellerDashboardRepository::new_with_client(Rc::new(api));

    let leads_resource = create_resource(
        move || auth.with(|state| state.user.as_ref().map(|u| u.id.clone())),
        move |reseller_id| {
            let repo = repository.clone();
            async move { repo.fetch_leads(reseller_id).await }
        },
    );

    let stats = create_memo(move |_| {
        leads_resource
            .get()
            .and_then(|result| result.ok())
            .map(|leads| compute_lead_stats(&leads))
    });

    ResellerDashboardViewModel {
        leads_resource,
        stats,
    }
}
