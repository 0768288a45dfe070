use super::{
    repository::ResellersRepository,
    utils::{apply_toggle, assignments_loaded, AssignmentToggle},
};
use crate::api::{ApiClient, ApiError, Kit, UserProfile};
use leptos::*;
use std::{collections::HashSet, rc::Rc};

#[derive(Clone, Copy)]
pub struct ResellersViewModel {
    pub resellers_resource: Resource<u32, Result<Vec<UserProfile>, ApiError>>,
    pub kits_resource: Resource<bool, Result<Vec<Kit>, ApiError>>,
    pub assigned_resource: Resource<Option<String>, Result<Vec<String>, ApiError>>,
    pub managing: RwSignal<Option<UserProfile>>,
    pub assigned: RwSignal<HashSet<String>>,
    pub toggle_action: Action<AssignmentToggle, Result<AssignmentToggle, ApiError>>,
    pub toggle_error: RwSignal<Option<ApiError>>,
}

impl ResellersViewModel {
    pub fn open_assignments(&self, reseller: UserProfile) {
        self.assigned.set(HashSet::new());
        self.toggle_error.set(None);
        self.managing.set(Some(reseller));
    }

    pub fn close_assignments(&self) {
        self.managing.set(None);
    }

    pub fn assignments_ready(&self) -> bool {
        self.assigned_resource
            .with(|state| assignments_loaded(state.as_ref()))
    }

    pub fn toggle_kit(&self, kit_id: &str) {
        let Some(reseller) = self.managing.get_untracked() else {
            return;
        };
        let assigned_resource = self.assigned_resource;
        let ready = untrack(move || {
            assigned_resource.with(|state| assignments_loaded(state.as_ref()))
        });
        if !ready {
            log::warn!("kit assignments for {} not loaded yet", reseller.id);
            return;
        }
        let toggle = self
            .assigned
            .with_untracked(|assigned| AssignmentToggle::for_kit(&reseller.id, kit_id, assigned));
        self.toggle_action.dispatch(toggle);
    }
}

pub fn use_resellers_view_model() -> ResellersViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ResellersRepository::new_with_client(Rc::new(api));
    let managing = create_rw_signal(None::<UserProfile>);
    let assigned = create_rw_signal(HashSet::new());
    let toggle_error = create_rw_signal(None);

    let repo_resellers = repository.clone();
    let resellers_resource = create_resource(
        || 0u32,
        move |_| {
            let repo = repo_resellers.clone();
            async move { repo.fetch_resellers().await }
        },
    );

    // Kits load the first time the overlay opens.
    let repo_kits = repository.clone();
    let kits_resource = create_resource(
        move || managing.with(Option::is_some),
        move |open| {
            let repo = repo_kits.clone();
            async move {
                if open {
                    repo.fetch_active_kits().await
                } else {
                    Ok(Vec::new())
                }
            }
        },
    );

    let repo_assigned = repository.clone();
    let assigned_resource = create_resource(
        move || managing.with(|m| m.as_ref().map(|r| r.id.clone())),
        move |reseller_id| {
            let repo = repo_assigned.clone();
            async move { repo.fetch_assigned(reseller_id).await }
        },
    );

    create_effect(move |_| match assigned_resource.get() {
        Some(Ok(ids)) => assigned.set(ids.into_iter().collect()),
        Some(Err(err)) => {
            log::error!("failed to load kit assignments: {}", err);
            toggle_error.set(Some(err));
        }
        None => {}
    });

    let repo_toggle = repository;
    let toggle_action = create_action(move |toggle: &AssignmentToggle| {
        let repo = repo_toggle.clone();
        let toggle = toggle.clone();
        async move { repo.toggle(toggle).await }
    });

    create_effect(move |_| {
        if let Some(result) = toggle_action.value().get() {
            match result {
                Ok(toggle) => {
                    let still_open = managing
                        .with_untracked(|m| m.as_ref().map(|r| r.id == toggle.reseller_id))
                        .unwrap_or(false);
                    if still_open {
                        assigned.update(|set| apply_toggle(set, &toggle));
                    }
                }
                Err(err) => {
                    log::error!("error toggling assignment: {}", err);
                    toggle_error.set(Some(err));
                }
            }
        }
    });

    ResellersViewModel {
        resellers_resource,
        kits_resource,
        assigned_resource,
        managing,
        assigned,
        toggle_action,
        toggle_error,
    }
}
