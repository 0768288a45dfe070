use super::{repository::LeadsRepository, utils::LeadFormState};
use crate::{
    api::{ApiClient, ApiError, Lead, LeadStatus, NewLead},
    state::{auth::use_auth, message::MessageState},
    utils::time::today_local,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub struct LeadStatusChange {
    pub lead_id: String,
    pub status: LeadStatus,
}

#[derive(Clone, Copy)]
pub struct LeadsViewModel {
    pub reseller_id: Memo<Option<String>>,
    pub leads_resource: Resource<(Option<String>, u32), Result<Vec<Lead>, ApiError>>,
    pub reload: RwSignal<u32>,
    pub status_action: Action<LeadStatusChange, Result<(), ApiError>>,
    pub action_error: RwSignal<Option<ApiError>>,
    pub form_open: RwSignal<bool>,
    pub form: RwSignal<LeadFormState>,
    pub form_messages: RwSignal<MessageState>,
    pub create_action: Action<NewLead, Result<Lead, ApiError>>,
}

impl LeadsViewModel {
    pub fn change_status(&self, lead_id: String, raw_status: &str) {
        let Some(status) = LeadStatus::parse(raw_status) else {
            log::warn!("ignoring unknown lead status {:?}", raw_status);
            return;
        };
        self.action_error.set(None);
        self.status_action.dispatch(LeadStatusChange { lead_id, status });
    }

    pub fn toggle_form(&self) {
        if !self.form_open.get_untracked() {
            self.form.set(LeadFormState::new(today_local()));
            self.form_messages.update(MessageState::clear);
        }
        self.form_open.update(|open| *open = !*open);
    }

    pub fn submit(&self) {
        let Some(reseller_id) = self.reseller_id.get_untracked() else {
            self.form_messages
                .update(|m| m.set_error("Sign in as a reseller to add leads."));
            return;
        };
        match self.form.with_untracked(|form| form.to_new_lead(&reseller_id)) {
            Ok(lead) => {
                self.form_messages.update(MessageState::clear);
                self.create_action.dispatch(lead);
            }
            Err(msg) => self.form_messages.update(|m| m.set_error(msg)),
        }
    }
}

pub fn use_leads_view_model() -> LeadsViewModel {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = LeadsRepository::new_with_client(Rc::new(api));
    let reload = create_rw_signal(0u32);

    let reseller_id = create_memo(move |_| auth.with(|state| state.user.as_ref().map(|u| u.id.clone())));

    let repo_list = repository.clone();
    let leads_resource = create_resource(
        move || (reseller_id.get(), reload.get()),
        move |(reseller_id, _)| {
            let repo = repo_list.clone();
            async move { repo.fetch_leads(reseller_id).await }
        },
    );

    let repo_status = repository.clone();
    let status_action = create_action(move |change: &LeadStatusChange| {
        let repo = repo_status.clone();
        let change = change.clone();
        async move { repo.set_status(change.lead_id, change.status).await }
    });

    let repo_create = repository;
    let create_lead_action = create_action(move |lead: &NewLead| {
        let repo = repo_create.clone();
        let lead = lead.clone();
        async move { repo.create_lead(lead).await }
    });

    let vm = LeadsViewModel {
        reseller_id,
        leads_resource,
        reload,
        status_action,
        action_error: create_rw_signal(None),
        form_open: create_rw_signal(false),
        form: create_rw_signal(LeadFormState::new(today_local())),
        form_messages: create_rw_signal(MessageState::default()),
        create_action: create_lead_action,
    };

    create_effect(move |_| {
        if let Some(result) = status_action.value().get() {
            match result {
                Ok(()) => reload.update(|value| *value = value.wrapping_add(1)),
                Err(err) => {
                    log::error!("lead status update failed: {}", err);
                    vm.action_error.set(Some(err));
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = create_lead_action.value().get() {
            match result {
                Ok(lead) => {
                    vm.form_messages
                        .update(|m| m.set_success(format!("Lead {} added.", lead.name)));
                    vm.form.set(LeadFormState::new(today_local()));
                    vm.form_open.set(false);
                    reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => {
                    log::error!("lead creation failed: {}", err);
                    vm.form_messages
                        .update(|m| m.set_error(format!("Failed to add lead: {}", err.error)));
                }
            }
        }
    });

    vm
}
