use super::{
    repository::PipelineRepository,
    utils::{group_by_status, ApplicationFormState, CardAction, PipelineColumn},
};
use crate::{
    api::{ApiClient, ApiError, ApplicationStatus, NewApplication, ResellerApplication},
    state::message::MessageState,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub struct StatusChange {
    pub application_id: String,
    pub status: ApplicationStatus,
}

#[derive(Clone, Copy)]
pub struct PipelineViewModel {
    pub applications_resource: Resource<u32, Result<Vec<ResellerApplication>, ApiError>>,
    pub columns: Memo<Vec<PipelineColumn>>,
    pub reload: RwSignal<u32>,
    pub status_action: Action<StatusChange, Result<(), ApiError>>,
    pub action_error: RwSignal<Option<ApiError>>,
    pub pending_approval: RwSignal<Option<ResellerApplication>>,
    pub form: RwSignal<ApplicationFormState>,
    pub form_messages: RwSignal<MessageState>,
    pub modal_open: RwSignal<bool>,
    pub create_action: Action<NewApplication, Result<ResellerApplication, ApiError>>,
}

impl PipelineViewModel {
    /// Approve waits for confirmation; every other action updates immediately.
    pub fn run_action(&self, application: ResellerApplication, action: CardAction) {
        if action.needs_confirmation() {
            self.action_error.set(None);
            self.pending_approval.set(Some(application));
        } else {
            self.dispatch_status(application.id, action.target());
        }
    }

    pub fn confirm_approval(&self) {
        if let Some(application) = self.pending_approval.get_untracked() {
            self.dispatch_status(application.id, ApplicationStatus::Approved);
        }
    }

    fn dispatch_status(&self, application_id: String, status: ApplicationStatus) {
        self.action_error.set(None);
        self.status_action.dispatch(StatusChange {
            application_id,
            status,
        });
    }

    pub fn open_modal(&self) {
        self.form.update(ApplicationFormState::reset);
        self.form_messages.update(MessageState::clear);
        self.modal_open.set(true);
    }

    pub fn close_modal(&self) {
        self.modal_open.set(false);
    }

    pub fn submit(&self) {
        match self.form.with_untracked(ApplicationFormState::to_new_application) {
            Ok(application) => {
                self.form_messages.update(MessageState::clear);
                self.create_action.dispatch(application);
            }
            Err(msg) => self.form_messages.update(|m| m.set_error(msg)),
        }
    }
}

pub fn use_pipeline_view_model() -> PipelineViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = PipelineRepository::new_with_client(Rc::new(api));
    let reload = create_rw_signal(0u32);

    let repo_list = repository.clone();
    let applications_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_list.clone();
            async move { repo.fetch_applications().await }
        },
    );

    let columns = create_memo(move |_| {
        applications_resource.with(|result| match result {
            Some(Ok(applications)) => group_by_status(applications),
            _ => group_by_status(&[]),
        })
    });

    let repo_status = repository.clone();
    let status_action = create_action(move |change: &StatusChange| {
        let repo = repo_status.clone();
        let change = change.clone();
        async move { repo.set_status(change.application_id, change.status).await }
    });

    let repo_create = repository;
    let create_application_action = create_action(move |application: &NewApplication| {
        let repo = repo_create.clone();
        let application = application.clone();
        async move { repo.create_application(application).await }
    });

    let vm = PipelineViewModel {
        applications_resource,
        columns,
        reload,
        status_action,
        action_error: create_rw_signal(None),
        pending_approval: create_rw_signal(None),
        form: create_rw_signal(ApplicationFormState::default()),
        form_messages: create_rw_signal(MessageState::default()),
        modal_open: create_rw_signal(false),
        create_action: create_application_action,
    };

    create_effect(move |_| {
        if let Some(result) = status_action.value().get() {
            match result {
                Ok(()) => {
                    vm.pending_approval.set(None);
                    reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => {
                    log::error!("status update failed: {}", err);
                    vm.action_error.set(Some(err));
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = create_application_action.value().get() {
            match result {
                Ok(_) => {
                    vm.modal_open.set(false);
                    vm.form.update(ApplicationFormState::reset);
                    reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => {
                    log::error!("application creation failed: {}", err);
                    vm.form_messages.update(|m| {
                        m.set_error(format!("Failed to create application: {}", err.error))
                    });
                }
            }
        }
    });

    vm
}
