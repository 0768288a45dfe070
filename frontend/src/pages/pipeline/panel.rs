use super::{
    components::{board::PipelineBoard, form::ApplicationForm},
    view_model::{use_pipeline_view_model, PipelineViewModel},
};
use crate::{
    api::ResellerApplication,
    components::{
        common::{Button, Modal},
        confirm_dialog::ConfirmDialog,
        error::InlineErrorMessage,
        layout::{ErrorMessage, Layout, LoadingSpinner, PageHeader},
    },
    pages::pipeline::utils::CardAction,
};
use leptos::*;

pub fn approval_summary(application: &ResellerApplication) -> Vec<String> {
    vec![
        "Create Reseller Account record.".to_string(),
        format!("Send invitation email to {}.", application.email),
        "Grant access to the dashboard.".to_string(),
    ]
}

#[component]
pub fn PipelinePage() -> impl IntoView {
    let vm = use_pipeline_view_model();
    view! {
        <Layout>
            <PipelinePanel vm=vm />
        </Layout>
    }
}

#[component]
pub fn PipelinePanel(vm: PipelineViewModel) -> impl IntoView {
    let loading = vm.applications_resource.loading();
    let fetch_error = Signal::derive(move || {
        vm.applications_resource
            .get()
            .and_then(|result| result.err())
            .map(|err| err.error)
    });
    let status_pending = vm.status_action.pending();
    // While the approval dialog is open its own error block takes over.
    let board_error = Signal::derive(move || {
        vm.action_error
            .get()
            .filter(|_| vm.pending_approval.with(Option::is_none))
    });
    let approval_error = Signal::derive(move || {
        vm.action_error
            .get()
            .filter(|_| vm.pending_approval.with(Option::is_some))
    });
    let approval_message = Signal::derive(move || {
        vm.pending_approval
            .get()
            .map(|app| format!("You are about to approve {}.", app.company_name))
            .unwrap_or_default()
    });

    view! {
        <div class="space-y-6">
            <PageHeader
                title="Reseller Application Pipeline"
                subtitle="Manage and streamline incoming reseller requests."
            >
                <Button on_click=Callback::new(move |_| vm.open_modal())>"Add Application"</Button>
            </PageHeader>
            <Show when=move || fetch_error.get().is_some()>
                <ErrorMessage message=fetch_error.get().unwrap_or_default() />
            </Show>
            <InlineErrorMessage error=board_error />
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <PipelineBoard
                columns=vm.columns
                on_action=Callback::new(move |(application, action): (ResellerApplication, CardAction)| {
                    vm.run_action(application, action)
                })
                disabled=status_pending
            />
            <Modal
                is_open=vm.modal_open.into()
                title="New Reseller Application"
                on_close=Callback::new(move |_| vm.close_modal())
            >
                <ApplicationForm vm=vm />
            </Modal>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_approval.get().is_some())
                title="Approve Reseller?"
                message=approval_message
                confirm_label="Confirm & Send Invitation"
                confirm_disabled=status_pending
                on_confirm=Callback::new(move |_| vm.confirm_approval())
                on_cancel=Callback::new(move |_| vm.pending_approval.set(None))
            >
                <InlineErrorMessage error=approval_error />
                <ul class="text-sm text-zinc-300 space-y-2 bg-zinc-950 border border-zinc-800 rounded-lg p-4">
                    {move || {
                        vm.pending_approval
                            .get()
                            .map(|app| approval_summary(&app))
                            .unwrap_or_default()
                            .into_iter()
                            .map(|item| view! { <li>{format!("• {}", item)}</li> })
                            .collect_view()
                    }}
                </ul>
            </ConfirmDialog>
        </div>
    }
}
