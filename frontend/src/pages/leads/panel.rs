use super::{
    components::{form::LeadForm, table::LeadTable},
    view_model::{use_leads_view_model, LeadsViewModel},
};
use crate::components::{
    common::{Button, ButtonVariant},
    empty_state::EmptyState,
    error::InlineErrorMessage,
    layout::{ErrorMessage, Layout, LoadingSpinner, PageHeader, SuccessMessage},
};
use leptos::*;

#[component]
pub fn LeadsPage() -> impl IntoView {
    let vm = use_leads_view_model();
    view! {
        <Layout>
            <LeadsPanel vm=vm />
        </Layout>
    }
}

#[component]
pub fn LeadsPanel(vm: LeadsViewModel) -> impl IntoView {
    let loading = vm.leads_resource.loading();
    let leads = Signal::derive(move || {
        vm.leads_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let fetch_error = Signal::derive(move || {
        vm.leads_resource
            .get()
            .and_then(|result| result.err())
            .map(|err| err.error)
    });
    let success = Signal::derive(move || vm.form_messages.with(|m| m.success.clone()));
    let status_pending = vm.status_action.pending();

    view! {
        <div class="space-y-8">
            <PageHeader
                title="Lead CRM"
                subtitle="Manage your pipeline and client relationships."
            >
                <Button
                    variant=ButtonVariant::Secondary
                    on_click=Callback::new(move |_| vm.toggle_form())
                >
                    {move || if vm.form_open.get() { "Close" } else { "Add Lead" }}
                </Button>
            </PageHeader>
            <Show when=move || fetch_error.get().is_some()>
                <ErrorMessage message=fetch_error.get().unwrap_or_default() />
            </Show>
            <Show when=move || success.get().is_some()>
                <SuccessMessage message=success.get().unwrap_or_default() />
            </Show>
            <InlineErrorMessage error=vm.action_error.into() />
            <Show when=move || vm.form_open.get()>
                <LeadForm vm=vm />
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner /> }>
                <Show
                    when=move || !leads.get().is_empty()
                    fallback=|| view! {
                        <EmptyState
                            title="No leads yet."
                            description="Add your first lead to start tracking your pipeline."
                        />
                    }
                >
                    <LeadTable
                        leads=leads
                        on_status=Callback::new(move |(id, status): (String, String)| {
                            vm.change_status(id, &status)
                        })
                        disabled=status_pending
                    />
                </Show>
            </Show>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, reseller_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn panel_shows_header_and_empty_state() {
        let html = render_to_string(move || {
            provide_auth(Some(reseller_user()));
            let vm = use_leads_view_model();
            view! { <LeadsPanel vm=vm /> }
        });
        assert!(html.contains("Lead CRM"));
        assert!(html.contains("Add Lead"));
        assert!(html.contains("No leads yet."));
    }

    #[test]
    fn open_form_renders_fields() {
        let html = render_to_string(move || {
            provide_auth(Some(reseller_user()));
            let vm = use_leads_view_model();
            vm.toggle_form();
            view! { <LeadsPanel vm=vm /> }
        });
        assert!(html.contains("Client Name"));
        assert!(html.contains("Last Contact"));
        assert!(html.contains("Save Lead"));
    }
}
