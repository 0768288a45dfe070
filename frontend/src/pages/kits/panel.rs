use super::{
    components::{form::KitForm, list::KitGrid},
    view_model::{use_kits_view_model, KitsViewModel},
};
use crate::{
    api::Kit,
    components::{
        common::{Button, Modal},
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{ErrorMessage, Layout, LoadingSpinner, PageHeader},
    },
};
use leptos::*;

#[component]
pub fn KitsPage() -> impl IntoView {
    let vm = use_kits_view_model();
    view! {
        <Layout>
            <KitsPanel vm=vm />
        </Layout>
    }
}

#[component]
pub fn KitsPanel(vm: KitsViewModel) -> impl IntoView {
    let loading = vm.kits_resource.loading();
    let kits = Signal::derive(move || {
        vm.kits_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let fetch_error = Signal::derive(move || {
        vm.kits_resource
            .get()
            .and_then(|result| result.err())
            .map(|err| err.error)
    });
    let delete_pending = vm.delete_action.pending();
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|kit| format!("\"{}\" will be removed from inventory.", kit.name))
            .unwrap_or_default()
    });

    view! {
        <div class="space-y-6">
            <PageHeader
                title="Inventory Management"
                subtitle="Configure leasing kits available to resellers."
            >
                <Button on_click=Callback::new(move |_| vm.open_modal())>"Add New Kit"</Button>
            </PageHeader>
            <Show when=move || fetch_error.get().is_some()>
                <ErrorMessage message=fetch_error.get().unwrap_or_default() />
            </Show>
            <InlineErrorMessage error=vm.delete_error.into() />
            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="text-center text-zinc-500">
                        <LoadingSpinner />
                        <p>"Loading inventory..."</p>
                    </div>
                }
            >
                <Show
                    when=move || !kits.get().is_empty()
                    fallback=|| view! {
                        <EmptyState title="No kits found. Create your first kit to get started." />
                    }
                >
                    <KitGrid
                        kits=kits
                        on_delete=Callback::new(move |kit: Kit| vm.request_delete(kit))
                    />
                </Show>
            </Show>
            <Modal
                is_open=vm.modal_open.into()
                title="Add New Inventory Kit"
                on_close=Callback::new(move |_| vm.close_modal())
            >
                <KitForm vm=vm />
            </Modal>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.get().is_some())
                title="Delete Kit?"
                message=delete_message
                confirm_label="Delete"
                confirm_disabled=delete_pending
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
            />
        </div>
    }
}
