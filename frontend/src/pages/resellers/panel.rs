use super::{
    components::{assignment::KitAssignmentGrid, list::ResellerCard},
    view_model::{use_resellers_view_model, ResellersViewModel},
};
use crate::{
    api::UserProfile,
    components::{
        common::{Button, Modal},
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{ErrorMessage, Layout, LoadingSpinner, PageHeader},
    },
};
use leptos::*;

#[component]
pub fn ResellersPage() -> impl IntoView {
    let vm = use_resellers_view_model();
    view! {
        <Layout>
            <ResellersPanel vm=vm />
        </Layout>
    }
}

#[component]
pub fn ResellersPanel(vm: ResellersViewModel) -> impl IntoView {
    let loading = vm.resellers_resource.loading();
    let resellers = Signal::derive(move || {
        vm.resellers_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let fetch_error = Signal::derive(move || {
        vm.resellers_resource
            .get()
            .and_then(|result| result.err())
            .map(|err| err.error)
    });
    let kits = Signal::derive(move || {
        vm.kits_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let kits_loading = vm.kits_resource.loading();
    let overlay_title = Signal::derive(move || {
        vm.managing
            .get()
            .map(|reseller| format!("Assign Kits to {}", reseller.display_name()))
            .unwrap_or_default()
    });
    let toggle_pending = vm.toggle_action.pending();
    let grid_disabled = Signal::derive(move || toggle_pending.get() || !vm.assignments_ready());

    view! {
        <div class="space-y-8">
            <PageHeader
                title="Reseller Partners"
                subtitle="Manage reseller accounts and inventory assignments."
            />
            <Show when=move || fetch_error.get().is_some()>
                <ErrorMessage message=fetch_error.get().unwrap_or_default() />
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner /> }>
                <Show
                    when=move || !resellers.get().is_empty()
                    fallback=|| view! { <EmptyState title="No resellers yet." /> }
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <For
                            each=move || resellers.get()
                            key=|reseller| reseller.id.clone()
                            children=move |reseller| view! {
                                <ResellerCard
                                    reseller=reseller
                                    on_manage=Callback::new(move |r: UserProfile| vm.open_assignments(r))
                                />
                            }
                        />
                    </div>
                </Show>
            </Show>
            <Modal
                is_open=Signal::derive(move || vm.managing.get().is_some())
                title=overlay_title
                subtitle="Select which kits this reseller is authorized to sell."
                max_width="max-w-4xl"
                on_close=Callback::new(move |_| vm.close_assignments())
            >
                <div class="p-6 space-y-4">
                    <InlineErrorMessage error=vm.toggle_error.into() />
                    <Show when=move || kits_loading.get()>
                        <LoadingSpinner />
                    </Show>
                    <KitAssignmentGrid
                        kits=kits
                        assigned=vm.assigned
                        on_toggle=Callback::new(move |kit_id: String| vm.toggle_kit(&kit_id))
                        disabled=grid_disabled
                    />
                </div>
                <div class="p-4 border-t border-zinc-800 flex justify-end">
                    <Button on_click=Callback::new(move |_| vm.close_assignments())>"Done"</Button>
                </div>
            </Modal>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::reseller_user;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn overlay_names_the_reseller() {
        let html = render_to_string(move || {
            let vm = use_resellers_view_model();
            vm.open_assignments(reseller_user());
            view! { <ResellersPanel vm=vm /> }
        });
        assert!(html.contains("Reseller Partners"));
        assert!(html.contains("Assign Kits to Partner Shop"));
        assert!(html.contains("Select which kits this reseller is authorized to sell."));
        assert!(html.contains("Done"));
    }

    #[test]
    fn overlay_hidden_until_a_reseller_is_chosen() {
        let html = render_to_string(move || {
            let vm = use_resellers_view_model();
            view! { <ResellersPanel vm=vm /> }
        });
        assert!(!html.contains("Assign Kits to"));
    }
}
