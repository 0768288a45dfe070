use super::{utils::AdminStats, view_model::use_admin_dashboard_view_model};
use crate::components::{
    cards::{Card, StatCard},
    layout::{ErrorMessage, Layout, LoadingSpinner, PageHeader},
};
use leptos::*;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let vm = use_admin_dashboard_view_model();
    let loading = vm.overview_resource.loading();
    let fetch_error = Signal::derive(move || {
        vm.overview_resource
            .get()
            .and_then(|result| result.err())
            .map(|err| err.error)
    });

    view! {
        <Layout>
            <div class="space-y-8">
                <PageHeader
                    title="Command Center"
                    subtitle="Overview of platform performance and inventory."
                />
                <Show when=move || fetch_error.get().is_some()>
                    <ErrorMessage message=fetch_error.get().unwrap_or_default() />
                </Show>
                <Show when=move || loading.get()>
                    <LoadingSpinner />
                </Show>
                {move || vm.stats.get().map(|stats| view! { <AdminStatsView stats=stats /> })}
            </div>
        </Layout>
    }
}

#[component]
pub fn AdminStatsView(stats: AdminStats) -> impl IntoView {
    let value = |n: usize| Signal::derive(move || n.to_string());
    let pipeline = stats.pipeline.clone();
    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <StatCard
                    label="Total Inventory"
                    value=value(stats.total_kits)
                    hint=format!("{} active kits", stats.active_kits)
                />
                <StatCard label="Open Applications" value=value(stats.open_applications) hint="Requires attention" />
                <StatCard label="Approved Partners" value=value(stats.approved_applications) />
                <StatCard label="Resellers" value=value(stats.reseller_count) hint="Partner accounts" />
            </div>
            <Card>
                <h3 class="text-lg font-semibold text-white mb-6">"Application Pipeline"</h3>
                <div class="grid grid-cols-2 md:grid-cols-5 gap-4">
                    {pipeline
                        .into_iter()
                        .map(|(status, count)| view! {
                            <div class="p-3 rounded-lg border border-zinc-800">
                                <p class="text-xs text-zinc-500">{status.column_label()}</p>
                                <p class="text-2xl font-bold text-white">{count}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </Card>
        </div>
    }
}
