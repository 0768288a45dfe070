use super::{utils::LeadStats, view_model::use_reseller_dashboard_view_model};
use crate::{
    components::{
        cards::{Card, StatCard},
        layout::{ErrorMessage, Layout, LoadingSpinner, PageHeader},
    },
    utils::{format::format_rand, time::format_date},
};
use leptos::*;

#[component]
pub fn ResellerDashboardPage() -> impl IntoView {
    let vm = use_reseller_dashboard_view_model();
    let loading = vm.leads_resource.loading();
    let fetch_error = Signal::derive(move || {
        vm.leads_resource
            .get()
            .and_then(|result| result.err())
            .map(|err| err.error)
    });

    view! {
        <Layout>
            <div class="space-y-8">
                <PageHeader
                    title="Overview"
                    subtitle="Welcome back. Here is your performance summary."
                />
                <Show when=move || fetch_error.get().is_some()>
                    <ErrorMessage message=fetch_error.get().unwrap_or_default() />
                </Show>
                <Show when=move || loading.get()>
                    <LoadingSpinner />
                </Show>
                {move || vm.stats.get().map(|stats| view! { <LeadStatsView stats=stats /> })}
            </div>
        </Layout>
    }
}

#[component]
pub fn LeadStatsView(stats: LeadStats) -> impl IntoView {
    let pipeline = format_rand(stats.pipeline_value);
    let closed = format_rand(stats.closed_value);
    let total = stats.total_leads;
    let open = stats.open_leads;
    let recent = stats.recent.clone();
    let by_status = stats.by_status.clone();

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <StatCard label="Total Leads" value=Signal::derive(move || total.to_string()) />
                <StatCard label="Open Leads" value=Signal::derive(move || open.to_string()) hint="Not yet closed" />
                <StatCard label="Pipeline Value" value=Signal::derive(move || pipeline.clone()) />
                <StatCard label="Closed Value" value=Signal::derive(move || closed.clone()) />
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <Card>
                    <h3 class="text-lg font-semibold text-white mb-4">"Lead Status Distribution"</h3>
                    <div class="space-y-3">
                        {by_status
                            .into_iter()
                            .map(|(status, count)| view! {
                                <div class="flex justify-between text-sm">
                                    <span class="text-zinc-400 capitalize">{status.as_str()}</span>
                                    <span class="text-white font-semibold">{count}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </Card>
                <Card>
                    <h3 class="text-lg font-semibold text-white mb-4">"Recent Activity"</h3>
                    {if recent.is_empty() {
                        view! { <p class="text-sm text-zinc-500">"No recent contacts."</p> }.into_view()
                    } else {
                        recent
                            .into_iter()
                            .map(|lead| {
                                let when = lead
                                    .last_contact
                                    .map(format_date)
                                    .unwrap_or_else(|| "Not contacted".to_string());
                                view! {
                                    <div class="flex items-center gap-4 p-3 rounded-lg border border-transparent hover:border-zinc-800">
                                        <div class="w-2 h-2 rounded-full bg-blue-500"></div>
                                        <div class="flex-1">
                                            <p class="text-sm text-white">{format!("{} at {}", lead.name, lead.company)}</p>
                                            <p class="text-xs text-zinc-500">{when}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </Card>
            </div>
        </div>
    }
}
