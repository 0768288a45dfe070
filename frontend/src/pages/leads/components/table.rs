use crate::{
    api::{Lead, LeadStatus},
    pages::leads::utils::status_badge_class,
    utils::{format::format_rand, time::format_date},
};
use leptos::*;

#[component]
pub fn LeadRow(
    lead: Lead,
    on_status: Callback<(String, String)>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let id = lead.id.clone();
    let current = lead.status;
    let last_contact = lead
        .last_contact
        .map(format_date)
        .unwrap_or_else(|| "-".to_string());
    view! {
        <tr class="hover:bg-zinc-900/50 transition-colors">
            <td class="px-6 py-4">
                <p class="font-medium text-white">{lead.name.clone()}</p>
                <p class="text-xs text-zinc-500">{lead.email.clone()}</p>
            </td>
            <td class="px-6 py-4">{lead.company.clone()}</td>
            <td class="px-6 py-4">
                <span class=format!(
                    "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium border {}",
                    status_badge_class(current)
                )>
                    {current.as_str().to_uppercase()}
                </span>
            </td>
            <td class="px-6 py-4 text-white">{format_rand(lead.value)}</td>
            <td class="px-6 py-4">{last_contact}</td>
            <td class="px-6 py-4 text-right">
                <select
                    class="bg-zinc-950 border border-zinc-800 rounded px-2 py-1 text-xs text-zinc-300"
                    aria-label="Change status"
                    disabled=move || disabled.get()
                    on:change=move |ev| on_status.call((id.clone(), event_target_value(&ev)))
                >
                    {LeadStatus::ALL
                        .into_iter()
                        .map(|status| view! {
                            <option value=status.as_str() selected={status == current}>
                                {status.as_str()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </td>
        </tr>
    }
}

#[component]
pub fn LeadTable(
    #[prop(into)] leads: Signal<Vec<Lead>>,
    on_status: Callback<(String, String)>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto rounded-xl border border-zinc-800">
            <table class="w-full text-left text-sm text-zinc-400">
                <thead class="bg-zinc-900 text-zinc-200 uppercase font-medium text-xs tracking-wider">
                    <tr>
                        <th class="px-6 py-4">"Client Name"</th>
                        <th class="px-6 py-4">"Company"</th>
                        <th class="px-6 py-4">"Status"</th>
                        <th class="px-6 py-4">"Value"</th>
                        <th class="px-6 py-4">"Last Contact"</th>
                        <th class="px-6 py-4 text-right">"Actions"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-zinc-800 bg-zinc-950/50">
                    <For
                        each=move || leads.get()
                        key=|lead| (lead.id.clone(), lead.status)
                        children=move |lead| view! {
                            <LeadRow lead=lead on_status=on_status disabled=disabled />
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
