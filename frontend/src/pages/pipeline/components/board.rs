use crate::{
    api::ResellerApplication,
    pages::pipeline::utils::{available_actions, column_accent, CardAction, PipelineColumn},
    utils::time::format_timestamp_date,
};
use leptos::*;

fn action_class(action: CardAction) -> &'static str {
    match action {
        CardAction::Approve => "bg-green-900/20 text-green-400 hover:bg-green-900/40",
        CardAction::Reject => "bg-red-900/20 text-red-400 hover:bg-red-900/40",
        _ => "bg-zinc-800 text-zinc-300 hover:bg-zinc-700",
    }
}

#[component]
pub fn ApplicationCard(
    application: ResellerApplication,
    on_action: Callback<(ResellerApplication, CardAction)>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let actions = available_actions(application.status);
    let submitted = format_timestamp_date(application.created_at);
    let phone = application.phone.clone();
    let notes = application.notes.clone();
    let stored = store_value(application.clone());

    view! {
        <div class="bg-zinc-900 border border-zinc-800 rounded-lg p-4 space-y-3">
            <div>
                <h4 class="font-semibold text-white">{application.company_name.clone()}</h4>
                <p class="text-sm text-zinc-400">{application.applicant_name.clone()}</p>
            </div>
            <div class="text-xs text-zinc-500 space-y-1">
                <p>{application.email.clone()}</p>
                {phone.map(|phone| view! { <p>{phone}</p> })}
                <p>{format!("Submitted {}", submitted)}</p>
            </div>
            {notes.map(|notes| view! {
                <p class="text-xs text-zinc-400 italic border-l-2 border-zinc-700 pl-2">{notes}</p>
            })}
            <Show when={
                let has_actions = !actions.is_empty();
                move || has_actions
            }>
                <div class="grid grid-cols-2 gap-2 pt-2 border-t border-zinc-800">
                    {actions
                        .iter()
                        .copied()
                        .map(|action| view! {
                            <button
                                type="button"
                                class=format!("text-xs font-medium py-1.5 rounded disabled:opacity-50 {}", action_class(action))
                                disabled=move || disabled.get()
                                on:click=move |_| on_action.call((stored.get_value(), action))
                            >
                                {action.label()}
                            </button>
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn PipelineBoard(
    #[prop(into)] columns: Signal<Vec<PipelineColumn>>,
    on_action: Callback<(ResellerApplication, CardAction)>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 xl:grid-cols-5 gap-4 overflow-x-auto">
            <For
                each=move || columns.get()
                key=|column| (column.status, column.applications.iter().map(|a| a.id.clone()).collect::<Vec<_>>())
                children=move |column| {
                    let count = column.count();
                    view! {
                        <div class=format!("bg-zinc-950 border border-zinc-800 border-t-4 {} rounded-xl p-3 space-y-3 min-h-[300px]", column_accent(column.status))>
                            <div class="flex justify-between items-center">
                                <h3 class="text-sm font-semibold text-zinc-300">{column.status.column_label()}</h3>
                                <span class="text-xs bg-zinc-800 text-zinc-400 px-2 py-0.5 rounded-full">{count}</span>
                            </div>
                            {column
                                .applications
                                .into_iter()
                                .map(|application| view! {
                                    <ApplicationCard application=application on_action=on_action disabled=disabled />
                                })
                                .collect_view()}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApplicationStatus;
    use crate::pages::pipeline::utils::group_by_status;
    use crate::test_support::ssr::render_to_string;
    use chrono::{TimeZone, Utc};

    fn app(id: &str, company: &str, status: ApplicationStatus) -> ResellerApplication {
        ResellerApplication {
            id: id.into(),
            company_name: company.into(),
            applicant_name: "Jo".into(),
            email: format!("{}@example.test", id),
            phone: Some("021 555 0100".into()),
            notes: None,
            status,
            created_at: Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn board_renders_columns_cards_and_actions() {
        let html = render_to_string(move || {
            let columns = group_by_status(&[
                app("a1", "Cape Devices", ApplicationStatus::New),
                app("a2", "Durban Office", ApplicationStatus::Approved),
            ]);
            view! {
                <PipelineBoard
                    columns=Signal::derive(move || columns.clone())
                    on_action=Callback::new(|_| {})
                    disabled=Signal::derive(|| false)
                />
            }
        });
        assert!(html.contains("New Inquiries"));
        assert!(html.contains("Rejected"));
        assert!(html.contains("Cape Devices"));
        assert!(html.contains("Durban Office"));
        assert!(html.contains("021 555 0100"));
        assert_eq!(html.matches("Approve<").count(), 1);
    }
}
