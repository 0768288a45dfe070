use leptos::*;

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!("bg-zinc-900/50 border border-zinc-800 rounded-xl p-6 {}", class)>
            {children()}
        </div>
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <Card>
            <p class="text-zinc-400 text-sm font-medium">{label}</p>
            <p class="text-3xl font-bold text-white mt-2">{move || value.get()}</p>
            {hint.map(|hint| view! { <div class="text-zinc-500 text-xs mt-2">{hint}</div> })}
        </Card>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn stat_card_renders_label_value_and_hint() {
        let html = render_to_string(move || {
            view! {
                <StatCard
                    label="Total Inventory"
                    value=Signal::derive(|| "12".to_string())
                    hint="Kits in catalogue"
                />
            }
        });
        assert!(html.contains("Total Inventory"));
        assert!(html.contains("12"));
        assert!(html.contains("Kits in catalogue"));
    }
}
