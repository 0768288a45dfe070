use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="p-12 text-center border border-dashed border-zinc-800 rounded-xl">
            <p class="text-zinc-500">{title}</p>
            {description.map(|desc| view! {
                <p class="mt-1 text-sm text-zinc-600">{desc}</p>
            })}
        </div>
    }
}
