use crate::{
    api::Kit,
    pages::kits::utils::status_badge_class,
    utils::format::format_optional_rand,
};
use leptos::*;

#[component]
pub fn KitCard(kit: Kit, on_delete: Callback<Kit>) -> impl IntoView {
    let image = kit.hero_image().map(str::to_string);
    let deal_code = kit.deal_code.clone().unwrap_or_else(|| "NO-CODE".to_string());
    let price = format_optional_rand(kit.rental_price);
    let description = kit.description.clone().unwrap_or_default();
    let badge = format!(
        "text-xs px-2 py-1 rounded border uppercase {}",
        status_badge_class(kit.status)
    );
    let status = kit.status.as_str();
    let name = kit.name.clone();

    view! {
        <div class="bg-zinc-900/50 border border-zinc-800 rounded-xl overflow-hidden flex flex-col">
            <div class="h-48 bg-zinc-900 flex items-center justify-center">
                {match image {
                    Some(url) => view! { <img src=url alt=name.clone() class="w-full h-full object-cover" /> }.into_view(),
                    None => view! { <span class="text-zinc-700 text-sm">"No image"</span> }.into_view(),
                }}
            </div>
            <div class="p-6 flex-1 flex flex-col gap-3">
                <div class="flex justify-between items-start gap-2">
                    <div>
                        <h3 class="text-lg font-semibold text-white">{name}</h3>
                        <p class="text-xs font-mono text-zinc-500">{deal_code}</p>
                    </div>
                    <span class=badge>{status}</span>
                </div>
                <p class="text-sm text-zinc-400 line-clamp-2">{description}</p>
                <div class="mt-auto flex justify-between items-center pt-4 border-t border-zinc-800">
                    <div>
                        <span class="text-xl font-bold text-white">{price}</span>
                        <span class="text-xs text-zinc-500">" / month"</span>
                    </div>
                    <button
                        type="button"
                        class="text-sm text-red-500 hover:text-red-400"
                        on:click=move |_| on_delete.call(kit.clone())
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn KitGrid(#[prop(into)] kits: Signal<Vec<Kit>>, on_delete: Callback<Kit>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            <For
                each=move || kits.get()
                key=|kit| kit.id.clone()
                children=move |kit| view! { <KitCard kit=kit on_delete=on_delete /> }
            />
        </div>
    }
}
