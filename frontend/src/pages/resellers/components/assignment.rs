use crate::{
    api::Kit,
    pages::resellers::utils::tile_class,
};
use leptos::*;
use std::collections::HashSet;

#[component]
pub fn KitAssignmentGrid(
    #[prop(into)] kits: Signal<Vec<Kit>>,
    #[prop(into)] assigned: Signal<HashSet<String>>,
    on_toggle: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
            <For
                each=move || kits.get()
                key=|kit| kit.id.clone()
                children=move |kit| {
                    let id = kit.id.clone();
                    let is_assigned = {
                        let id = id.clone();
                        move || assigned.with(|set| set.contains(&id))
                    };
                    let image = kit.hero_image().map(str::to_string);
                    let deal_code = kit.deal_code.clone().unwrap_or_default();
                    let indicator = is_assigned.clone();
                    view! {
                        <button
                            type="button"
                            class=move || format!(
                                "text-left border rounded-lg p-4 transition-all disabled:opacity-60 {}",
                                tile_class(is_assigned())
                            )
                            disabled=move || disabled.get()
                            on:click=move |_| on_toggle.call(id.clone())
                        >
                            {image.map(|url| view! {
                                <div class="h-32 w-full rounded mb-3 overflow-hidden bg-zinc-900">
                                    <img src=url class="w-full h-full object-cover opacity-80" />
                                </div>
                            })}
                            <h4 class="text-white font-medium mb-1">{kit.name.clone()}</h4>
                            <div class="flex justify-between items-center mt-2">
                                <span class="text-xs text-zinc-500">{deal_code}</span>
                                {move || if indicator() {
                                    view! { <span class="text-blue-400 text-xs font-bold">"Assigned"</span> }.into_view()
                                } else {
                                    view! { <span class="text-zinc-500 text-sm">"+"</span> }.into_view()
                                }}
                            </div>
                        </button>
                    }
                }
            />
        </div>
    }
}
