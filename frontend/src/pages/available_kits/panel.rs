use super::view_model::use_available_kits_view_model;
use crate::{
    api::Kit,
    components::{
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, PageHeader},
    },
    utils::format::format_optional_rand,
};
use leptos::*;

/// Monthly price badge text; kits without a price show only the placeholder.
pub fn monthly_price_label(price: Option<f64>) -> String {
    match price {
        Some(_) => format!("{}/mo", format_optional_rand(price)),
        None => format_optional_rand(None),
    }
}

#[component]
pub fn AvailableKitCard(kit: Kit) -> impl IntoView {
    let price = monthly_price_label(kit.rental_price);
    let image = kit.hero_image().map(str::to_string);
    let term = kit.rental_term.clone();
    let description = kit
        .marketing_description
        .clone()
        .or_else(|| kit.description.clone())
        .unwrap_or_default();
    let name = kit.name.clone();

    view! {
        <div class="bg-zinc-900/50 border border-zinc-800 rounded-xl p-6 flex flex-col h-full hover:border-zinc-700 transition-colors">
            <div class="h-48 rounded-lg overflow-hidden bg-zinc-800 mb-6 relative">
                {match image {
                    Some(url) => view! { <img src=url alt=name.clone() class="w-full h-full object-cover opacity-90" /> }.into_view(),
                    None => view! {
                        <div class="w-full h-full flex items-center justify-center text-zinc-600 text-sm">"No image"</div>
                    }.into_view(),
                }}
                <div class="absolute top-2 right-2 bg-black/70 text-white text-xs px-2 py-1 rounded border border-white/10">
                    {price}
                </div>
            </div>
            <h3 class="text-xl font-bold text-white mb-2">{name}</h3>
            {term.map(|term| view! { <p class="text-xs text-zinc-500 mb-2">{term}</p> })}
            <p class="text-zinc-400 text-sm flex-1 line-clamp-3">{description}</p>
        </div>
    }
}

#[component]
pub fn AvailableKitsPage() -> impl IntoView {
    let vm = use_available_kits_view_model();
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

    view! {
        <Layout>
            <div class="space-y-8">
                <PageHeader
                    title="Available Kits"
                    subtitle="Select premium hardware for your clients."
                />
                <Show when=move || fetch_error.get().is_some()>
                    <ErrorMessage message=fetch_error.get().unwrap_or_default() />
                </Show>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="text-zinc-500">"Loading kits..."</div> }
                >
                    <Show
                        when=move || !kits.get().is_empty()
                        fallback=|| view! { <EmptyState title="No available kits at the moment." /> }
                    >
                        <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6">
                            <For
                                each=move || kits.get()
                                key=|kit| kit.id.clone()
                                children=|kit| view! { <AvailableKitCard kit=kit /> }
                            />
                        </div>
                    </Show>
                </Show>
            </div>
        </Layout>
    }
}
