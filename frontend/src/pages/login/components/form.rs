use crate::{api::ApiError, components::error::InlineErrorMessage};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    email: RwSignal<String>,
    password: RwSignal<String>,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <div class="bg-zinc-900/50 backdrop-blur-xl border border-zinc-800 p-8 rounded-2xl shadow-2xl">
            <form class="space-y-6" on:submit=handle_submit>
                <InlineErrorMessage error=error />
                <div>
                    <label for="email" class="block text-sm font-medium text-zinc-400 mb-2">"Email Address"</label>
                    <input
                        id="email"
                        type="email"
                        autocomplete="username"
                        placeholder="enter@technolease.com"
                        class="w-full bg-zinc-950/50 border border-zinc-800 rounded-lg px-4 py-3 text-white focus:outline-none focus:border-zinc-500"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label for="password" class="block text-sm font-medium text-zinc-400 mb-2">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        autocomplete="current-password"
                        placeholder="••••••••"
                        class="w-full bg-zinc-950/50 border border-zinc-800 rounded-lg px-4 py-3 text-white focus:outline-none focus:border-zinc-500"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="w-full inline-flex items-center justify-center gap-2 rounded-lg px-4 py-3 text-sm font-semibold bg-zinc-100 text-zinc-950 hover:bg-white disabled:opacity-50"
                >
                    {move || if pending.get() { "Signing in..." } else { "Access Portal" }}
                </button>
            </form>
            <div class="mt-6 text-center text-zinc-600 text-sm">"256-bit Secure Connection"</div>
        </div>
    }
}
