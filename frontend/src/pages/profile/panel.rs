use super::{
    utils::MIN_PASSWORD_LEN,
    view_model::{use_profile_view_model, ProfileViewModel},
};
use crate::{
    components::{
        common::Button,
        layout::{ErrorMessage, Layout, SuccessMessage},
    },
    state::auth::use_auth,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let vm = use_profile_view_model();
    view! {
        <Layout>
            <ProfilePanel vm=vm />
        </Layout>
    }
}

#[component]
pub fn ProfilePanel(vm: ProfileViewModel) -> impl IntoView {
    let (auth, _) = use_auth();
    let identity = move || {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .map(|user| format!("{} · {}", user.email, user.role.as_str()))
                .unwrap_or_default()
        })
    };
    let pending = vm.update_password_action.pending();
    let success = Signal::derive(move || vm.messages.with(|m| m.success.clone()));
    let error = Signal::derive(move || vm.messages.with(|m| m.error.clone()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold tracking-tighter text-white">"Your Profile"</h1>
            <div class="bg-zinc-900/50 border border-zinc-800 rounded-xl p-6 max-w-2xl">
                <div class="mb-8">
                    <h2 class="text-xl font-semibold text-white">"Account Settings"</h2>
                    <p class="text-zinc-500 text-sm">{identity}</p>
                </div>
                <form class="space-y-4" on:submit=on_submit>
                    <h3 class="text-lg font-medium text-white">"Change Password"</h3>
                    <div>
                        <label class="block text-sm font-medium text-zinc-400 mb-2">"New Password"</label>
                        <input
                            type="password"
                            placeholder="Enter new password"
                            required
                            minlength=MIN_PASSWORD_LEN.to_string()
                            class="w-full bg-zinc-950/50 border border-zinc-800 rounded-lg px-4 py-3 text-white focus:outline-none focus:ring-1 focus:ring-zinc-500 placeholder-zinc-700"
                            prop:value=move || vm.new_password.get()
                            on:input=move |ev| vm.new_password.set(event_target_value(&ev))
                        />
                    </div>
                    <Show when=move || success.get().is_some()>
                        <SuccessMessage message=success.get().unwrap_or_default() />
                    </Show>
                    <Show when=move || error.get().is_some()>
                        <ErrorMessage message=error.get().unwrap_or_default() />
                    </Show>
                    <Button loading=pending button_type="submit">"Update Password"</Button>
                </form>
            </div>
        </div>
    }
}
