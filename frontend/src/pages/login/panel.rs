use super::{components::form::LoginForm, view_model::use_login_view_model};
use crate::components::guard::RedirectIfAuthenticated;
use leptos::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();

    view! {
        <RedirectIfAuthenticated>
            <div class="min-h-screen bg-zinc-950 flex items-center justify-center p-4">
                <div class="w-full max-w-md">
                    <div class="mb-10 text-center">
                        <h1 class="text-4xl font-bold tracking-tighter text-white mb-2">"TECHNOLEASE"</h1>
                        <p class="text-zinc-500 uppercase tracking-widest text-xs">"Premium Access Portal"</p>
                    </div>
                    <LoginForm
                        email=vm.email
                        password=vm.password
                        error=vm.error.into()
                        pending=pending.into()
                        on_submit=Callback::new(move |_| vm.submit())
                    />
                </div>
            </div>
        </RedirectIfAuthenticated>
    }
}
