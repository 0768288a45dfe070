use crate::{
    api::Role,
    components::layout::LoadingSpinner,
    state::auth::{use_auth, AuthState},
    utils::storage::redirect_to,
};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Pending,
    Redirect(&'static str),
    Render,
}

/// Decides what a portal route shows for the current auth state.
pub fn resolve_access(state: &AuthState, allowed: Role) -> Access {
    if state.loading {
        return Access::Pending;
    }
    match state.user.as_ref() {
        Some(user) if state.is_authenticated => {
            if user.role == allowed {
                Access::Render
            } else {
                Access::Redirect(user.role.home_path())
            }
        }
        _ => Access::Redirect("/"),
    }
}

#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let access = create_memo(move |_| resolve_access(&auth.get(), role));
    create_effect(move |_| {
        if let Access::Redirect(target) = access.get() {
            log::info!("redirecting to {} ({} portal required)", target, role.as_str());
            redirect_to(target);
        }
    });
    view! {
        <Show
            when=move || access.get() == Access::Render
            fallback=move || {
                if access.get() == Access::Pending {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Login page wrapper: a signed-in user goes straight to their portal.
#[component]
pub fn RedirectIfAuthenticated(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let home = create_memo(move |_| {
        let state = auth.get();
        if state.loading || !state.is_authenticated {
            None
        } else {
            state.user.as_ref().map(|user| user.role.home_path())
        }
    });
    create_effect(move |_| {
        if let Some(target) = home.get() {
            redirect_to(target);
        }
    });
    view! {
        <Show when=move || home.get().is_none()>
            {children()}
        </Show>
    }
}
