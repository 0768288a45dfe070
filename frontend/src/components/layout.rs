use crate::{
    api::Role,
    state::auth::{self, use_auth},
    utils::storage::{current_path, redirect_to},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

const ADMIN_LINKS: &[NavLink] = &[
    NavLink { label: "Dashboard", path: "/admin/dashboard" },
    NavLink { label: "Inventory Kits", path: "/admin/kits" },
    NavLink { label: "Pipeline", path: "/admin/pipeline" },
    NavLink { label: "Resellers", path: "/admin/resellers" },
    NavLink { label: "Profile", path: "/admin/profile" },
];

const RESELLER_LINKS: &[NavLink] = &[
    NavLink { label: "Dashboard", path: "/reseller/dashboard" },
    NavLink { label: "Available Kits", path: "/reseller/kits" },
    NavLink { label: "Lead CRM", path: "/reseller/crm" },
    NavLink { label: "Profile", path: "/reseller/profile" },
];

pub fn nav_links(role: Role) -> &'static [NavLink] {
    match role {
        Role::Admin => ADMIN_LINKS,
        Role::Reseller => RESELLER_LINKS,
    }
}

fn link_class(path: &str, current: Option<&str>) -> &'static str {
    if current == Some(path) {
        "w-full flex items-center gap-3 px-4 py-3 rounded-lg text-sm font-medium bg-zinc-100 text-zinc-950"
    } else {
        "w-full flex items-center gap-3 px-4 py-3 rounded-lg text-sm font-medium text-zinc-400 hover:text-zinc-100 hover:bg-zinc-900"
    }
}

#[component]
pub fn Sidebar(open: RwSignal<bool>) -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let links = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| nav_links(user.role))
            .unwrap_or_default()
    };
    let current = current_path();

    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if let Some(result) = logout_action.value().get() {
            if let Err(err) = result {
                log::warn!("sign-out finished with error: {}", err);
            }
            redirect_to("/");
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        open.set(false);
        logout_action.dispatch(());
    };

    view! {
        <aside id="portal-nav" class=move || {
            format!(
                "fixed lg:static top-0 left-0 h-full w-64 bg-zinc-950 border-r border-zinc-800 transform transition-transform duration-300 z-40 {}",
                if open.get() { "translate-x-0" } else { "-translate-x-full lg:translate-x-0" }
            )
        }>
            <div class="p-8 hidden lg:block">
                <h1 class="text-2xl font-bold tracking-tighter text-white">"TECHNOLEASE"</h1>
                <p class="text-xs text-zinc-500 tracking-widest mt-1 uppercase">"Premium Solutions"</p>
            </div>
            <div class="lg:hidden h-20"></div>
            <nav class="px-4 py-4 space-y-2">
                {move || {
                    let current = current.clone();
                    links()
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.path
                                    class=link_class(link.path, current.as_deref())
                                    on:click=move |_| open.set(false)
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </nav>
            <div class="absolute bottom-8 left-0 w-full px-4">
                <button
                    on:click=on_logout
                    class="w-full flex items-center gap-3 px-4 py-3 rounded-lg text-sm font-medium text-red-400 hover:bg-red-950/30 disabled:opacity-50"
                    disabled=move || logout_pending.get()
                >
                    "Sign Out"
                </button>
            </div>
        </aside>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let sidebar_open = create_rw_signal(false);
    view! {
        <div class="min-h-screen bg-zinc-950 text-zinc-100 flex overflow-hidden">
            <div class="lg:hidden fixed top-0 w-full z-50 bg-zinc-950/80 backdrop-blur border-b border-zinc-800 p-4 flex justify-between items-center">
                <span class="text-xl font-bold tracking-tighter">"TECHNOLEASE"</span>
                <button
                    type="button"
                    aria-controls="portal-nav"
                    aria-expanded=move || sidebar_open.get()
                    on:click=move |_| sidebar_open.update(|open| *open = !*open)
                >
                    <span class="sr-only">
                        {move || if sidebar_open.get() { "Close menu" } else { "Open menu" }}
                    </span>
                    {move || if sidebar_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Sidebar open=sidebar_open />
            <main class="flex-1 overflow-y-auto pt-20 lg:pt-0 p-4 lg:p-8 bg-black/40">
                <div class="max-w-7xl mx-auto">
                    {children()}
                </div>
            </main>
        </div>
    }
}

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="flex justify-between items-end gap-4">
            <div>
                <h2 class="text-3xl font-bold tracking-tight text-white">{title}</h2>
                <p class="text-zinc-400">{subtitle}</p>
            </div>
            {children.map(|children| children())}
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-zinc-100"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="p-3 bg-red-500/10 border border-red-500/20 rounded-lg text-red-500 text-sm">
            {message}
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-green-900/20 border border-green-800 text-green-400 p-4 rounded-lg text-sm">
            {message}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_and_reseller_links_stay_inside_their_portal() {
        assert!(nav_links(Role::Admin)
            .iter()
            .all(|link| link.path.starts_with("/admin/")));
        assert!(nav_links(Role::Reseller)
            .iter()
            .all(|link| link.path.starts_with("/reseller/")));
        assert_eq!(nav_links(Role::Admin)[0].path, Role::Admin.home_path());
        assert_eq!(nav_links(Role::Reseller)[0].path, Role::Reseller.home_path());
    }

    #[test]
    fn active_link_is_highlighted() {
        assert!(link_class("/admin/kits", Some("/admin/kits")).contains("bg-zinc-100"));
        assert!(!link_class("/admin/kits", Some("/admin/pipeline")).contains("bg-zinc-100"));
        assert!(!link_class("/admin/kits", None).contains("bg-zinc-100"));
    }
}
