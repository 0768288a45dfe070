use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    api::{ApiClient, Role},
    components::guard::RequireRole,
    pages::{
        admin_dashboard::AdminDashboardPage, available_kits::AvailableKitsPage, kits::KitsPage,
        leads::LeadsPage, login::LoginPage, pipeline::PipelinePage, profile::ProfilePage,
        reseller_dashboard::ResellerDashboardPage, resellers::ResellersPage,
    },
    state::auth::AuthProvider,
};

pub const ADMIN_ROUTE_PATHS: &[&str] = &[
    "/admin/dashboard",
    "/admin/kits",
    "/admin/pipeline",
    "/admin/resellers",
    "/admin/profile",
];

pub const RESELLER_ROUTE_PATHS: &[&str] = &[
    "/reseller/dashboard",
    "/reseller/kits",
    "/reseller/crm",
    "/reseller/profile",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/"];

pub fn route_paths() -> Vec<&'static str> {
    PUBLIC_ROUTE_PATHS
        .iter()
        .chain(ADMIN_ROUTE_PATHS)
        .chain(RESELLER_ROUTE_PATHS)
        .copied()
        .collect()
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_meta_context();
    view! {
        <Title text="Technolease Portal"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=LoginPage/>
                    <Route path="/admin/dashboard" view=AdminDashboard/>
                    <Route path="/admin/kits" view=AdminKits/>
                    <Route path="/admin/pipeline" view=AdminPipeline/>
                    <Route path="/admin/resellers" view=AdminResellers/>
                    <Route path="/admin/profile" view=AdminProfile/>
                    <Route path="/admin/*any" view=AdminFallback/>
                    <Route path="/reseller/dashboard" view=ResellerDashboard/>
                    <Route path="/reseller/kits" view=ResellerKits/>
                    <Route path="/reseller/crm" view=ResellerCrm/>
                    <Route path="/reseller/profile" view=ResellerProfile/>
                    <Route path="/reseller/*any" view=ResellerFallback/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn AdminDashboard() -> impl IntoView {
    view! { <RequireRole role=Role::Admin><AdminDashboardPage/></RequireRole> }
}

#[component]
fn AdminKits() -> impl IntoView {
    view! { <RequireRole role=Role::Admin><KitsPage/></RequireRole> }
}

#[component]
fn AdminPipeline() -> impl IntoView {
    view! { <RequireRole role=Role::Admin><PipelinePage/></RequireRole> }
}

#[component]
fn AdminResellers() -> impl IntoView {
    view! { <RequireRole role=Role::Admin><ResellersPage/></RequireRole> }
}

#[component]
fn AdminProfile() -> impl IntoView {
    view! { <RequireRole role=Role::Admin><ProfilePage/></RequireRole> }
}

#[component]
fn AdminFallback() -> impl IntoView {
    view! { <Redirect path=Role::Admin.home_path()/> }
}

#[component]
fn ResellerDashboard() -> impl IntoView {
    view! { <RequireRole role=Role::Reseller><ResellerDashboardPage/></RequireRole> }
}

#[component]
fn ResellerKits() -> impl IntoView {
    view! { <RequireRole role=Role::Reseller><AvailableKitsPage/></RequireRole> }
}

#[component]
fn ResellerCrm() -> impl IntoView {
    view! { <RequireRole role=Role::Reseller><LeadsPage/></RequireRole> }
}

#[component]
fn ResellerProfile() -> impl IntoView {
    view! { <RequireRole role=Role::Reseller><ProfilePage/></RequireRole> }
}

#[component]
fn ResellerFallback() -> impl IntoView {
    view! { <Redirect path=Role::Reseller.home_path()/> }
}
