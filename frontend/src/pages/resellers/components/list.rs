use crate::{
    api::UserProfile,
    components::{
        cards::Card,
        common::{Button, ButtonVariant},
    },
};
use leptos::*;

#[component]
pub fn ResellerCard(reseller: UserProfile, on_manage: Callback<UserProfile>) -> impl IntoView {
    let name = reseller.display_name();
    let email = reseller.email.clone();
    let initial = name.chars().next().unwrap_or('?').to_ascii_uppercase();
    view! {
        <Card class="hover:border-zinc-700 transition-colors">
            <div class="flex items-center gap-3 mb-4">
                <div class="w-10 h-10 rounded-full bg-zinc-800 flex items-center justify-center text-zinc-400 font-semibold">
                    {initial.to_string()}
                </div>
                <div>
                    <h3 class="text-lg font-semibold text-white">{name}</h3>
                    <p class="text-xs text-zinc-500">{email}</p>
                </div>
            </div>
            <Button
                class="w-full"
                variant=ButtonVariant::Secondary
                on_click=Callback::new(move |_| on_manage.call(reseller.clone()))
            >
                "Manage Inventory"
            </Button>
        </Card>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::reseller_user;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn card_falls_back_to_unnamed_reseller() {
        let html = render_to_string(move || {
            let reseller = UserProfile {
                name: None,
                ..reseller_user()
            };
            view! { <ResellerCard reseller=reseller on_manage=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Unnamed Reseller"));
        assert!(html.contains("partner@shop.test"));
        assert!(html.contains("Manage Inventory"));
    }
}
