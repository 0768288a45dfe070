#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Role, UserProfile};
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn admin_user() -> UserProfile {
        UserProfile {
            id: "u-admin".into(),
            email: "ops@technolease.com".into(),
            role: Role::Admin,
            name: Some("Ops Lead".into()),
        }
    }

    pub fn reseller_user() -> UserProfile {
        UserProfile {
            id: "u-reseller".into(),
            email: "partner@shop.test".into(),
            role: Role::Reseller,
            name: Some("Partner Shop".into()),
        }
    }

    pub fn auth_state(user: Option<UserProfile>, loading: bool) -> AuthState {
        AuthState {
            is_authenticated: user.is_some(),
            user,
            loading,
        }
    }

    pub fn provide_auth(
        user: Option<UserProfile>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(auth_state(user, false));
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
