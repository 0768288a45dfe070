use crate::{
    api::{ApiClient, ApiError, LoginRequest, Session, UserProfile},
    pages::login::repository::LoginRepository,
};
use leptos::*;
use std::rc::Rc;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    fn signed_in(session: &Session) -> Self {
        Self {
            user: Some(session.user.clone()),
            is_authenticated: true,
            loading: false,
        }
    }

    fn signed_out() -> Self {
        Self::default()
    }
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState {
        loading: true,
        ..AuthState::default()
    });

    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(Rc::new(api_client));
    spawn_local(async move {
        match repo.restore().await {
            Some(session) => set_auth_state.set(AuthState::signed_in(&session)),
            None => set_auth_state.set(AuthState::signed_out()),
        }
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<Session, ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(request).await {
        Ok(session) => {
            set_auth_state.set(AuthState::signed_in(&session));
            Ok(session)
        }
        Err(error) => {
            log::error!("login failed: {}", error);
            set_auth_state.set(AuthState::signed_out());
            Err(error)
        }
    }
}

pub async fn logout(
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let result = repo.logout().await;
    set_auth_state.set(AuthState::signed_out());
    result
}

pub fn use_login_action() -> Action<LoginRequest, Result<Session, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(Rc::new(api));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(Rc::new(api));

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move { logout(&repo, set_auth).await }
    })
}
