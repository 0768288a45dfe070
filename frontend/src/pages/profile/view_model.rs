use super::{
    repository,
    utils::{validate_new_password, SUCCESS_BANNER_MILLIS},
};
use crate::{
    api::{ApiClient, ApiError},
    state::message::MessageState,
    utils::timers::run_after,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ProfileViewModel {
    pub new_password: RwSignal<String>,
    pub messages: RwSignal<MessageState>,
    pub update_password_action: Action<String, Result<(), ApiError>>,
}

impl ProfileViewModel {
    pub fn submit(&self) {
        if self.update_password_action.pending().get_untracked() {
            return;
        }
        let password = self.new_password.get_untracked();
        match validate_new_password(&password) {
            Ok(()) => {
                self.messages.update(MessageState::clear);
                self.update_password_action.dispatch(password);
            }
            Err(msg) => self.messages.update(|m| m.set_error(msg)),
        }
    }
}

pub fn use_profile_view_model() -> ProfileViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let update_password_action = create_action(move |password: &String| {
        let api = api.clone();
        let password = password.clone();
        async move { repository::update_password(api, password).await }
    });

    let new_password = create_rw_signal(String::new());
    let messages = create_rw_signal(MessageState::default());

    create_effect(move |_| {
        if let Some(result) = update_password_action.value().get() {
            match result {
                Ok(()) => {
                    messages.update(|m| m.set_success("Password updated successfully"));
                    new_password.set(String::new());
                    run_after(SUCCESS_BANNER_MILLIS, move || {
                        messages.update(|m| m.success = None);
                    });
                }
                Err(err) => {
                    log::error!("error updating password: {}", err);
                    let text = if err.error.trim().is_empty() {
                        "Failed to update password".to_string()
                    } else {
                        err.error
                    };
                    messages.update(|m| m.set_error(text));
                }
            }
        }
    });

    ProfileViewModel {
        new_password,
        messages,
        update_password_action,
    }
}
