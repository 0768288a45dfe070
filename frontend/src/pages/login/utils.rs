use crate::{api::LoginRequest, utils::format::looks_like_email};

pub fn validate_credentials(email: &str, password: &str) -> Result<LoginRequest, String> {
    if email.trim().is_empty() {
        return Err("Please enter your email address".into());
    }
    if !looks_like_email(email) {
        return Err("Please enter a valid email address".into());
    }
    if password.is_empty() {
        return Err("Please enter your password".into());
    }
    Ok(LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    })
}
