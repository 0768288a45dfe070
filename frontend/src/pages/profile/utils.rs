pub const MIN_PASSWORD_LEN: usize = 6;
pub const SUCCESS_BANNER_MILLIS: u32 = 4_000;

pub fn validate_new_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_needs_six_characters() {
        assert!(validate_new_password("12345").is_err());
        assert!(validate_new_password("123456").is_ok());
        assert!(validate_new_password("").is_err());
    }
}
