use web_sys::{Storage, Window};

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

// Host builds (tests, SSR) have no browser globals.
#[cfg(not(target_arch = "wasm32"))]
pub fn window() -> Result<Window, String> {
    Err("No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

pub fn current_path() -> Option<String> {
    window().ok()?.location().pathname().ok()
}

/// Full page navigation; no-op outside the browser.
pub fn redirect_to(path: &str) {
    if let Ok(window) = window() {
        let _ = window.location().set_href(path);
    }
}
