use crate::api::ApiError;

/// A file picked in the browser, read into memory for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

pub fn content_type_or_default(raw: &str) -> String {
    if raw.trim().is_empty() {
        "application/octet-stream".to_string()
    } else {
        raw.to_string()
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn read_file(file: web_sys::File) -> Result<PickedFile, ApiError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ApiError::unknown(format!("Could not read {}", file.name())))?;
    Ok(PickedFile {
        name: file.name(),
        content_type: content_type_or_default(&file.type_()),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn read_file(file: web_sys::File) -> Result<PickedFile, ApiError> {
    Err(ApiError::unknown(format!(
        "Could not read {}: file access needs a browser",
        file.name()
    )))
}

/// First file of an `<input type="file">` change event.
pub fn first_selected_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;
    ev.target()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?
        .files()?
        .get(0)
}
