use crate::api::ApiError;
use leptos::*;

/// Codes that only restate the HTTP status or are client-side.
fn shows_code(code: &str) -> bool {
    !(code.is_empty()
        || code == "UNKNOWN"
        || code == "VALIDATION_ERROR"
        || code.starts_with("HTTP_"))
}

fn detail_text(error: &ApiError) -> Option<String> {
    match error.details.as_ref()? {
        serde_json::Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        _ => None,
    }
}

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="p-3 bg-red-500/10 border border-red-500/20 rounded-lg text-red-500 text-sm space-y-1">
                <div class="font-medium">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().and_then(|e| detail_text(&e)).map(|text| view! {
                    <div class="text-xs text-red-400">{text}</div>
                })}
                {move || error.get().filter(|e| shows_code(&e.code)).map(|e| view! {
                    <div class="text-xs opacity-75">{"Code: "}{e.code}</div>
                })}
            </div>
        </Show>
    }
}
