use chrono::NaiveDate;
use leptos::*;
use wasm_bindgen::JsCast;

use crate::utils::files::first_selected_file;

const LABEL_CLASS: &str = "block text-sm font-medium text-zinc-400 mb-1";
const INPUT_CLASS: &str = "w-full bg-zinc-950 border border-zinc-800 rounded-lg px-3 py-2 text-white placeholder-zinc-600 focus:outline-none focus:ring-1 focus:ring-zinc-500 disabled:opacity-50";

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div>
            <label class=LABEL_CLASS>{label}</label>
            <input
                type=input_type.unwrap_or("text")
                class=INPUT_CLASS
                placeholder=placeholder
                required=required
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    view! {
        <div>
            <label class=LABEL_CLASS>{label}</label>
            <textarea
                class=format!("{} resize-none", INPUT_CLASS)
                rows=rows.unwrap_or(3)
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

/// Image picker that reports the chosen file, or `None` when cleared.
#[component]
pub fn FileField(
    #[prop(into)] label: String,
    #[prop(into)] selected_name: Signal<Option<String>>,
    on_change: Callback<Option<web_sys::File>>,
) -> impl IntoView {
    view! {
        <label class="flex flex-col items-center justify-center gap-1 p-4 border border-dashed border-zinc-700 rounded-lg cursor-pointer hover:border-zinc-500 text-center">
            <span class="text-xs font-medium text-zinc-400">{label}</span>
            <span class="text-xs text-zinc-600 truncate max-w-full">
                {move || selected_name.get().unwrap_or_else(|| "Choose image".to_string())}
            </span>
            <input
                type="file"
                accept="image/*"
                class="hidden"
                on:change=move |ev| on_change.call(first_selected_file(&ev))
            />
        </label>
    }
}

pub fn display_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) if raw.is_empty() => "Select date".to_string(),
        Err(_) => raw.to_string(),
    }
}

#[component]
pub fn DatePicker(
    #[prop(into)] value: RwSignal<String>,
    label: Option<&'static str>,
    #[prop(optional)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();

    let on_click = move |_| {
        if disabled.get() {
            return;
        }
        if let Some(input) = input_ref.get() {
            let _ = js_sys::Reflect::get(&input, &"showPicker".into()).map(|f| {
                if f.is_function() {
                    let _ = js_sys::Reflect::apply(
                        &f.unchecked_into::<js_sys::Function>(),
                        &input,
                        &js_sys::Array::new(),
                    );
                }
            });
            let _ = input.focus();
        }
    };

    view! {
        <div>
            {label.map(|l| view! { <label class=LABEL_CLASS>{l}</label> })}
            <div
                class=move || format!(
                    "relative cursor-pointer bg-zinc-950 border border-zinc-800 rounded-lg px-3 py-2 text-sm {}",
                    if disabled.get() { "opacity-50 cursor-not-allowed" } else { "hover:border-zinc-600" }
                )
                on:click=on_click
            >
                <span class=move || if value.get().is_empty() { "text-zinc-600" } else { "text-white" }>
                    {move || display_date(&value.get())}
                </span>
                <input
                    type="date"
                    node_ref=input_ref
                    class="absolute inset-0 w-full h-full opacity-0 pointer-events-none"
                    disabled=disabled
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn text_field_renders_label_and_value() {
        let html = render_to_string(move || {
            view! {
                <TextField
                    label="Kit Name"
                    value=Signal::derive(|| "Executive Suite".to_string())
                    on_input=Callback::new(|_| {})
                    input_type="email"
                    placeholder="e.g. Retail Starter"
                />
            }
        });
        assert!(html.contains("Kit Name"));
        assert!(html.contains("e.g. Retail Starter"));
        assert!(html.contains("type=\"email\""));
    }

    #[test]
    fn file_field_shows_placeholder_until_picked() {
        let html = render_to_string(move || {
            view! {
                <FileField
                    label="Hero Image"
                    selected_name=Signal::derive(|| None)
                    on_change=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Hero Image"));
        assert!(html.contains("Choose image"));
    }

    #[test]
    fn date_picker_renders_formatted_value() {
        let html = render_to_string(move || {
            let value = create_rw_signal("2024-01-15".to_string());
            view! { <DatePicker value=value label=Some("Last Contact") /> }
        });
        assert!(html.contains("Last Contact"));
        assert!(html.contains("15 Jan 2024"));
    }
}
