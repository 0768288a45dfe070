use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-zinc-100 text-zinc-950 hover:bg-white shadow-sm",
            ButtonVariant::Secondary => {
                "bg-zinc-900 text-zinc-100 border border-zinc-700 hover:bg-zinc-800"
            }
            ButtonVariant::Danger => "bg-red-600 text-white hover:bg-red-500",
            ButtonVariant::Ghost => "text-zinc-400 hover:text-zinc-100 hover:bg-zinc-900",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "inline-flex items-center justify-center gap-2 rounded-lg px-4 py-2 text-sm font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class
                )
            }
            type=button_type.unwrap_or("button")
            disabled=move || disabled.get() || loading.get()
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.call(());
                }
            }
        >
            <Show when=move || loading.get()>
                <span class="h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

/// Overlay dialog with a title bar; the body is rendered only while open.
#[component]
pub fn Modal(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    on_close: Callback<()>,
    #[prop(optional, into)] max_width: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let width = max_width.unwrap_or("max-w-2xl");
    let children = store_value(children);
    let subtitle = store_value(subtitle);
    let title = store_value(title);
    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/80 backdrop-blur-sm">
                <div
                    class=format!("bg-zinc-900 border border-zinc-800 rounded-xl w-full {} max-h-[90vh] overflow-y-auto", width)
                    role="dialog"
                    aria-modal="true"
                >
                    <div class="p-6 border-b border-zinc-800 flex justify-between items-center sticky top-0 bg-zinc-900 z-10">
                        <div>
                            <h2 class="text-xl font-bold text-white">{move || title.with_value(|title| title.get())}</h2>
                            {move || subtitle.get_value().map(|text| view! {
                                <p class="text-sm text-zinc-500">{text}</p>
                            })}
                        </div>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-zinc-400 hover:text-white"
                            on:click=move |_| on_close.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    {move || children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}
