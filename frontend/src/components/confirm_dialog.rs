use leptos::ev::KeyboardEvent;
use leptos::*;

fn label_or(text: String, fallback: &str) -> String {
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] cancel_label: MaybeSignal<String>,
    #[prop(optional, into)] confirm_disabled: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    let confirm_button_class = if destructive {
        "inline-flex items-center justify-center rounded-lg px-4 py-2 text-sm font-semibold bg-red-600 text-white hover:bg-red-500 disabled:opacity-50"
    } else {
        "inline-flex items-center justify-center rounded-lg px-4 py-2 text-sm font-semibold bg-green-600 text-white hover:bg-green-500 disabled:opacity-50"
    };

    let confirm_label_text = Signal::derive(move || label_or(confirm_label.get(), "Confirm"));
    let cancel_label_text = Signal::derive(move || label_or(cancel_label.get(), "Cancel"));
    let title_text = Signal::derive(move || title.get());
    let message_text = Signal::derive(move || message.get());
    let summary = store_value(children);

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-black/80 backdrop-blur-sm"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-xl bg-zinc-900 border border-zinc-800 p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <div>
                        <h3 class="text-xl font-bold text-white">{move || title_text.get()}</h3>
                        <p class="text-zinc-400 text-sm mt-1">{move || message_text.get()}</p>
                    </div>
                    {move || summary.with_value(|children| children.as_ref().map(|c| c()))}
                    <div class="flex justify-end gap-3">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-lg px-4 py-2 text-sm font-semibold bg-zinc-900 text-zinc-100 border border-zinc-700 hover:bg-zinc-800"
                            on:click=move |_| on_cancel.call(())
                        >
                            {move || cancel_label_text.get()}
                        </button>
                        <button
                            type="button"
                            class=confirm_button_class
                            disabled=move || confirm_disabled.get()
                            on:click=move |_| on_confirm.call(())
                        >
                            {move || confirm_label_text.get()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
