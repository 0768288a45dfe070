use crate::{
    components::{
        common::{Button, ButtonVariant},
        forms::{FileField, TextAreaField, TextField},
        layout::ErrorMessage,
    },
    pages::kits::{
        utils::{ImageSlot, KitFormState},
        view_model::KitsViewModel,
    },
};
use leptos::{ev, *};

type Getter = fn(&KitFormState) -> String;
type Setter = fn(&mut KitFormState, String);

fn bind(form: RwSignal<KitFormState>, get: Getter, set: Setter) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || form.with(get)),
        Callback::new(move |value| form.update(|f| set(f, value))),
    )
}

#[component]
pub fn KitForm(vm: KitsViewModel) -> impl IntoView {
    let form = vm.form;
    let (name, on_name) = bind(form, |f| f.name.clone(), |f, v| f.name = v);
    let (deal_code, on_deal_code) = bind(form, |f| f.deal_code.clone(), |f, v| f.deal_code = v);
    let (price, on_price) = bind(form, |f| f.rental_price.clone(), |f, v| f.rental_price = v);
    let (term, on_term) = bind(form, |f| f.rental_term.clone(), |f, v| f.rental_term = v);
    let (description, on_description) =
        bind(form, |f| f.description.clone(), |f, v| f.description = v);
    let (marketing, on_marketing) = bind(
        form,
        |f| f.marketing_description.clone(),
        |f, v| f.marketing_description = v,
    );

    let pending = vm.create_action.pending();
    let error = Signal::derive(move || vm.form_messages.with(|m| m.error.clone()));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <form class="p-6 space-y-6" on:submit=on_submit>
            <Show when=move || error.get().is_some()>
                <ErrorMessage message=error.get().unwrap_or_default() />
            </Show>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <TextField label="Kit Name" value=name on_input=on_name placeholder="e.g. Executive Suite" required=true />
                <TextField label="Deal Code" value=deal_code on_input=on_deal_code placeholder="e.g. DEAL-2024-001" required=true />
                <TextField label="Rental Price (ZAR)" value=price on_input=on_price input_type="number" placeholder="0.00" required=true />
                <TextField label="Rental Term" value=term on_input=on_term placeholder="e.g. 24 Months" required=true />
            </div>
            <TextAreaField label="Short Description" value=description on_input=on_description rows=2 />
            <TextAreaField label="Marketing Description" value=marketing on_input=on_marketing rows=4 />
            <div>
                <p class="block text-sm font-medium text-zinc-400 mb-2">"Kit Images"</p>
                <div class="grid grid-cols-3 gap-4">
                    {ImageSlot::ALL
                        .into_iter()
                        .map(|slot| view! {
                            <FileField
                                label=slot.label()
                                selected_name=Signal::derive(move || vm.image_name(slot))
                                on_change=Callback::new(move |file| vm.set_image(slot, file))
                            />
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="flex justify-end gap-3 pt-4 border-t border-zinc-800">
                <Button
                    variant=ButtonVariant::Ghost
                    on_click=Callback::new(move |_| vm.close_modal())
                >
                    "Cancel"
                </Button>
                <Button loading=pending button_type="submit">
                    {move || if pending.get() { "Creating..." } else { "Create Kit" }}
                </Button>
            </div>
        </form>
    }
}
