use crate::{
    components::{
        common::Button,
        forms::{DatePicker, TextField},
        layout::ErrorMessage,
    },
    pages::leads::{utils::LeadFormState, view_model::LeadsViewModel},
};
use leptos::{ev, *};

type Getter = fn(&LeadFormState) -> String;
type Setter = fn(&mut LeadFormState, String);

fn bind(form: RwSignal<LeadFormState>, get: Getter, set: Setter) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || form.with(get)),
        Callback::new(move |value| form.update(|f| set(f, value))),
    )
}

#[component]
pub fn LeadForm(vm: LeadsViewModel) -> impl IntoView {
    let form = vm.form;
    let (name, on_name) = bind(form, |f| f.name.clone(), |f, v| f.name = v);
    let (email, on_email) = bind(form, |f| f.email.clone(), |f, v| f.email = v);
    let (company, on_company) = bind(form, |f| f.company.clone(), |f, v| f.company = v);
    let (value, on_value) = bind(form, |f| f.value.clone(), |f, v| f.value = v);
    let last_contact = create_rw_signal(form.with_untracked(|f| f.last_contact.clone()));
    create_effect(move |_| {
        let picked = last_contact.get();
        form.update(|f| f.last_contact = picked);
    });

    let pending = vm.create_action.pending();
    let error = Signal::derive(move || vm.form_messages.with(|m| m.error.clone()));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <form class="bg-zinc-900/50 border border-zinc-800 rounded-xl p-6 space-y-4" on:submit=on_submit>
            <Show when=move || error.get().is_some()>
                <ErrorMessage message=error.get().unwrap_or_default() />
            </Show>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <TextField label="Client Name" value=name on_input=on_name required=true />
                <TextField label="Email" value=email on_input=on_email input_type="email" required=true />
                <TextField label="Company" value=company on_input=on_company required=true />
                <TextField label="Value (ZAR)" value=value on_input=on_value input_type="number" placeholder="0" />
                <DatePicker value=last_contact label=Some("Last Contact") />
            </div>
            <div class="flex justify-end">
                <Button loading=pending button_type="submit">"Save Lead"</Button>
            </div>
        </form>
    }
}
