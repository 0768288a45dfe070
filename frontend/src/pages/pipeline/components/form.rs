use crate::{
    components::{
        common::{Button, ButtonVariant},
        forms::{TextAreaField, TextField},
        layout::ErrorMessage,
    },
    pages::pipeline::{utils::ApplicationFormState, view_model::PipelineViewModel},
};
use leptos::{ev, *};

type Getter = fn(&ApplicationFormState) -> String;
type Setter = fn(&mut ApplicationFormState, String);

fn bind(
    form: RwSignal<ApplicationFormState>,
    get: Getter,
    set: Setter,
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || form.with(get)),
        Callback::new(move |value| form.update(|f| set(f, value))),
    )
}

#[component]
pub fn ApplicationForm(vm: PipelineViewModel) -> impl IntoView {
    let form = vm.form;
    let (company, on_company) = bind(form, |f| f.company_name.clone(), |f, v| f.company_name = v);
    let (applicant, on_applicant) =
        bind(form, |f| f.applicant_name.clone(), |f, v| f.applicant_name = v);
    let (email, on_email) = bind(form, |f| f.email.clone(), |f, v| f.email = v);
    let (phone, on_phone) = bind(form, |f| f.phone.clone(), |f, v| f.phone = v);
    let (notes, on_notes) = bind(form, |f| f.notes.clone(), |f, v| f.notes = v);

    let pending = vm.create_action.pending();
    let error = Signal::derive(move || vm.form_messages.with(|m| m.error.clone()));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <form class="p-6 space-y-4" on:submit=on_submit>
            <Show when=move || error.get().is_some()>
                <ErrorMessage message=error.get().unwrap_or_default() />
            </Show>
            <TextField label="Company Name" value=company on_input=on_company required=true />
            <TextField label="Applicant Name" value=applicant on_input=on_applicant required=true />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <TextField label="Email" value=email on_input=on_email input_type="email" required=true />
                <TextField label="Phone" value=phone on_input=on_phone input_type="tel" />
            </div>
            <TextAreaField label="Initial Notes" value=notes on_input=on_notes />
            <div class="flex justify-end gap-3 pt-4 border-t border-zinc-800">
                <Button variant=ButtonVariant::Ghost on_click=Callback::new(move |_| vm.close_modal())>
                    "Cancel"
                </Button>
                <Button loading=pending button_type="submit">"Create Application"</Button>
            </div>
        </form>
    }
}
