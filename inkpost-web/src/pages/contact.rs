use crate::components::field_input::FieldInput;
use crate::components::field_textarea::FieldTextarea;
use inkpost_form::{CounterView, FieldId, MESSAGE_MAX_CHARS};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ContactPageProps {
    pub name_value: AttrValue,
    pub email_value: AttrValue,
    pub message_value: AttrValue,
    pub name_invalid: bool,
    pub email_invalid: bool,
    pub message_invalid: bool,
    /// Rejected-keystroke flash on the name field.
    pub flash: bool,
    pub counter: CounterView,
    /// First invalid field's message, empty when the form is clean.
    pub status: AttrValue,
    /// Confirmation line after an accepted submission.
    pub info: AttrValue,
    /// Serialized session diagnostics for the hidden field.
    pub diagnostics: AttrValue,
    pub on_input: Callback<(FieldId, String)>,
    pub on_blur: Callback<FieldId>,
    pub on_submit: Callback<()>,
}

fn input_for(field: FieldId, cb: &Callback<(FieldId, String)>) -> Callback<String> {
    let cb = cb.clone();
    Callback::from(move |value: String| cb.emit((field, value)))
}

fn blur_for(field: FieldId, cb: &Callback<FieldId>) -> Callback<()> {
    let cb = cb.clone();
    Callback::from(move |()| cb.emit(field))
}

#[function_component(ContactPage)]
pub fn contact_page(p: &ContactPageProps) -> Html {
    let onsubmit = {
        let cb = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            // Gating happens in the engine; the browser never submits.
            e.prevent_default();
            cb.emit(());
        })
    };

    html! {
        <section class="panel contact-panel">
            <h1>{ "Contact us" }</h1>
            <form id="contact-form" novalidate=true {onsubmit}>
                <FieldInput
                    id="name"
                    label="Name"
                    value={p.name_value.clone()}
                    invalid={p.name_invalid}
                    flash={p.flash}
                    oninput={input_for(FieldId::Name, &p.on_input)}
                    onblur={blur_for(FieldId::Name, &p.on_blur)}
                />
                <FieldInput
                    id="email"
                    label="Email"
                    input_type={Some(AttrValue::from("email"))}
                    value={p.email_value.clone()}
                    invalid={p.email_invalid}
                    oninput={input_for(FieldId::Email, &p.on_input)}
                    onblur={blur_for(FieldId::Email, &p.on_blur)}
                />
                <FieldTextarea
                    id="message"
                    label="Message"
                    value={p.message_value.clone()}
                    max_length={MESSAGE_MAX_CHARS}
                    counter={p.counter.clone()}
                    invalid={p.message_invalid}
                    oninput={input_for(FieldId::Message, &p.on_input)}
                    onblur={blur_for(FieldId::Message, &p.on_blur)}
                />
                <p id="error-output" role="alert" aria-live="assertive">{ p.status.clone() }</p>
                <p id="info-output" role="status">{ p.info.clone() }</p>
                <input
                    type="hidden"
                    id="form-errors-field"
                    name="form-errors"
                    value={p.diagnostics.clone()}
                />
                <button type="submit">{ "Send message" }</button>
            </form>
        </section>
    }
}
