use inkpost_form::CounterView;
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub max_length: usize,
    /// Inline remaining-character countdown next to the label.
    pub counter: CounterView,
    #[prop_or_default]
    pub invalid: bool,
    #[prop_or_default]
    pub rows: Option<u32>,
    #[prop_or_default]
    pub oninput: Callback<String>,
    #[prop_or_default]
    pub onblur: Callback<()>,
}

/// Labelled multi-line field with a live character countdown.
#[function_component(FieldTextarea)]
pub fn field_textarea(p: &Props) -> Html {
    let oninput = {
        let cb = p.oninput.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                cb.emit(input.value());
            }
        })
    };
    let onblur = {
        let cb = p.onblur.clone();
        Callback::from(move |_e: FocusEvent| cb.emit(()))
    };
    let counter_class = classes!("char-count", p.counter.warning.then_some("char-count-warn"));
    html! {
        <div class="field">
            <label for={p.id.clone()}>
                { p.label.clone() }
                { " " }
                <span id="char-count" class={counter_class}>{ p.counter.label.clone() }</span>
            </label>
            <textarea
                id={p.id.clone()}
                name={p.id.clone()}
                class="field-textarea"
                rows={p.rows.unwrap_or(6).to_string()}
                maxlength={p.max_length.to_string()}
                value={p.value.clone()}
                aria-invalid={p.invalid.then(|| AttrValue::from("true"))}
                {oninput}
                {onblur}
            />
        </div>
    }
}
