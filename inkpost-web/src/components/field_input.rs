use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub input_type: Option<AttrValue>,
    /// Field currently fails its rule; sets `aria-invalid`.
    #[prop_or_default]
    pub invalid: bool,
    /// Transient rejected-keystroke flash.
    #[prop_or_default]
    pub flash: bool,
    #[prop_or_default]
    pub oninput: Callback<String>,
    #[prop_or_default]
    pub onblur: Callback<()>,
}

/// Labelled single-line text field.
#[function_component(FieldInput)]
pub fn field_input(p: &Props) -> Html {
    let oninput = {
        let cb = p.oninput.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let onblur = {
        let cb = p.onblur.clone();
        Callback::from(move |_e: FocusEvent| cb.emit(()))
    };
    let class = classes!("field-input", p.flash.then_some("field-flash"));
    let input_type = p.input_type.clone().unwrap_or_else(|| "text".into());
    html! {
        <div class="field">
            <label for={p.id.clone()}>{ p.label.clone() }</label>
            <input
                id={p.id.clone()}
                name={p.id.clone()}
                type={input_type}
                class={class}
                value={p.value.clone()}
                aria-invalid={p.invalid.then(|| AttrValue::from("true"))}
                {oninput}
                {onblur}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props() -> Props {
        Props {
            id: AttrValue::from("name"),
            label: AttrValue::from("Your name"),
            value: AttrValue::from("Ada"),
            input_type: None,
            invalid: false,
            flash: false,
            oninput: Callback::noop(),
            onblur: Callback::noop(),
        }
    }

    #[test]
    fn renders_label_and_value() {
        let html = block_on(LocalServerRenderer::<FieldInput>::with_props(props()).render());
        assert!(html.contains("Your name"));
        assert!(html.contains("Ada"));
        assert!(!html.contains("aria-invalid"));
        assert!(!html.contains("field-flash"));
    }

    #[test]
    fn invalid_and_flash_states_show_up_in_markup() {
        let html = block_on(
            LocalServerRenderer::<FieldInput>::with_props(Props {
                invalid: true,
                flash: true,
                ..props()
            })
            .render(),
        );
        assert!(html.contains("aria-invalid=\"true\""));
        assert!(html.contains("field-flash"));
    }
}
