use api::ValidationErrors;
use dioxus::prelude::*;

/// Labelled input bound to a string signal, with its validation message.
#[component]
pub fn Field(
    label: String,
    name: String,
    value: Signal<String>,
    errors: Signal<ValidationErrors>,
    #[props(default = "text".to_string())] kind: String,
    #[props(default)] placeholder: String,
) -> Element {
    let mut value = value;
    let message = errors.read().get(&name);

    rsx! {
        label {
            r#for: "{name}",
            "{label}"
        }
        input {
            id: "{name}",
            name: "{name}",
            r#type: "{kind}",
            placeholder: "{placeholder}",
            value: value(),
            oninput: move |evt| value.set(evt.value()),
        }
        if let Some(message) = message {
            p { class: "field-error", "{message}" }
        }
    }
}
