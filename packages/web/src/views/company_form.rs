use api::{NewCompany, ValidationErrors};
use dioxus::prelude::*;

use super::field::Field;

/// Create/edit form for a company. Emits the trimmed, validated body.
#[component]
pub fn CompanyForm(
    initial: NewCompany,
    submit_label: String,
    on_submit: EventHandler<NewCompany>,
    on_cancel: EventHandler<()>,
) -> Element {
    let name = use_signal(|| initial.name.clone());
    let address = use_signal(|| initial.address.clone());
    let business = use_signal(|| initial.business.clone());
    let province = use_signal(|| initial.province.clone());
    let postalcode = use_signal(|| initial.postalcode.clone());
    let tel = use_signal(|| initial.tel.clone());
    let picture = use_signal(|| initial.picture.clone());
    let mut errors = use_signal(ValidationErrors::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = NewCompany {
            name: name(),
            address: address(),
            business: business(),
            province: province(),
            postalcode: postalcode(),
            tel: tel(),
            picture: picture(),
        };
        match form.validate() {
            Ok(company) => {
                errors.set(ValidationErrors::default());
                on_submit.call(company);
            }
            Err(e) => errors.set(e),
        }
    };

    rsx! {
        form {
            class: "form",
            onsubmit: handle_submit,

            Field { label: "Name", name: "name", value: name, errors }
            Field { label: "Address", name: "address", value: address, errors }
            Field { label: "Business", name: "business", value: business, errors }
            Field { label: "Province", name: "province", value: province, errors }
            Field { label: "Postal code", name: "postalcode", value: postalcode, errors }
            Field { label: "Telephone", name: "tel", kind: "tel", value: tel, errors }
            Field { label: "Picture URL", name: "picture", kind: "url", value: picture, errors }

            div {
                class: "form-actions",
                button { class: "btn btn-primary", r#type: "submit", "{submit_label}" }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
