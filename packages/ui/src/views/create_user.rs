use dioxus::prelude::*;
use registration::{Destination, FormState};

use crate::{submit_form, use_api, UserForm};

/// Registration page for a new user.
#[component]
pub fn CreateUserView(
    /// Called with the new user's page once the server has saved it.
    on_navigate: EventHandler<Destination>,
) -> Element {
    let api = use_api();
    let mut form = use_signal(FormState::create);

    rsx! {
        div {
            class: "container",
            h2 { "Add User" }
            UserForm {
                form,
                submit_label: "Submit",
                on_submit: move |_| {
                    submit_form(form, api.clone(), Some("Registration Successfully"), on_navigate)
                },
                on_cancel: move |_| form.write().reset(),
            }
        }
    }
}
