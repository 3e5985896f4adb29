//! The registration form shared by the create and edit pages.

use api::HttpApi;
use dioxus::prelude::*;
use registration::{Destination, Field, FormState};

use crate::fields::{FileField, TextField};
use crate::notify;

/// Start submitting `form`.
///
/// Validation runs synchronously; when it fails the errors are already on the
/// form and nothing is sent. Otherwise the request runs in a spawned task and
/// `on_saved` receives the destination once the server accepts it.
pub fn submit_form(
    mut form: Signal<FormState>,
    api: HttpApi,
    success_notice: Option<&'static str>,
    on_saved: EventHandler<Destination>,
) {
    let pending = form.write().begin_submit();
    let pending = match pending {
        Ok(pending) => pending,
        Err(blocked) => {
            tracing::debug!(%blocked, "submit blocked");
            return;
        }
    };

    spawn(async move {
        let result = pending.send(&api).await;
        let destination = form.write().finish_submit(result);
        if let Some(destination) = destination {
            if let Some(message) = success_notice {
                notify(message);
            }
            on_saved.call(destination);
        }
    });
}

#[component]
pub fn UserForm(
    form: Signal<FormState>,
    submit_label: String,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let submitting = form.read().is_submitting();
    let general = form.read().general_error().map(str::to_string);

    rsx! {
        form {
            class: "user-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            // Native reset also clears the file pickers, which hold no bound value
            onreset: move |_| on_cancel.call(()),

            if let Some(message) = general {
                div { class: "error general-error", "{message}" }
            }

            TextField { form, field: Field::FirstName }
            TextField { form, field: Field::LastName }
            TextField { form, field: Field::Email, input_type: "email" }
            FileField { form, field: Field::ProfilePhoto }

            fieldset {
                class: "address",
                h3 { "Company Address" }
                TextField { form, field: Field::CompanyAddress }
                TextField { form, field: Field::CompanyCity }
                TextField { form, field: Field::CompanyState }
                TextField { form, field: Field::CompanyZip }
            }

            fieldset {
                class: "address",
                h3 { "Home Address" }
                TextField { form, field: Field::HomeAddress }
                TextField { form, field: Field::HomeCity }
                TextField { form, field: Field::HomeState }
                TextField { form, field: Field::HomeZip }
            }

            FileField { form, field: Field::AppointmentLetter }

            div {
                class: "form-actions",
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: submitting,
                    if submitting { "Saving..." } else { "{submit_label}" }
                }
                button {
                    class: "secondary",
                    r#type: "reset",
                    disabled: submitting,
                    "Cancel"
                }
            }
        }
    }
}
