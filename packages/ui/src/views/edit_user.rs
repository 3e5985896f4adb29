use dioxus::prelude::*;
use registration::{
    Destination, EditStage, FormState, FormValues, Target, UserId, USER_NOT_FOUND,
};

use crate::{notify, submit_form, use_api, UserForm};

/// Edit page for an existing user.
///
/// The record is fetched once per id and handed to the form. Uploads start
/// empty and are only sent when the user picks a replacement. If the user
/// cannot be loaded the page says so and returns to registration.
#[component]
pub fn EditUserView(
    id: UserId,
    /// Called after saving (the user's page) or when the user is missing.
    on_navigate: EventHandler<Destination>,
    /// Called when the user cancels editing.
    on_back: EventHandler<()>,
) -> Element {
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let api = use_api();
    let submit_api = api.clone();
    let mut form = use_signal(|| FormState::new(Target::Update(id), FormValues::default()));
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || {
        let api = api.clone();
        let id = id_signal();
        async move {
            loading.set(true);
            match EditStage::load(&api, id).await {
                EditStage::Editing(loaded) => form.set(loaded),
                _ => {
                    notify(USER_NOT_FOUND);
                    on_navigate.call(Destination::Create);
                }
            }
            loading.set(false);
        }
    });

    if loading() {
        return rsx! {
            div { class: "container loading", "Loading..." }
        };
    }

    rsx! {
        div {
            class: "container",
            h2 { "Edit User" }
            UserForm {
                form,
                submit_label: "Update",
                on_submit: move |_| submit_form(form, submit_api.clone(), None, on_navigate),
                on_cancel: move |_| on_back.call(()),
            }
        }
    }
}
