use api::ClientConfig;
use dioxus::prelude::*;
use registration::{Destination, Load, UserId, UserRecord};

use crate::{notify, use_api};

/// Read-only page for one user.
///
/// A user that cannot be loaded raises a notice and ends in a terminal
/// not-found state; the page does not redirect.
#[component]
pub fn ViewUserView(id: UserId, on_navigate: EventHandler<Destination>) -> Element {
    // Track the id in a signal so the fetch re-runs on route param change
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let api = use_api();
    let config = api.config().clone();
    let user = use_resource(move || {
        let api = api.clone();
        let id = id_signal();
        async move {
            let load = Load::fetch(&api, id).await;
            if let Some(message) = load.notice() {
                notify(message);
            }
            load
        }
    });

    let body = match user.cloned().unwrap_or(Load::Loading) {
        Load::Loading => rsx! {
            div { class: "loading", "Loading..." }
        },
        Load::NotFound => rsx! {
            div {
                class: "not-found",
                p { "No user data" }
                button {
                    class: "secondary",
                    onclick: move |_| on_navigate.call(Destination::Create),
                    "Register a new user"
                }
            }
        },
        Load::Ready(record) => rsx! {
            UserDetails { record, config, on_navigate }
        },
    };

    rsx! {
        div {
            class: "container",
            {body}
        }
    }
}

#[component]
fn UserDetails(
    record: UserRecord,
    config: ClientConfig,
    on_navigate: EventHandler<Destination>,
) -> Element {
    let photo_url = config.upload_url(&record.profile_photo);
    let letter_url = config.upload_url(&record.appointment_letter);
    let full_name = record.full_name();
    let address = &record.address;
    let id = record.id;

    rsx! {
        h2 { "User Details" }
        div {
            img { src: "{photo_url}", alt: "Profile", width: "150" }
        }
        div {
            strong { "Name:" }
            " {full_name}"
        }
        div {
            strong { "Email:" }
            " {record.email}"
        }
        div {
            h3 { "Company Address" }
            p { "{address.company_address}" }
            p { "{address.company_city}, {address.company_state} - {address.company_zip}" }
        }
        div {
            h3 { "Home Address" }
            p { "{address.home_address}" }
            p { "{address.home_city}, {address.home_state} - {address.home_zip}" }
        }
        div {
            a {
                href: "{letter_url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "View Appointment Letter"
            }
        }
        div {
            button {
                class: "primary",
                onclick: move |_| on_navigate.call(Destination::Edit(id)),
                "Edit Details"
            }
        }
    }
}
