use dioxus::prelude::*;
use registration::Destination;

/// Shown for any path the router does not know.
#[component]
pub fn NotFoundView(path: String, on_navigate: EventHandler<Destination>) -> Element {
    rsx! {
        div {
            class: "container not-found",
            h2 { "Page not found" }
            p { "Nothing lives at /{path}." }
            button {
                class: "secondary",
                onclick: move |_| on_navigate.call(Destination::Create),
                "Register a new user"
            }
        }
    }
}
