use dioxus::prelude::*;
use ui::views::NotFoundView;

use super::navigate_to;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();

    rsx! {
        NotFoundView {
            path: segments.join("/"),
            on_navigate: move |destination| navigate_to(nav, destination),
        }
    }
}
