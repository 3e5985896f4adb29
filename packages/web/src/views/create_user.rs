use dioxus::prelude::*;
use ui::views::CreateUserView;

use super::navigate_to;

#[component]
pub fn CreateUser() -> Element {
    let nav = use_navigator();

    rsx! {
        CreateUserView {
            on_navigate: move |destination| navigate_to(nav, destination),
        }
    }
}
