use dioxus::prelude::*;
use registration::UserId;
use ui::views::ViewUserView;

use super::navigate_to;

#[component]
pub fn ViewUser(id: UserId) -> Element {
    let nav = use_navigator();

    rsx! {
        ViewUserView {
            id,
            on_navigate: move |destination| navigate_to(nav, destination),
        }
    }
}
