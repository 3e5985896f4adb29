use dioxus::prelude::*;
use registration::{Destination, UserId};
use ui::views::EditUserView;

use super::navigate_to;
use crate::Route;

#[component]
pub fn EditUser(id: UserId) -> Element {
    let nav = use_navigator();

    rsx! {
        EditUserView {
            id,
            on_navigate: move |destination| match destination {
                // A missing user replaces the edit entry so Back does not return to it
                Destination::Create => {
                    nav.replace(Route::from(destination));
                }
                _ => navigate_to(nav, destination),
            },
            on_back: move |_| {
                if nav.can_go_back() {
                    nav.go_back();
                } else {
                    nav.push(Route::ViewUser { id });
                }
            },
        }
    }
}
