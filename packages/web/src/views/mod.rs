use dioxus::prelude::*;
use dioxus::router::Navigator;
use registration::Destination;

use crate::Route;

mod create_user;
pub use create_user::CreateUser;

mod view_user;
pub use view_user::ViewUser;

mod edit_user;
pub use edit_user::EditUser;

mod not_found;
pub use not_found::PageNotFound;

/// Push the route for `destination` onto the history.
pub(crate) fn navigate_to(nav: Navigator, destination: Destination) {
    tracing::debug!(path = %destination.path(), "navigate");
    nav.push(Route::from(destination));
}
