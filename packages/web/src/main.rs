use api::ClientConfig;
use dioxus::prelude::*;

use registration::{Destination, UserId};
use ui::ApiProvider;
use views::{CreateUser, EditUser, PageNotFound, ViewUser};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    CreateUser {},
    #[route("/view/:id")]
    ViewUser { id: UserId },
    #[route("/edit/:id")]
    EditUser { id: UserId },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Create => Route::CreateUser {},
            Destination::View(id) => Route::ViewUser { id },
            Destination::Edit(id) => Route::EditUser { id },
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const REGISTRY_TOML: &str = include_str!("../registry.toml");

/// Bundled settings with build-time overrides applied.
fn client_config() -> ClientConfig {
    let config = ClientConfig::from_toml(REGISTRY_TOML).unwrap_or_else(|e| {
        tracing::error!(error = %e, "invalid bundled registry.toml, using defaults");
        ClientConfig::default()
    });
    config.with_build_env()
}

fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::VIEWS_CSS }

        ApiProvider {
            config: client_config(),
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = ClientConfig::from_toml(REGISTRY_TOML).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_destination_maps_to_route() {
        let id = UserId(3);
        assert_eq!(Route::from(Destination::Create), Route::CreateUser {});
        assert_eq!(Route::from(Destination::View(id)), Route::ViewUser { id });
        assert_eq!(Route::from(Destination::Edit(id)).to_string(), "/edit/3");
    }
}
