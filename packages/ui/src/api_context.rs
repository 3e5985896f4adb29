//! HTTP client context shared by every page.

use api::{ClientConfig, HttpApi};
use dioxus::prelude::*;

/// Get the registry client provided by [`ApiProvider`].
pub fn use_api() -> HttpApi {
    use_context::<HttpApi>()
}

/// Provides one [`HttpApi`] built from `config` to the tree below it.
#[component]
pub fn ApiProvider(config: ClientConfig, children: Element) -> Element {
    use_context_provider(move || HttpApi::new(config));

    rsx! {
        {children}
    }
}
