use dioxus::prelude::*;
use dioxus_router::{Link, Routable, Router};

use crate::config::{use_runtime_config, RuntimeConfig};
use crate::hooks::use_countdown_on_ready;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config_resource = use_runtime_config();
    let Some(config) = config_resource() else {
        return rsx! {
            document::Title { "Halloween" }
            div { class: "page loading",
                p { "Loading..." }
            }
        };
    };

    use_context_provider(|| config);

    rsx! {
        document::Title { "Halloween" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "theme-color", content: "#ff7518" }
        Router::<Route> {}
    }
}

#[derive(Clone, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn Home() -> Element {
    let config = use_context::<RuntimeConfig>();
    let target_id = config.display_target_id.clone();
    let text = use_countdown_on_ready(config);

    rsx! {
        div { class: "page countdown-page",
            h1 { class: "countdown-title", "Next halloween" }
            p { id: "{target_id}", class: "countdown-date", aria_live: "polite", "{text}" }
        }
    }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    rsx! {
        div { class: "page not-found",
            h1 { "Nothing to see at {path}" }
            Link { to: Route::Home {}, class: "countdown-link", "Back to the countdown" }
        }
    }
}
