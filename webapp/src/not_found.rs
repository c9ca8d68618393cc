use dioxus::prelude::*;
use tracing::debug;

use crate::{Route, components::transition::TransitionLink};

// catch-all route; unmatched paths render this page rather than redirecting
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    debug!("no route for {path}");

    rsx! {
        div { class: "container error-state",
            h1 { "Page not found" }
            p { "There is nothing at {path}." }
            TransitionLink { to: Route::Home {}, class: "btn btn-primary", "Back home" }
        }
    }
}
