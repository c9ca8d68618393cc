use dioxus::prelude::*;
use tracing::{debug, error};

use api::{
    category::Category,
    project::{fetch_projects, filter_projects},
};

use crate::{
    Route,
    common::{SITE, browser::reload_page},
    components::transition::TransitionLink,
    projects::card::ProjectGrid,
};

#[derive(Clone, PartialEq, Props)]
struct ProjectSearchBarProps {
    search_signal: Signal<String>,
    status: String,
}

// filters on every keystroke; there is nothing to submit
#[component]
fn ProjectSearchBar(props: ProjectSearchBarProps) -> Element {
    let mut search_signal = props.search_signal;
    let status = props.status;

    rsx! {
        div {
            class: "search-bar flex items-center",
            style: "gap: var(--gap-4); margin-bottom: var(--gap-6);",
            input {
                class: "form-input",
                r#type: "search",
                placeholder: "Search by title, description or technology",
                value: "{search_signal}",
                oninput: move |event| search_signal.set(event.value()),
            }
            if !status.is_empty() {
                span { style: "color: var(--ink-faint); white-space: nowrap;", "{status}" }
            }
        }
    }
}

//
// ROUTE TARGET
//
#[component]
pub fn Projects(category: String) -> Element {
    let category = Category::from_query(&category);

    let search_signal = use_signal(String::new);

    // the load belongs to this component's scope, so leaving the page drops it before it
    // can write into a dead signal
    let projects_future = use_resource(use_reactive!(|(category,)| async move {
        debug!(category = %category, "loading project list");
        fetch_projects(category, &SITE.data)
            .await
            .inspect_err(|err| error!(category = %category, "project load failed: {err}"))
    }));

    let header = rsx! {
        div { class: "breadcrumb",
            TransitionLink { to: Route::Work {}, "Work" }
            span { " / " }
            span { "{category.title()}" }
        }
        h1 { "{category.title()}" }
    };

    match &*projects_future.read_unchecked() {
        Some(Ok(projects)) => {
            let filtered = filter_projects(projects, &search_signal.read());
            let status = format!("Showing {} of {}", filtered.len(), projects.len());

            rsx! {
                div { class: "container",
                    {header}
                    ProjectSearchBar { search_signal, status }
                    ProjectGrid { projects: filtered, category }
                }
            }
        }
        Some(Err(err)) => rsx! {
            div { class: "container",
                {header}
                div { class: "error-state",
                    h2 { "Could not load projects" }
                    p { "{err}" }
                    button { class: "btn btn-primary", onclick: move |_| reload_page(), "Try again" }
                }
            }
        },
        None => rsx! {
            div { class: "container loading-state",
                {header}
                div { class: "project-grid",
                    for i in 0..3 {
                        div { key: "{i}", class: "skeleton", style: "height: 280px;" }
                    }
                }
            }
        },
    }
}
