use std::rc::Rc;

use dioxus::prelude::*;
use futures::StreamExt;
use tracing::{debug, error};

use api::{
    carousel::{Carousel, KeyAction},
    category::Category,
    project::{ProjectRecord, fetch_projects, resolve_project},
};

use crate::{
    Route,
    common::{SITE, browser::KeyListener},
    components::transition::TransitionLink,
};

#[derive(Clone, PartialEq, Props)]
struct ProjectImagesProps {
    project: ProjectRecord,
    image_dir: String,
}

// carousel, thumbnail strip, and the full-screen overlay
//
// arrow keys and escape are read from the document while this is mounted; the
// listener forwards into a coroutine so that the signal is only written from
// inside the runtime
#[component]
fn ProjectImages(props: ProjectImagesProps) -> Element {
    let project = props.project;
    let image_dir = props.image_dir;

    let mut carousel = use_signal(|| Carousel::new(project.outcome_images.len()));

    let keys = use_coroutine(move |mut rx: UnboundedReceiver<KeyAction>| async move {
        while let Some(action) = rx.next().await {
            carousel.write().handle_key(action);
        }
    });

    // dropped, and thereby removed from the document, on unmount
    use_hook(move || {
        let tx = keys.tx();
        let listener = KeyListener::new(move |event| {
            if let Some(action) = KeyAction::from_key(&event.key()) {
                let _ = tx.unbounded_send(action);
            }
        });

        match listener {
            Ok(listener) => Some(Rc::new(listener)),
            Err(err) => {
                error!("keyboard navigation unavailable: {err}");
                None
            }
        }
    });

    let state = carousel();
    let current = project
        .image_url(&image_dir, state.index())
        .unwrap_or_default();

    rsx! {
        div { class: "carousel",
            img {
                src: "{current}",
                alt: "{project.title} image {state.index() + 1}",
                onclick: move |_| carousel.write().open(),
            }
            div { class: "carousel-controls",
                button { class: "btn btn-sm btn-secondary", onclick: move |_| carousel.write().previous(), "‹ Previous" }
                span { "{state.index() + 1} / {state.len()}" }
                button { class: "btn btn-sm btn-secondary", onclick: move |_| carousel.write().next(), "Next ›" }
            }
            div { class: "thumbnails",
                for (index, file) in project.outcome_images.iter().enumerate() {
                    img {
                        key: "{index}-{file}",
                        class: if index == state.index() { "selected" } else { "" },
                        src: "{image_dir}/{file}",
                        alt: "{file}",
                        onclick: move |_| carousel.write().select(index),
                    }
                }
            }
        }

        if state.is_fullscreen() {
            div { class: "fullscreen-overlay", onclick: move |_| carousel.write().close(),
                img { src: "{current}", alt: "{project.title}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ProjectBodyProps {
    project: ProjectRecord,
}

#[component]
fn ProjectBody(props: ProjectBodyProps) -> Element {
    let project = props.project;

    rsx! {
        div {
            div { class: "detail-section",
                h2 { "Overview" }
                p { "{project.overview}" }
            }
            div { class: "detail-section",
                h2 { "The problem" }
                p { "{project.problem}" }
            }
            div { class: "detail-section",
                h2 { "Design process" }
                p { "{project.design_process}" }
            }
            div { class: "detail-section",
                h2 { "Technologies" }
                div { class: "tags",
                    for tech in project.technologies_used.iter() {
                        span { key: "{tech}", class: "tag", "{tech}" }
                    }
                }
            }
            div { class: "detail-section",
                h2 { "Lessons learnt" }
                p { "{project.lessons_learnt}" }
            }
            div { class: "detail-section",
                h2 { "How we met" }
                p { "{project.how_we_met}" }
                if project.return_client {
                    p { class: "tag", style: "display: inline-block; margin-top: var(--gap-2);",
                        "Return client"
                    }
                }
            }
        }
    }
}

//
// ROUTE TARGET
//
#[component]
pub fn ProjectDetail(slug: String, category: String) -> Element {
    // the category is read once, when the page mounts
    let category = use_hook(|| Category::from_query(&category));
    let list_route = Route::Projects {
        category: category.to_string(),
    };
    let requested = slug.clone();

    // the list is fetched fresh on every mount and searched for the slug
    let project_future = use_resource(use_reactive!(|(slug,)| async move {
        debug!(category = %category, slug = %slug, "resolving project");

        let projects = fetch_projects(category, &SITE.data)
            .await
            .inspect_err(|err| error!(category = %category, "project load failed: {err}"))?;

        anyhow::Ok(resolve_project(&projects, &slug).cloned())
    }));

    match &*project_future.read_unchecked() {
        Some(Ok(Some(project))) => rsx! {
            div { class: "container",
                div { class: "breadcrumb",
                    TransitionLink { to: list_route, "{category.title()}" }
                    span { " / " }
                    span { "{project.title}" }
                }
                h1 { style: "margin-bottom: var(--gap-6);", "{project.title}" }

                div { class: "project-detail",
                    ProjectImages {
                        key: "{project.slug}",
                        project: project.clone(),
                        image_dir: category.image_dir(&SITE.data).to_owned(),
                    }
                    ProjectBody { project: project.clone() }
                }
            }
        },
        Some(Ok(None)) => rsx! {
            div { class: "container error-state",
                h1 { "Project not found" }
                p { "There is no {category} project called \"{requested}\"." }
                TransitionLink { to: list_route, class: "btn btn-primary", "Back to projects" }
            }
        },
        Some(Err(err)) => rsx! {
            div { class: "container error-state",
                h1 { "Could not load project" }
                p { "{err}" }
                TransitionLink { to: list_route, class: "btn btn-primary", "Back to projects" }
            }
        },
        None => rsx! {
            div { class: "container loading-state",
                div { class: "skeleton", style: "height: 40px; width: 240px; margin-bottom: 16px;" }
                div { class: "skeleton", style: "height: 400px;" }
            }
        },
    }
}
