use dioxus::prelude::*;
use tracing::warn;

use api::category::{CATEGORY_CARDS, CategoryCard, CategoryTarget};

use crate::{Route, common::browser::preload_images, components::transition::TransitionLink};

#[derive(Clone, PartialEq, Props)]
struct CategoryTileProps {
    card: CategoryCard,
    // false when preloading failed and the image should not be shown
    show_image: bool,
}

#[component]
fn CategoryTile(props: CategoryTileProps) -> Element {
    let card = props.card;

    let body = rsx! {
        div { class: "project-card-image",
            if props.show_image {
                img { src: "{card.image}", alt: "{card.title}" }
            } else {
                div { style: "aspect-ratio: 4/3; background-color: var(--placeholder);" }
            }
        }
        div { class: "project-card-info",
            h3 { "{card.title}" }
            p { class: "overview", "{card.description}" }
        }
    };

    match card.target {
        CategoryTarget::Projects(category) => rsx! {
            TransitionLink {
                to: Route::Projects {
                    category: category.to_string(),
                },
                class: "project-card category-card",
                {body}
            }
        },
        CategoryTarget::ComingSoon => rsx! {
            div { class: "project-card category-card", {body} }
        },
    }
}

#[component]
pub fn Work() -> Element {
    let mut coming_soon = use_signal::<Option<&'static str>>(|| None);

    let preload = use_resource(|| async move {
        let urls = CATEGORY_CARDS.iter().map(|card| card.image.to_owned()).collect();

        preload_images(urls)
            .await
            .inspect_err(|err| warn!("category images unavailable: {err}"))
    });

    let show_images = match &*preload.read() {
        Some(Ok(())) => true,
        Some(Err(_)) => false,
        None => {
            return rsx! {
                div { class: "container loading-state",
                    div { class: "project-grid",
                        for i in 0..CATEGORY_CARDS.len() {
                            div { key: "{i}", class: "skeleton", style: "height: 280px;" }
                        }
                    }
                }
            };
        }
    };

    rsx! {
        div { class: "container",
            h1 { "Work" }
            p { class: "hero-subtitle", "Pick a category to browse projects." }

            div { class: "project-grid",
                for card in CATEGORY_CARDS {
                    div {
                        key: "{card.title}",
                        onclick: move |_| {
                            if card.target == CategoryTarget::ComingSoon {
                                coming_soon.set(Some(card.title));
                            }
                        },
                        CategoryTile { card, show_image: show_images }
                    }
                }
            }

            if let Some(title) = coming_soon() {
                div { class: "coming-soon",
                    h3 { "{title} is coming soon" }
                    p { "Projects in this category are still being put together. Check back later." }
                }
            }
        }
    }
}
