use dioxus::prelude::*;

use api::profile::{JOURNEY, JourneyHighlight};

use crate::{Route, common::SITE, components::transition::TransitionLink};

const SKILLS: [&str; 8] = [
    "HTML & CSS",
    "JavaScript",
    "React",
    "Vue",
    "Node.js",
    "Figma",
    "Illustrator",
    "Photoshop",
];

#[component]
fn Journey() -> Element {
    let mut highlight = use_signal(JourneyHighlight::default);

    rsx! {
        section { class: "journey",
            h2 { "My Journey" }
            ol { class: "timeline",
                for (index, step) in JOURNEY.iter().enumerate() {
                    li {
                        key: "{step.title}",
                        class: if index % 2 == 0 { "timeline-step" } else { "timeline-step mirrored" },
                        onmouseenter: move |_| highlight.with_mut(|h| h.hover(index)),
                        div {
                            class: if highlight.read().is_active(index) { "card journey-card active" } else { "card journey-card" },
                            span { class: "journey-icon", "{step.icon}" }
                            span { class: "journey-year", "{step.year}" }
                            h3 { "{step.title}" }
                            p { "{step.content}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "container",
            h1 { "About" }

            div { class: "project-detail",
                div {
                    div { class: "detail-section",
                        p {
                            "I'm {SITE.owner}, a web developer and graphic designer. I build sites that "
                            "small businesses can run themselves, and I design the brands that go on them."
                        }
                    }
                    div { class: "detail-section",
                        h2 { "How I work" }
                        p {
                            "Every project starts with time spent alongside the people who will use it. "
                            "The design follows from what they already do, not the other way around."
                        }
                    }
                    TransitionLink { to: Route::Contact {}, class: "btn btn-primary", "Work with me" }
                }

                div { class: "detail-section",
                    h2 { "Skills" }
                    div { class: "tags",
                        for skill in SKILLS {
                            span { key: "{skill}", class: "tag", "{skill}" }
                        }
                    }
                }
            }

            Journey {}
        }
    }
}
