use dioxus::prelude::*;

use api::{category::Category, project::ProjectRecord};

use crate::{Route, common::SITE, components::transition::TransitionLink};

#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardProps {
    project: ProjectRecord,
    category: Category,
}

#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;
    let category = props.category;

    let thumbnail = project
        .thumbnail(category.image_dir(&SITE.data))
        .unwrap_or_default();

    rsx! {
        TransitionLink {
            to: Route::ProjectDetail {
                slug: project.slug.clone(),
                category: category.to_string(),
            },
            class: "project-card",
            div { class: "project-card-image",
                img { src: "{thumbnail}", alt: "{project.title}", loading: "lazy" }
                if project.return_client {
                    span { class: "badge", "Return client" }
                }
            }
            div { class: "project-card-info",
                h3 { "{project.title}" }
                p { class: "overview", "{project.overview}" }
                div { class: "tags",
                    for tech in project.technologies_used.iter() {
                        span { key: "{tech}", class: "tag", "{tech}" }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ProjectGridProps {
    projects: Vec<ProjectRecord>,
    category: Category,
}

#[component]
pub fn ProjectGrid(props: ProjectGridProps) -> Element {
    let category = props.category;

    if props.projects.is_empty() {
        return rsx! {
            div { class: "empty-state", "No projects match your search." }
        };
    }

    rsx! {
        div { class: "project-grid",
            for project in props.projects {
                ProjectCard { key: "{project.id}-{project.slug}", project, category }
            }
        }
    }
}
