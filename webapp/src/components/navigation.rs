use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::error;

use api::category::{NAVIGATION, NavigationItem};

use crate::{
    Route,
    common::{SITE, current_year, theme::use_theme},
    components::transition::{PageTransition, TransitionLink},
};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    item: NavigationItem,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let item = props.item;
    let current_path: Route = use_route();

    let target = match item.href.parse::<Route>() {
        Ok(route) => route,
        Err(err) => {
            error!("navigation entry {} has no route: {err}", item.name);
            return rsx! {};
        }
    };

    // the work entry stays lit while browsing projects
    let active = current_path == target
        || (target == Route::Work {}
            && matches!(
                current_path,
                Route::Projects { .. } | Route::ProjectDetail { .. }
            ));

    let class = if active { "nav-link active" } else { "nav-link" };

    rsx! {
        TransitionLink {
            class: "{class}",
            to: target,
            "{item.name}"
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let dark = theme.read().state().is_dark_mode;

    rsx! {
        button {
            class: "theme-toggle",
            title: if dark { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: move |_| theme.write().toggle(),
            if dark {
                "☀ Light"
            } else {
                "☾ Dark"
            }
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                TransitionLink { class: "logo", to: Route::Home {}, "{SITE.owner}" }

                nav { class: "nav-links",
                    for item in NAVIGATION {
                        NavBarButton { key: "{item.href}", item }
                    }
                    ThemeToggle {}
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    let year = current_year();

    rsx! {
        footer { class: "app-footer",
            div { class: "container flex justify-between items-center",
                span { "© {year} {SITE.owner}" }
                div { class: "footer-links",
                    for social in SITE.socials.iter() {
                        a {
                            key: "{social.name}",
                            href: "{social.href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{social.name}"
                        }
                    }
                }
            }
        }
    }
}

// layout shell
//
// this stays mounted across route changes; only the outlet inside the transition wrapper
// is swapped out
#[component]
pub fn NavBar() -> Element {
    rsx! {
        div { class: "app-shell",
            NavBarInner {}
            main { class: "page-outlet",
                PageTransition { Outlet::<Route> {} }
            }
            Footer {}
        }
    }
}
