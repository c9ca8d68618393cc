#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;
use common::{style, theme::use_theme_provider};

mod components;
use components::navigation::NavBar;

mod home;
use home::Home;

mod work;
use work::Work;

mod projects;
use projects::{ProjectDetail, Projects};

mod about;
use about::About;

mod contact;
use contact::Contact;

mod not_found;
use not_found::PageNotFound;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// both project routes take ?category=web|graphics; the parameter is kept as a String
// here and folded into api::category::Category by the pages, so that unknown or
// missing values land on the default rather than failing to route
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/work")]
        Work {},
        #[route("/projects?:category")]
        Projects { category: String },
        #[route("/projects/:slug?:category")]
        ProjectDetail { slug: String, category: String },
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_theme_provider();

    let motion_styles = use_hook(api::motion::all_keyframes_css);

    rsx! {
        style { "{style::MODERN_STYLES}" }
        style { "{motion_styles}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
