use dioxus::prelude::*;
use dioxus_router::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::debug;

use api::motion::Preset;

use crate::Route;

pub const PAGE_PRESET: Preset = Preset::SlideUp;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Entering,
    Exiting,
}

// shared between every TransitionLink and the single PageTransition in the layout
pub static TRANSITION: GlobalSignal<Phase> = Signal::global(|| Phase::Entering);

// play the exit animation on the current page, then swap the route
//
// the new page mounts with Phase::Entering and its own enter animation
pub async fn navigate_with_exit(navigator: Navigator, target: Route) {
    debug!("leaving for {target}");

    *TRANSITION.write() = Phase::Exiting;
    TimeoutFuture::new(PAGE_PRESET.variants().duration_ms).await;

    navigator.push(target);
    *TRANSITION.write() = Phase::Entering;
}

#[component]
pub fn PageTransition(children: Element) -> Element {
    let route: Route = use_route();

    let class = match TRANSITION() {
        Phase::Entering => PAGE_PRESET.enter_class(),
        Phase::Exiting => PAGE_PRESET.exit_class(),
    };

    // keying on the route remounts the wrapper, which restarts the enter animation
    rsx! {
        div { key: "{route}", class: "page {class}", {children} }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TransitionLinkProps {
    to: Route,
    #[props(default)]
    class: String,
    children: Element,
}

// a Link that runs the exit animation before navigating
#[component]
pub fn TransitionLink(props: TransitionLinkProps) -> Element {
    let navigator = use_navigator();
    let target = props.to;
    let href = target.to_string();

    rsx! {
        a {
            href: "{href}",
            class: "{props.class}",
            onclick: move |event| {
                event.prevent_default();
                let target = target.clone();
                async move { navigate_with_exit(navigator, target).await }
            },
            {props.children}
        }
    }
}
