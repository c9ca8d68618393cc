use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::warn;

use api::{
    motion::Preset,
    profile::{HERO_ROLES, ROLE_INTERVAL_MS, hero_backgrounds, next_index},
};

use crate::{
    Route,
    common::{SITE, browser::preload_images},
    components::transition::TransitionLink,
};

#[component]
pub fn Home() -> Element {
    let mut role = use_signal(|| 0usize);

    // every background is fetched before the hero is shown, so a role never swaps in
    // against a half-drawn image
    let preload = use_resource(|| async move {
        preload_images(hero_backgrounds())
            .await
            .inspect_err(|err| warn!("hero backgrounds unavailable: {err}"))
    });

    // rotation starts once the preload has settled, whatever its outcome; the task is
    // owned by this scope and stops when the page unmounts
    use_effect(move || {
        if preload.read().is_none() {
            return;
        }

        spawn(async move {
            loop {
                TimeoutFuture::new(ROLE_INTERVAL_MS).await;
                role.with_mut(|index| *index = next_index(*index, HERO_ROLES.len()));
            }
        });
    });

    let backgrounds_ok = match &*preload.read() {
        Some(Ok(())) => true,
        Some(Err(_)) => false,
        None => {
            return rsx! {
                div { class: "container loading-state",
                    div { class: "skeleton", style: "height: 60vh;" }
                }
            };
        }
    };

    let current = HERO_ROLES[role() % HERO_ROLES.len()];
    let fade = Preset::Fade.enter_class();

    rsx! {
        div { class: "container",
            section { class: if backgrounds_ok { "hero" } else { "hero degraded" },
                if backgrounds_ok {
                    div {
                        key: "{current.background}",
                        class: "hero-backdrop {fade}",
                        style: "background-image: url({current.background});",
                    }
                }
                div { class: "hero-content",
                    h1 { class: "hero-title", "Hi, I'm {SITE.owner}" }
                    p { key: "{current.title}", class: "hero-role {fade}", "{current.title}" }
                    p { class: "hero-subtitle", "{SITE.tagline}" }
                    div { class: "hero-actions",
                        TransitionLink { to: Route::Work {}, class: "btn btn-primary btn-lg",
                            "See my work"
                        }
                        TransitionLink { to: Route::Contact {}, class: "btn btn-secondary btn-lg",
                            "Get in touch"
                        }
                    }
                }
            }
        }
    }
}
