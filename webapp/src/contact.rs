use dioxus::prelude::*;

use crate::{
    common::SITE,
    components::social_modal::{CopyButton, SocialModal},
};

#[component]
pub fn Contact() -> Element {
    let mut modal_open = use_signal(|| false);

    rsx! {
        div { class: "container",
            h1 { "Contact" }
            p { class: "hero-subtitle", "Have a project in mind? Reach out directly." }

            div { class: "card", style: "padding: var(--gap-6); max-width: 560px;",
                CopyButton { label: "Phone", value: SITE.phone.clone() }
                CopyButton { label: "Email", value: SITE.email.clone() }

                div { class: "hero-actions", style: "margin-top: var(--gap-4);",
                    button { class: "btn btn-primary", onclick: move |_| modal_open.set(true), "More ways to reach me" }
                }
            }

            SocialModal { open: modal_open(), on_close: move |_| modal_open.set(false) }
        }
    }
}
