use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use tracing::error;

use api::feedback::CopyFeedback;

use crate::common::{
    SITE,
    browser::{current_url, write_clipboard},
    now_ms,
};

#[derive(Clone, PartialEq, Props)]
pub struct CopyButtonProps {
    label: String,
    value: String,
}

// copies a fixed value and shows "Copied" for copy_feedback_ms
//
// the reset runs in the click handler's task, so it is dropped with the component
#[component]
pub fn CopyButton(props: CopyButtonProps) -> Element {
    let mut feedback = use_signal(|| CopyFeedback::new(u64::from(SITE.copy_feedback_ms)));

    let label = props.label;
    let value = props.value;

    rsx! {
        div { class: "contact-row",
            div {
                div { class: "form-label", "{label}" }
                span { "{value}" }
            }
            button {
                class: "btn btn-sm btn-secondary",
                onclick: move |_| {
                    let value = value.clone();
                    let label = label.clone();
                    async move {
                        if let Err(err) = write_clipboard(&value).await {
                            error!("failed to copy {label} to clipboard: {err}");
                            return;
                        }

                        let now = now_ms();
                        let delay = feedback.read().delay_ms();
                        feedback.write().mark(now);

                        TimeoutFuture::new(delay as u32).await;
                        feedback.write().tick(now + delay);
                    }
                },
                if feedback.read().is_copied() {
                    "Copied!"
                } else {
                    "Copy"
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SocialModalProps {
    open: bool,
    on_close: EventHandler<()>,
}

#[component]
pub fn SocialModal(props: SocialModalProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    let on_close = props.on_close;
    let share = SITE.share_link(&current_url());

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |evt| {
                evt.stop_propagation();
                on_close.call(());
            },
            div {
                class: "modal-content",
                style: "max-width: 480px; width: 100%;",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-header",
                    h2 { "Get in touch" }
                    button { class: "btn-close", onclick: move |_| on_close.call(()), "×" }
                }

                div { class: "modal-body",
                    CopyButton { label: "Phone", value: SITE.phone.clone() }
                    CopyButton { label: "Email", value: SITE.email.clone() }

                    div { class: "hero-actions", style: "margin-top: var(--gap-4); flex-wrap: wrap;",
                        a {
                            class: "btn btn-primary btn-sm",
                            href: "{SITE.whatsapp_link()}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "WhatsApp"
                        }
                        a { class: "btn btn-secondary btn-sm", href: "{SITE.mailto_link()}", "Email" }
                        a {
                            class: "btn btn-secondary btn-sm",
                            href: "{share}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Share"
                        }
                    }
                }
            }
        }
    }
}
