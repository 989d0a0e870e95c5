use dioxus::prelude::*;

use crate::message::use_messages;

/// The global status line.
#[component]
pub fn MessageBanner() -> Element {
    let messages = use_messages();
    let visible = messages.read().visible().cloned();

    match visible {
        Some(message) => {
            let class = format!("message {}", message.kind.class());
            rsx! {
                div { id: "message", class, "{message.text}" }
            }
        }
        None => rsx! {
            div { id: "message", class: "message hidden" }
        },
    }
}
