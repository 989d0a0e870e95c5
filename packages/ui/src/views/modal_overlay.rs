use dioxus::prelude::*;

/// Dialog with a title bar and a close button.
///
/// `on_close` fires for the close button and for clicks on the backdrop.
/// Clicks inside the dialog stay inside it.
#[component]
pub fn ModalOverlay(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-content",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div { class: "modal-header",
                    h3 { "{title}" }
                    button {
                        class: "close",
                        r#type: "button",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                {children}
            }
        }
    }
}
