use dioxus::prelude::*;

use crate::provider::use_client;
use crate::{ActivityList, LoginModal, MessageBanner, SignupForm, UserMenu};

const ACTIVITIES_CSS: Asset = asset!("/assets/styling/activities.css");

/// The whole page: header, activity list, signup form and dialogs.
#[component]
pub fn ActivitiesPage() -> Element {
    let ctx = use_client();
    let mut chrome = ctx.chrome;
    let mode = ctx.indicator().mode_class();

    rsx! {
        document::Stylesheet { href: ACTIVITIES_CSS }
        div {
            class: "page {mode}",
            // Any click that reaches the page closes the user menu.
            onclick: move |_| {
                if chrome.peek().menu_open {
                    chrome.write().menu_open = false;
                }
            },
            header {
                h1 { "Mergington High School" }
                h2 { "Extracurricular Activities" }
                UserMenu {}
            }
            main {
                MessageBanner {}
                section { id: "activities-container",
                    h3 { "Available Activities" }
                    ActivityList {}
                }
                section { id: "signup-container",
                    h3 { "Sign Up a Student" }
                    SignupForm {}
                }
            }
            LoginModal {}
        }
    }
}
