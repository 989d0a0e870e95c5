use dioxus::prelude::*;

use store::ClientConfig;
use ui::views::ActivitiesPage;
use ui::ClientProvider;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The page is served by the activities API itself, so the default
    // config talks to the page origin.
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ClientProvider { config: ClientConfig::default(),
            ActivitiesPage {}
        }
    }
}
