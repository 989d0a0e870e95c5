use std::path::PathBuf;

use dioxus::prelude::*;

use store::ClientConfig;
use ui::views::ActivitiesPage;
use ui::ClientProvider;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Overrides `[api] base_url` from `client.toml`.
const API_URL_ENV: &str = "ACTIVITY_SIGNUP_API_URL";

fn main() {
    dotenvy::dotenv().ok();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ClientProvider { config,
            ActivitiesPage {}
        }
    }
}

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(ui::APP_DIR)
        .join(ClientConfig::filename())
}

/// `client.toml` from the user config dir, then the environment override.
fn load_config() -> ClientConfig {
    let path = config_path();
    let mut config = match std::fs::read_to_string(&path) {
        Ok(text) => ClientConfig::from_toml(&text).unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid {}: {e}", path.display());
            ClientConfig::default()
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => ClientConfig::default(),
        Err(e) => {
            tracing::warn!("Failed to read {}: {e}", path.display());
            ClientConfig::default()
        }
    };

    if let Ok(base_url) = std::env::var(API_URL_ENV) {
        tracing::info!(%base_url, "API base URL taken from {API_URL_ENV}");
        config = config.with_base_url(base_url);
    }
    config
}
