//! Shared constructors for the platform-dependent pieces.
//!
//! Session persistence:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStore`]
//! - **Desktop** (native): one file per key under `<data_dir>/activity-signup/`
//!
//! API base URL, when `client.toml` does not name one:
//! - **Web**: the origin the page was served from
//! - **Desktop**: [`NATIVE_DEFAULT_BASE_URL`]

use api::{ApiError, HttpClient};
use store::{ClientConfig, KeyValueStore};

/// Where a locally started activities server listens.
pub const NATIVE_DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Directory name used under the platform data and config dirs.
pub const APP_DIR: &str = "activity-signup";

/// Create the platform-appropriate session backend.
pub fn make_session_backend() -> Box<dyn KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Box::new(store::LocalStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(APP_DIR);
        Box::new(store::FileStore::new(base))
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        tracing::warn!("no persistent storage on this target, session lasts until reload");
        Box::new(store::MemoryStore::new())
    }
}

/// The base URL used when the config leaves it unset.
pub fn default_base_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_else(|| NATIVE_DEFAULT_BASE_URL.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        NATIVE_DEFAULT_BASE_URL.to_string()
    }
}

/// Build the HTTP client for `config`.
pub fn make_api_client(config: &ClientConfig) -> Result<HttpClient, ApiError> {
    let base_url = config
        .api
        .base_url
        .clone()
        .unwrap_or_else(default_base_url);
    tracing::debug!(%base_url, "using activities API");
    HttpClient::new(&base_url)
}
