//! # API crate: the client side of the activities service
//!
//! Everything the UI needs to talk to the activities server, and nothing about
//! how it renders.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire types: the ordered [`ActivityCatalog`], login bodies, success/error bodies |
//! | [`client`] | [`HttpClient`], the `reqwest` implementation of [`ActivitiesApi`], and URL construction |
//! | [`error`] | [`ApiError`] and the transport-vs-rejection split |
//!
//! ## Endpoints
//!
//! | Method & path | Credential | Method on [`ActivitiesApi`] |
//! |---------------|------------|-----------------------------|
//! | `GET /activities` | none | `fetch_activities` |
//! | `POST /activities/{name}/signup?email=&session_token=` | token | `signup` |
//! | `DELETE /activities/{name}/unregister?email=&session_token=` | token | `unregister` |
//! | `POST /login` (JSON body) | none | `login` |
//! | `POST /logout?session_token=` | token | `logout` |
//! | `GET /verify_session?session_token=` | token | `verify_session` |

use std::future::Future;

pub mod client;
pub mod error;
pub mod models;

pub use client::HttpClient;
pub use error::ApiError;
pub use models::{
    Activity, ActivityCatalog, ApiMessage, ErrorBody, LoginRequest, LoginResponse, SessionStatus,
};

/// Async interface to the activities server.
///
/// Futures are not required to be `Send`: the client runs on a single UI
/// event loop, including in the browser.
pub trait ActivitiesApi {
    fn fetch_activities(&self) -> impl Future<Output = Result<ActivityCatalog, ApiError>>;
    fn signup(
        &self,
        activity: &str,
        email: &str,
        token: &str,
    ) -> impl Future<Output = Result<ApiMessage, ApiError>>;
    fn unregister(
        &self,
        activity: &str,
        email: &str,
        token: &str,
    ) -> impl Future<Output = Result<ApiMessage, ApiError>>;
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<LoginResponse, ApiError>>;
    fn logout(&self, token: &str) -> impl Future<Output = Result<(), ApiError>>;
    fn verify_session(&self, token: &str) -> impl Future<Output = Result<SessionStatus, ApiError>>;
}

impl<T: ActivitiesApi + ?Sized> ActivitiesApi for &T {
    fn fetch_activities(&self) -> impl Future<Output = Result<ActivityCatalog, ApiError>> {
        (**self).fetch_activities()
    }

    fn signup(
        &self,
        activity: &str,
        email: &str,
        token: &str,
    ) -> impl Future<Output = Result<ApiMessage, ApiError>> {
        (**self).signup(activity, email, token)
    }

    fn unregister(
        &self,
        activity: &str,
        email: &str,
        token: &str,
    ) -> impl Future<Output = Result<ApiMessage, ApiError>> {
        (**self).unregister(activity, email, token)
    }

    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<LoginResponse, ApiError>> {
        (**self).login(email, password)
    }

    fn logout(&self, token: &str) -> impl Future<Output = Result<(), ApiError>> {
        (**self).logout(token)
    }

    fn verify_session(&self, token: &str) -> impl Future<Output = Result<SessionStatus, ApiError>> {
        (**self).verify_session(token)
    }
}
