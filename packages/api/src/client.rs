//! # HTTP client for the activities API
//!
//! [`HttpClient`] implements [`ActivitiesApi`] over `reqwest`. It runs natively
//! (rustls) and in the browser (fetch), so the same client serves every shell.
//!
//! URLs are built with [`reqwest::Url`]: path segments such as activity names
//! are percent-encoded segment by segment and query values are form-encoded,
//! so `"Chess Club"` and `"a@x.com"` travel as `Chess%20Club` and `a%40x.com`.
//!
//! Every method performs exactly one request. There is no retry and no timeout
//! beyond what the transport imposes.

use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{
    ActivityCatalog, ApiMessage, ErrorBody, LoginRequest, LoginResponse, SessionStatus,
};
use crate::ActivitiesApi;

/// Query parameter carrying the session credential.
pub const SESSION_TOKEN_PARAM: &str = "session_token";

#[derive(Clone, Debug)]
pub struct HttpClient {
    base_url: Url,
    http: reqwest::Client,
}

impl HttpClient {
    /// Create a client for an absolute `http(s)://` base URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.base_url.clone();
        // Base URLs are validated to be hierarchical, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn activities_url(&self) -> Url {
        self.endpoint(["activities"])
    }

    pub fn signup_url(&self, activity: &str, email: &str, token: &str) -> Url {
        let mut url = self.endpoint(["activities", activity, "signup"]);
        url.query_pairs_mut()
            .append_pair("email", email)
            .append_pair(SESSION_TOKEN_PARAM, token);
        url
    }

    pub fn unregister_url(&self, activity: &str, email: &str, token: &str) -> Url {
        let mut url = self.endpoint(["activities", activity, "unregister"]);
        url.query_pairs_mut()
            .append_pair("email", email)
            .append_pair(SESSION_TOKEN_PARAM, token);
        url
    }

    pub fn login_url(&self) -> Url {
        self.endpoint(["login"])
    }

    pub fn logout_url(&self, token: &str) -> Url {
        let mut url = self.endpoint(["logout"]);
        url.query_pairs_mut().append_pair(SESSION_TOKEN_PARAM, token);
        url
    }

    pub fn verify_session_url(&self, token: &str) -> Url {
        let mut url = self.endpoint(["verify_session"]);
        url.query_pairs_mut().append_pair(SESSION_TOKEN_PARAM, token);
        url
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode_json_response(response).await
    }
}

impl ActivitiesApi for HttpClient {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        let url = self.activities_url();
        tracing::debug!(%url, "fetching activities");
        self.send(self.http.get(url)).await
    }

    async fn signup(&self, activity: &str, email: &str, token: &str) -> Result<ApiMessage, ApiError> {
        tracing::debug!(activity, email, "signing up participant");
        self.send(self.http.post(self.signup_url(activity, email, token)))
            .await
    }

    async fn unregister(
        &self,
        activity: &str,
        email: &str,
        token: &str,
    ) -> Result<ApiMessage, ApiError> {
        tracing::debug!(activity, email, "unregistering participant");
        self.send(self.http.delete(self.unregister_url(activity, email, token)))
            .await
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        tracing::debug!(email, "logging in");
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.send(self.http.post(self.login_url()).json(&body)).await
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.logout_url(token))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Rejected {
                status: status.as_u16(),
                detail: None,
            })
        }
    }

    async fn verify_session(&self, token: &str) -> Result<SessionStatus, ApiError> {
        self.send(self.http.get(self.verify_session_url(token)))
            .await
    }
}

fn normalize_base_url(raw: &str) -> Result<Url, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidBaseUrl(raw.to_string()));
    }
    let url = Url::parse(trimmed).map_err(|_| ApiError::InvalidBaseUrl(raw.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ApiError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(url)
}

async fn decode_json_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !status.is_success() {
        let body: ErrorBody =
            serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))?;
        return Err(ApiError::Rejected {
            status: status.as_u16(),
            detail: body.detail_text(),
        });
    }

    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HttpClient {
        HttpClient::new("http://localhost:8000").expect("valid base url")
    }

    #[test]
    fn test_signup_url_encodes_name_and_email() {
        let url = client().signup_url("Chess Club", "a@x.com", "tok1");
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/activities/Chess%20Club/signup?email=a%40x.com&session_token=tok1"
        );
    }

    #[test]
    fn test_unregister_url_encodes_reserved_characters() {
        let url = client().unregister_url("Art/Design & Co", "a+b@x.com", "tok1");
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/activities/Art%2FDesign%20&%20Co/unregister?email=a%2Bb%40x.com&session_token=tok1"
        );
    }

    #[test]
    fn test_base_path_is_kept() {
        let client = HttpClient::new(" https://school.example/api/ ").unwrap();
        assert_eq!(
            client.activities_url().as_str(),
            "https://school.example/api/activities"
        );
        assert_eq!(
            client.logout_url("tok1").as_str(),
            "https://school.example/api/logout?session_token=tok1"
        );
    }

    #[test]
    fn test_fixed_endpoints() {
        let client = client();
        assert_eq!(client.activities_url().as_str(), "http://localhost:8000/activities");
        assert_eq!(client.login_url().as_str(), "http://localhost:8000/login");
        assert_eq!(
            client.verify_session_url("tok1").as_str(),
            "http://localhost:8000/verify_session?session_token=tok1"
        );
    }

    #[test]
    fn test_invalid_base_urls_are_rejected() {
        for raw in ["", "   ", "localhost:8000", "ftp://school.example", "mailto:a@x.com"] {
            assert!(
                matches!(HttpClient::new(raw), Err(ApiError::InvalidBaseUrl(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_transport_error() {
        // Port 9 (discard) on localhost is closed on test machines.
        let client = HttpClient::new("http://127.0.0.1:9").unwrap();
        let err = client.fetch_activities().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
