//! # Wire models for the activities API
//!
//! | Type | Endpoint |
//! |------|----------|
//! | [`ActivityCatalog`] / [`Activity`] | `GET /activities` (a JSON object keyed by activity name) |
//! | [`LoginRequest`] / [`LoginResponse`] | `POST /login` |
//! | [`ApiMessage`] | success body of signup/unregister |
//! | [`ErrorBody`] | failure body of every endpoint (`{"detail": ...}`) |
//! | [`SessionStatus`] | `GET /verify_session` |
//!
//! The catalog keeps the server's key order: it is an [`IndexMap`], which
//! deserializes a JSON object entry by entry in document order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One activity as served by `GET /activities`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Free places as reported by the server. Negative when the server is
    /// over capacity; the client does not clamp.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Full activity catalog in server order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityCatalog(IndexMap<String, Activity>);

impl ActivityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to append an activity.
    pub fn with(mut self, name: impl Into<String>, activity: Activity) -> Self {
        self.insert(name, activity);
        self
    }

    /// Insert or replace an activity, keeping the position of an existing key.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        self.0.insert(name.into(), activity);
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.0.get_mut(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.0.iter().map(|(name, activity)| (name.as_str(), activity))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Success body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub session_token: String,
    pub email: String,
}

/// Success body of the participant endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Failure body. `detail` is usually a string but validation errors send a
/// list, so it is kept as raw JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The human-readable detail, when the server sent one as a string.
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

/// Body of `GET /verify_session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
    pub valid: bool,
    #[serde(default)]
    pub email: Option<String>,
}
