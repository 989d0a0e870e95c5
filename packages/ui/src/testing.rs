//! In-process stand-in for the activities server, used by the controller
//! tests. It follows the server's rules (teacher credentials, session tokens,
//! duplicate and missing participants) and records every request it receives.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use api::{
    ActivitiesApi, Activity, ActivityCatalog, ApiError, ApiMessage, LoginResponse, SessionStatus,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    FetchActivities,
    Signup {
        activity: String,
        email: String,
        token: String,
    },
    Unregister {
        activity: String,
        email: String,
        token: String,
    },
    Login {
        email: String,
    },
    Logout {
        token: String,
    },
    VerifySession {
        token: String,
    },
}

#[derive(Default)]
pub struct FakeApi {
    catalog: RefCell<ActivityCatalog>,
    teachers: RefCell<HashMap<String, String>>,
    sessions: RefCell<HashMap<String, String>>,
    requests: RefCell<Vec<Request>>,
    offline: Cell<bool>,
    reject_next: Cell<bool>,
    tokens_issued: Cell<u32>,
}

/// `"Chess Club"`, 10 places, `a@x.com` and `b@x.com` signed up.
pub fn chess_club_catalog() -> ActivityCatalog {
    ActivityCatalog::new().with(
        "Chess Club",
        Activity {
            description: "Learn strategies and compete in chess tournaments".to_string(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: 10,
            participants: vec!["a@x.com".to_string(), "b@x.com".to_string()],
        },
    )
}

fn rejected(status: u16, detail: &str) -> ApiError {
    ApiError::Rejected {
        status,
        detail: Some(detail.to_string()),
    }
}

impl FakeApi {
    pub fn with_catalog(catalog: ActivityCatalog) -> Self {
        Self {
            catalog: RefCell::new(catalog),
            ..Self::default()
        }
    }

    /// A server that cannot be reached.
    pub fn offline() -> Self {
        let api = Self::default();
        api.offline.set(true);
        api
    }

    pub fn with_teacher(self, email: &str, password: &str) -> Self {
        self.teachers
            .borrow_mut()
            .insert(email.to_string(), password.to_string());
        self
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    /// The next request is answered with a bare 500.
    pub fn reject_next_without_detail(&self) {
        self.reject_next.set(true);
    }

    /// Open a server-side session, as a successful login would.
    pub fn issue_token(&self, email: &str) -> String {
        let n = self.tokens_issued.get() + 1;
        self.tokens_issued.set(n);
        let token = format!("tok{n}");
        self.sessions
            .borrow_mut()
            .insert(token.clone(), email.to_string());
        token
    }

    /// Forget every server-side session, as a server restart would.
    pub fn drop_sessions(&self) {
        self.sessions.borrow_mut().clear();
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    fn receive(&self, request: Request) -> Result<(), ApiError> {
        self.requests.borrow_mut().push(request);
        if self.offline.get() {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        if self.reject_next.replace(false) {
            return Err(ApiError::Rejected {
                status: 500,
                detail: None,
            });
        }
        Ok(())
    }

    fn check_session(&self, token: &str, action: &str) -> Result<(), ApiError> {
        if self.sessions.borrow().contains_key(token) {
            Ok(())
        } else {
            Err(rejected(
                401,
                &format!("Authentication required. Only teachers can {action} students."),
            ))
        }
    }
}

impl ActivitiesApi for FakeApi {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        self.receive(Request::FetchActivities)?;
        Ok(self.catalog.borrow().clone())
    }

    async fn signup(&self, activity: &str, email: &str, token: &str) -> Result<ApiMessage, ApiError> {
        self.receive(Request::Signup {
            activity: activity.to_string(),
            email: email.to_string(),
            token: token.to_string(),
        })?;
        self.check_session(token, "register")?;

        let mut catalog = self.catalog.borrow_mut();
        let entry = catalog
            .get_mut(activity)
            .ok_or_else(|| rejected(404, "Activity not found"))?;
        if entry.participants.iter().any(|p| p == email) {
            return Err(rejected(400, "Student is already signed up"));
        }
        entry.participants.push(email.to_string());
        Ok(ApiMessage {
            message: format!("Signed up {email} for {activity}"),
        })
    }

    async fn unregister(
        &self,
        activity: &str,
        email: &str,
        token: &str,
    ) -> Result<ApiMessage, ApiError> {
        self.receive(Request::Unregister {
            activity: activity.to_string(),
            email: email.to_string(),
            token: token.to_string(),
        })?;
        self.check_session(token, "unregister")?;

        let mut catalog = self.catalog.borrow_mut();
        let entry = catalog
            .get_mut(activity)
            .ok_or_else(|| rejected(404, "Activity not found"))?;
        let Some(index) = entry.participants.iter().position(|p| p == email) else {
            return Err(rejected(400, "Student is not signed up for this activity"));
        };
        entry.participants.remove(index);
        Ok(ApiMessage {
            message: format!("Unregistered {email} from {activity}"),
        })
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.receive(Request::Login {
            email: email.to_string(),
        })?;
        let valid = self
            .teachers
            .borrow()
            .get(email)
            .is_some_and(|expected| expected == password);
        if !valid {
            return Err(rejected(401, "Invalid credentials"));
        }
        Ok(LoginResponse {
            session_token: self.issue_token(email),
            email: email.to_string(),
        })
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        self.receive(Request::Logout {
            token: token.to_string(),
        })?;
        self.sessions.borrow_mut().remove(token);
        Ok(())
    }

    async fn verify_session(&self, token: &str) -> Result<SessionStatus, ApiError> {
        self.receive(Request::VerifySession {
            token: token.to_string(),
        })?;
        let email = self.sessions.borrow().get(token).cloned();
        Ok(SessionStatus {
            valid: email.is_some(),
            email,
        })
    }
}
