//! # Activity list: fetch, render, and the teacher-gated participant actions
//!
//! [`ActivityView`] owns what the activity list shows. A refresh is split in
//! two so the page never holds the view across a network call:
//!
//! ```text
//! begin_refresh()  ── ticket ──►  api.fetch_activities().await  ──►  finish_refresh(ticket, result)
//! ```
//!
//! Every refresh is a full redraw: the cards and the signup selector options
//! are rebuilt from the fetched catalog, never patched. Only the most recently
//! issued refresh may apply its result; an older response arriving late is
//! dropped.
//!
//! [`ActivityView::handle_signup`] and [`ActivityView::handle_removal`] check
//! the session credential before anything else. Without one they answer with
//! the "must be logged in" message and send no request.

use api::{ActivitiesApi, ActivityCatalog, ApiError, ApiMessage};

use crate::effect::Effect;
use crate::message::UiMessage;

pub const NO_PARTICIPANTS: &str = "No participants yet";
pub const SCHEDULE_LABEL: &str = "Schedule:";
pub const AVAILABILITY_LABEL: &str = "Availability:";
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";
pub const GENERIC_REJECTION: &str = "An error occurred";

pub const SIGNUP_REQUIRES_LOGIN: &str = "You must be logged in as a teacher to register students.";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const REMOVAL_REQUIRES_LOGIN: &str =
    "You must be logged in as a teacher to unregister students.";
pub const REMOVAL_FAILED: &str = "Failed to unregister. Please try again.";

/// A participant line with its removal control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantRow {
    pub activity: String,
    pub email: String,
}

/// Everything one activity card displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

impl ActivityCard {
    pub fn new(name: &str, activity: &api::Activity) -> Self {
        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants: activity
                .participants
                .iter()
                .map(|email| ParticipantRow {
                    activity: name.to_string(),
                    email: email.clone(),
                })
                .collect(),
        }
    }

    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }

    pub fn has_participants(&self) -> bool {
        !self.participants.is_empty()
    }

    /// Shown instead of the participant list when nobody has signed up.
    pub fn placeholder(&self) -> Option<&'static str> {
        (!self.has_participants()).then_some(NO_PARTICIPANTS)
    }
}

/// What the list area currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListContent {
    /// Nothing fetched yet.
    #[default]
    Loading,
    Rendered(Vec<ActivityCard>),
    FetchFailed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefreshTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    Rendered,
    Failed,
    /// A newer refresh was issued; this result was dropped.
    Superseded,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityView {
    content: ListContent,
    options: Vec<String>,
    issued: u64,
    applied: u64,
}

impl ActivityView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &ListContent {
        &self.content
    }

    /// Activity names offered by the signup selector.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// True while the latest issued refresh has not been applied.
    pub fn is_fetching(&self) -> bool {
        self.applied < self.issued
    }

    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued += 1;
        RefreshTicket(self.issued)
    }

    pub fn finish_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<ActivityCatalog, ApiError>,
    ) -> RefreshOutcome {
        if ticket.0 != self.issued {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.issued,
                "dropping superseded activities response"
            );
            return RefreshOutcome::Superseded;
        }
        self.applied = ticket.0;

        match result {
            Ok(catalog) => {
                self.content = ListContent::Rendered(render(&catalog));
                self.options = catalog.iter().map(|(name, _)| name.to_string()).collect();
                RefreshOutcome::Rendered
            }
            Err(e) => {
                tracing::error!("Error fetching activities: {e}");
                self.content = ListContent::FetchFailed;
                RefreshOutcome::Failed
            }
        }
    }

    /// Fetch and apply in one go.
    pub async fn refresh<A: ActivitiesApi>(&mut self, api: &A) -> RefreshOutcome {
        let ticket = self.begin_refresh();
        let result = api.fetch_activities().await;
        self.finish_refresh(ticket, result)
    }

    /// Register `email` for `activity` on behalf of the logged-in teacher.
    pub async fn handle_signup<A: ActivitiesApi>(
        api: &A,
        credential: Option<&str>,
        email: &str,
        activity: &str,
    ) -> Vec<Effect> {
        let Some(token) = credential else {
            return vec![Effect::Message(UiMessage::error(SIGNUP_REQUIRES_LOGIN))];
        };

        match api.signup(activity, email, token).await {
            Ok(ApiMessage { message }) => vec![
                Effect::Message(UiMessage::success(message)),
                Effect::ResetSignupForm,
                Effect::RefreshActivities,
            ],
            Err(e) => vec![Effect::Message(failure_message(e, SIGNUP_FAILED, "signing up"))],
        }
    }

    /// Remove `email` from `activity` on behalf of the logged-in teacher.
    pub async fn handle_removal<A: ActivitiesApi>(
        api: &A,
        credential: Option<&str>,
        activity: &str,
        email: &str,
    ) -> Vec<Effect> {
        let Some(token) = credential else {
            return vec![Effect::Message(UiMessage::error(REMOVAL_REQUIRES_LOGIN))];
        };

        match api.unregister(activity, email, token).await {
            Ok(ApiMessage { message }) => vec![
                Effect::Message(UiMessage::success(message)),
                Effect::RefreshActivities,
            ],
            Err(e) => vec![Effect::Message(failure_message(e, REMOVAL_FAILED, "unregistering"))],
        }
    }
}

/// Cards for every activity, in catalog order.
pub fn render(catalog: &ActivityCatalog) -> Vec<ActivityCard> {
    catalog
        .iter()
        .map(|(name, activity)| ActivityCard::new(name, activity))
        .collect()
}

fn failure_message(error: ApiError, transport_text: &str, action: &str) -> UiMessage {
    if error.is_rejection() {
        UiMessage::error(error.detail().unwrap_or(GENERIC_REJECTION))
    } else {
        tracing::error!("Error {action}: {error}");
        UiMessage::error(transport_text)
    }
}
