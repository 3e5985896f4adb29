//! Page-level state: what a page is showing and where it sends the user.

use crate::form::FormState;
use crate::models::{FormValues, UserId, UserRecord};
use crate::submission::{FetchError, Target, UserApi};

/// A page the app can navigate to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Create,
    View(UserId),
    Edit(UserId),
}

impl Destination {
    pub fn path(self) -> String {
        match self {
            Destination::Create => "/".to_string(),
            Destination::View(id) => format!("/view/{id}"),
            Destination::Edit(id) => format!("/edit/{id}"),
        }
    }
}

/// Notice shown when the record behind a view or edit page is missing.
pub const USER_NOT_FOUND: &str = "User not found";

/// A record fetched on mount.
#[derive(Clone, Debug, PartialEq)]
pub enum Load<T> {
    Loading,
    Ready(T),
    NotFound,
}

impl<T> Load<T> {
    /// Notice to raise once when the load settles, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Load::NotFound => Some(USER_NOT_FOUND),
            _ => None,
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Load::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl Load<UserRecord> {
    /// Every fetch failure renders as not-found; the cause is only logged.
    pub fn from_fetch(id: UserId, result: Result<UserRecord, FetchError>) -> Self {
        match result {
            Ok(record) => Load::Ready(record),
            Err(FetchError::NotFound) => {
                tracing::info!(%id, "user not found");
                Load::NotFound
            }
            Err(err) => {
                tracing::error!(%id, error = %err, "failed to load user");
                Load::NotFound
            }
        }
    }

    /// Fetch `id` once, as the view page does on mount.
    pub async fn fetch<A: UserApi>(api: &A, id: UserId) -> Self {
        Self::from_fetch(id, api.fetch_user(id).await)
    }
}

/// Lifecycle of the edit page: the record loads once, its values are
/// handed to a form, and from then on the form owns them.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EditStage {
    #[default]
    Loading,
    Ready(FormValues),
    Editing(FormState),
    NotFound,
}

impl EditStage {
    pub fn from_fetch(id: UserId, result: Result<UserRecord, FetchError>) -> Self {
        match Load::from_fetch(id, result) {
            Load::Ready(record) => EditStage::Ready(FormValues::from_record(&record)),
            Load::Loading => EditStage::Loading,
            Load::NotFound => EditStage::NotFound,
        }
    }

    /// Move loaded values into a form targeting `id`. Any other stage is
    /// left as is.
    pub fn start_editing(self, id: UserId) -> Self {
        match self {
            EditStage::Ready(values) => {
                let mut form = FormState::new(Target::Update(id), FormValues::default());
                form.reinitialize(values);
                EditStage::Editing(form)
            }
            other => other,
        }
    }

    /// Fetch and hand off in one step.
    pub async fn load<A: UserApi>(api: &A, id: UserId) -> Self {
        Self::from_fetch(id, api.fetch_user(id).await).start_editing(id)
    }

    pub fn form(&self) -> Option<&FormState> {
        match self {
            EditStage::Editing(form) => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut FormState> {
        match self {
            EditStage::Editing(form) => Some(form),
            _ => None,
        }
    }
}
