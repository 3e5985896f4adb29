//! # Submission adapter
//!
//! [`UserApi`] is the seam between form logic and the network. The HTTP
//! implementation lives in the `api` package; [`crate::MemoryApi`] stands in
//! for the server in tests.
//!
//! A submission is one request: `create_user` for a new record,
//! `update_user` for an existing one. Whatever comes back is turned into
//! either a [`SubmitSuccess`] or a [`Feedback`] the form can display, so a
//! submit never ends without a visible result.

use serde::{Deserialize, Serialize};

use crate::models::{Field, FormValues, UserId, UserRecord};
use crate::payload::{multipart_parts, Part};
use crate::schema::{ErrorKind, FieldError, FieldErrors, Mode};

/// Message shown when the server's answer can't be attributed to anything.
pub const GENERIC_ERROR: &str = "Something went wrong";

/// Remote user storage.
pub trait UserApi {
    /// `POST /api/users`; resolves to the id the server assigned.
    fn create_user(
        &self,
        parts: Vec<Part>,
    ) -> impl std::future::Future<Output = Result<UserId, SubmitError>>;
    /// `PUT /api/users/{id}`.
    fn update_user(
        &self,
        id: UserId,
        parts: Vec<Part>,
    ) -> impl std::future::Future<Output = Result<(), SubmitError>>;
    /// `GET /api/users/{id}`.
    fn fetch_user(
        &self,
        id: UserId,
    ) -> impl std::future::Future<Output = Result<UserRecord, FetchError>>;
}

/// Where a submission goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Create,
    Update(UserId),
}

impl Target {
    pub fn mode(self) -> Mode {
        match self {
            Target::Create => Mode::Create,
            Target::Update(_) => Mode::Edit,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitSuccess {
    Created(UserId),
    Updated(UserId),
}

impl SubmitSuccess {
    pub fn id(self) -> UserId {
        match self {
            SubmitSuccess::Created(id) | SubmitSuccess::Updated(id) => id,
        }
    }
}

/// One entry of the server's `errors` list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    pub msg: String,
}

impl ServerError {
    pub fn field(param: &str, msg: &str) -> Self {
        Self {
            param: Some(param.to_string()),
            msg: msg.to_string(),
        }
    }

    pub fn general(msg: &str) -> Self {
        Self {
            param: None,
            msg: msg.to_string(),
        }
    }
}

/// Error body shape shared by create and update.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Option<Vec<ServerError>>,
}

impl ErrorBody {
    /// Parse a failure body. `None` when it isn't the structured shape.
    pub fn parse(body: &str) -> Option<Vec<ServerError>> {
        serde_json::from_str::<ErrorBody>(body).ok()?.errors
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    /// The server answered with a structured error list.
    #[error("rejected by server ({} errors)", .0.len())]
    Rejected(Vec<ServerError>),
    /// Transport failure, unexpected status or undecodable body.
    #[error("submission failed: {0}")]
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("user not found")]
    NotFound,
    #[error("fetch failed: {0}")]
    Failed(String),
}

/// What a failed submission shows: messages under fields plus an optional
/// page-level banner. Never empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Feedback {
    pub field_errors: FieldErrors,
    pub general: Option<String>,
}

impl From<SubmitError> for Feedback {
    fn from(err: SubmitError) -> Self {
        let SubmitError::Rejected(entries) = err else {
            return Feedback {
                field_errors: FieldErrors::new(),
                general: Some(GENERIC_ERROR.to_string()),
            };
        };

        let mut field_errors = FieldErrors::new();
        let mut general = Vec::new();
        for entry in entries {
            match entry.param.as_deref().and_then(Field::from_key) {
                Some(field) => field_errors.insert(
                    field,
                    FieldError {
                        kind: ErrorKind::Server,
                        message: entry.msg,
                    },
                ),
                None => general.push(entry.msg),
            }
        }

        let general = if general.is_empty() {
            None
        } else {
            Some(general.join("; "))
        };
        if field_errors.is_empty() && general.is_none() {
            return Feedback {
                field_errors,
                general: Some(GENERIC_ERROR.to_string()),
            };
        }
        Feedback {
            field_errors,
            general,
        }
    }
}

/// A validated submission, detached from the form that produced it so the
/// form can be released while the request is in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingSubmission {
    pub target: Target,
    pub parts: Vec<Part>,
}

impl PendingSubmission {
    pub fn new(target: Target, values: &FormValues) -> Self {
        Self {
            target,
            parts: multipart_parts(values),
        }
    }

    /// Perform the single network exchange for this submission.
    pub async fn send<A: UserApi>(self, api: &A) -> Result<SubmitSuccess, SubmitError> {
        tracing::debug!(destination = ?self.target, parts = self.parts.len(), "submitting user");
        match self.target {
            Target::Create => api.create_user(self.parts).await.map(SubmitSuccess::Created),
            Target::Update(id) => api
                .update_user(id, self.parts)
                .await
                .map(|()| SubmitSuccess::Updated(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_entries_map_to_fields() {
        let feedback = Feedback::from(SubmitError::Rejected(vec![ServerError::field(
            "email",
            "Email already in use",
        )]));
        assert_eq!(
            feedback.field_errors.message(Field::Email),
            Some("Email already in use")
        );
        assert_eq!(feedback.field_errors.len(), 1);
        assert_eq!(feedback.general, None);
    }

    #[test]
    fn test_general_entries_are_joined() {
        let feedback = Feedback::from(SubmitError::Rejected(vec![
            ServerError::general("Upload too large"),
            ServerError::field("homeZip", "Home zip must be 6 digits"),
            ServerError::field("nickname", "Nickname is taken"),
        ]));
        assert_eq!(
            feedback.general.as_deref(),
            Some("Upload too large; Nickname is taken")
        );
        assert_eq!(
            feedback.field_errors.get(Field::HomeZip).map(|e| e.kind),
            Some(ErrorKind::Server)
        );
    }

    #[test]
    fn test_unstructured_failures_are_generic() {
        for err in [
            SubmitError::Failed("connection refused".to_string()),
            SubmitError::Rejected(Vec::new()),
        ] {
            let feedback = Feedback::from(err);
            assert!(feedback.field_errors.is_empty());
            assert_eq!(feedback.general.as_deref(), Some(GENERIC_ERROR));
        }
    }

    #[test]
    fn test_error_body_parse() {
        let body = r#"{"errors":[{"param":"email","msg":"Email already in use"},{"msg":"Bad"}]}"#;
        assert_eq!(
            ErrorBody::parse(body),
            Some(vec![
                ServerError::field("email", "Email already in use"),
                ServerError::general("Bad"),
            ])
        );
        assert_eq!(ErrorBody::parse(r#"{"message":"Internal error"}"#), None);
        assert_eq!(ErrorBody::parse("<html>502</html>"), None);
    }

    #[test]
    fn test_target_mode() {
        assert_eq!(Target::Create.mode(), Mode::Create);
        assert_eq!(Target::Update(UserId(3)).mode(), Mode::Edit);
    }
}
