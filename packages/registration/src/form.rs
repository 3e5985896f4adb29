//! # Form state controller
//!
//! [`FormState`] owns one form session: the values, the errors on display,
//! and where the session is in its submit cycle:
//!
//! ```text
//! Idle ──submit──▶ Validating ──invalid──▶ Idle (field errors set)
//!                      │
//!                    valid
//!                      ▼
//!                 Submitting ──done──▶ Idle
//! ```
//!
//! Submitting is split into [`begin_submit`](FormState::begin_submit) and
//! [`finish_submit`](FormState::finish_submit) so a UI holding the state in
//! a signal does not keep it borrowed across the request.
//! [`submit`](FormState::submit) runs the whole cycle in one call.

use crate::models::{Field, FileUpload, FormValues};
use crate::page::Destination;
use crate::schema::{validate, FieldErrors, Mode};
use crate::submission::{
    Feedback, PendingSubmission, SubmitError, SubmitSuccess, Target, UserApi,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Submitting,
}

/// Why [`FormState::begin_submit`] did not produce a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("{0} fields failed validation")]
    Invalid(usize),
}

/// Result of a whole submit cycle.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Saved; go here next.
    Navigate(Destination),
    /// Stopped before the network; errors are on the form.
    Blocked(SubmitBlocked),
    /// The server or network refused; errors are on the form.
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    target: Target,
    values: FormValues,
    field_errors: FieldErrors,
    general_error: Option<String>,
    phase: Phase,
}

impl FormState {
    pub fn new(target: Target, values: FormValues) -> Self {
        Self {
            target,
            values,
            field_errors: FieldErrors::new(),
            general_error: None,
            phase: Phase::Idle,
        }
    }

    /// Empty form for a new user.
    pub fn create() -> Self {
        Self::new(Target::Create, FormValues::default())
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn mode(&self) -> Mode {
        self.target.mode()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Update one text field. Validation waits for the next submit.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if !self.values.set_text(field, value) {
            tracing::warn!(%field, "ignoring text value for file field");
        }
    }

    /// Attach, replace or clear one upload.
    pub fn set_file(&mut self, field: Field, file: Option<FileUpload>) {
        if !self.values.set_file(field, file) {
            tracing::warn!(%field, "ignoring file for text field");
        }
    }

    /// A file picker changed. An empty selection clears the upload when
    /// creating; when editing it keeps whatever was picked before.
    pub fn pick_file(&mut self, field: Field, file: Option<FileUpload>) {
        if file.is_none() && self.mode() == Mode::Edit {
            return;
        }
        self.set_file(field, file);
    }

    /// Replace every value, e.g. once the record being edited has loaded.
    pub fn reinitialize(&mut self, values: FormValues) {
        self.values = values;
        self.field_errors.clear();
        self.general_error = None;
    }

    /// Back to empty values for the current target.
    pub fn reset(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.reinitialize(FormValues::default());
    }

    /// Validate and, if the values are acceptable, move to `Submitting` and
    /// hand back the request to send.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::InFlight);
        }

        self.phase = Phase::Validating;
        self.general_error = None;
        match validate(&self.values, self.mode()) {
            Ok(()) => {
                self.field_errors.clear();
                self.phase = Phase::Submitting;
                Ok(PendingSubmission::new(self.target, &self.values))
            }
            Err(errors) => {
                let count = errors.len();
                self.field_errors = errors;
                self.phase = Phase::Idle;
                Err(SubmitBlocked::Invalid(count))
            }
        }
    }

    /// Record the result of the request started by `begin_submit`.
    /// Returns where to go on success; on failure the errors are on the form
    /// and the values are kept for a manual retry.
    pub fn finish_submit(
        &mut self,
        result: Result<SubmitSuccess, SubmitError>,
    ) -> Option<Destination> {
        self.phase = Phase::Idle;
        match result {
            Ok(success) => Some(Destination::View(success.id())),
            Err(err) => {
                tracing::warn!(error = %err, "submission failed");
                let feedback = Feedback::from(err);
                self.field_errors.merge(feedback.field_errors);
                self.general_error = feedback.general;
                None
            }
        }
    }

    /// Run a whole submit cycle against `api`.
    pub async fn submit<A: UserApi>(&mut self, api: &A) -> SubmitOutcome {
        let pending = match self.begin_submit() {
            Ok(pending) => pending,
            Err(blocked) => return SubmitOutcome::Blocked(blocked),
        };
        let result = pending.send(api).await;
        match self.finish_submit(result) {
            Some(destination) => SubmitOutcome::Navigate(destination),
            None => SubmitOutcome::Failed,
        }
    }
}
