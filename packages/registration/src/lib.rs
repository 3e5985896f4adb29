//! # Registration core
//!
//! Platform-free logic behind the create, view and edit pages. Nothing here
//! touches the DOM or the network directly; the UI drives [`FormState`] and
//! the HTTP client implements [`UserApi`].
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Records returned by the API, transient [`FormValues`], the [`Field`] list |
//! | [`schema`] | Declarative validation table and its evaluator |
//! | [`payload`] | Multipart part layout for a submission |
//! | [`submission`] | [`UserApi`] seam, error types and error-to-feedback translation |
//! | [`form`] | The form state controller |
//! | [`page`] | Page load states and navigation destinations |

pub mod form;
pub mod models;
pub mod page;
pub mod payload;
pub mod schema;
pub mod submission;

mod memory;
pub use memory::{MemoryApi, Method, RecordedRequest};

pub use form::{FormState, Phase, SubmitBlocked, SubmitOutcome};
pub use models::{AddressRecord, Field, FieldKind, FileUpload, FormValues, UserId, UserRecord};
pub use page::{Destination, EditStage, Load, USER_NOT_FOUND};
pub use payload::{Part, PartBody};
pub use schema::{validate, ErrorKind, FieldError, FieldErrors, Mode};
pub use submission::{
    Feedback, FetchError, PendingSubmission, ServerError, SubmitError, SubmitSuccess, Target,
    UserApi, GENERIC_ERROR,
};
