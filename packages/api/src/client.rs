//! # HTTP client for the registration API
//!
//! [`HttpApi`] implements [`UserApi`] with `reqwest`, which runs on the
//! browser's `fetch` under wasm and on hyper natively.
//!
//! Each call is a single request. The raw status and body are handed to the
//! `interpret_*` functions, which own the response contract:
//!
//! | Call | Success | Failure |
//! |------|---------|---------|
//! | create | 2xx with `{"userId": n}` | `{"errors": [...]}` → [`SubmitError::Rejected`], anything else → [`SubmitError::Failed`] |
//! | update | any 2xx, body ignored | same as create |
//! | fetch | 2xx with a [`UserRecord`] | 404 → [`FetchError::NotFound`], anything else → [`FetchError::Failed`] |

use registration::{FetchError, Part, PartBody, SubmitError, UserApi, UserId, UserRecord};
use reqwest::multipart::{Form, Part as FormPart};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::ClientConfig;

/// Success body of `POST /api/users`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedResponse {
    user_id: UserId,
}

#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    config: ClientConfig,
}

impl PartialEq for HttpApi {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn send_form(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(StatusCode, String), SubmitError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, "submission request failed");
            SubmitError::Failed(e.to_string())
        })?;
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!(error = %e, %status, "failed to read submission response");
            SubmitError::Failed(e.to_string())
        })?;
        Ok((status, body))
    }
}

/// Convert submission parts into a `reqwest` multipart form.
///
/// An upload whose content type is not a valid MIME type fails the whole
/// submission rather than going out without that part.
pub fn to_form(parts: Vec<Part>) -> Result<Form, SubmitError> {
    parts.into_iter().try_fold(Form::new(), |form, part| match part.body {
        PartBody::Text(text) => Ok(form.text(part.name, text)),
        PartBody::File(file) => {
            let upload = FormPart::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.content_type)
                .map_err(|e| {
                    tracing::error!(error = %e, field = part.name, content_type = %file.content_type, "upload has unusable content type");
                    SubmitError::Failed(e.to_string())
                })?;
            Ok(form.part(part.name, upload))
        }
    })
}

fn rejected_or_failed(status: StatusCode, body: &str) -> SubmitError {
    match registration::submission::ErrorBody::parse(body) {
        Some(errors) => {
            tracing::warn!(%status, count = errors.len(), "submission rejected");
            SubmitError::Rejected(errors)
        }
        None => {
            tracing::error!(%status, "unexpected submission response");
            SubmitError::Failed(format!("unexpected response status {status}"))
        }
    }
}

pub fn interpret_create(status: StatusCode, body: &str) -> Result<UserId, SubmitError> {
    if !status.is_success() {
        return Err(rejected_or_failed(status, body));
    }
    serde_json::from_str::<CreatedResponse>(body)
        .map(|created| created.user_id)
        .map_err(|e| {
            tracing::error!(error = %e, "create response missing userId");
            SubmitError::Failed(e.to_string())
        })
}

pub fn interpret_update(status: StatusCode, body: &str) -> Result<(), SubmitError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(rejected_or_failed(status, body))
    }
}

pub fn interpret_fetch(status: StatusCode, body: &str) -> Result<UserRecord, FetchError> {
    if status == StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound);
    }
    if !status.is_success() {
        return Err(FetchError::Failed(format!("unexpected response status {status}")));
    }
    serde_json::from_str(body).map_err(|e| FetchError::Failed(e.to_string()))
}

impl UserApi for HttpApi {
    async fn create_user(&self, parts: Vec<Part>) -> Result<UserId, SubmitError> {
        let url = self.config.users_url();
        tracing::debug!(%url, "POST user");
        let request = self.client.post(&url).multipart(to_form(parts)?);
        let (status, body) = self.send_form(request).await?;
        interpret_create(status, &body)
    }

    async fn update_user(&self, id: UserId, parts: Vec<Part>) -> Result<(), SubmitError> {
        let url = self.config.user_url(id);
        tracing::debug!(%url, "PUT user");
        let request = self.client.put(&url).multipart(to_form(parts)?);
        let (status, body) = self.send_form(request).await?;
        interpret_update(status, &body)
    }

    async fn fetch_user(&self, id: UserId) -> Result<UserRecord, FetchError> {
        let url = self.config.user_url(id);
        tracing::debug!(%url, "GET user");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Failed(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Failed(e.to_string()))?;
        interpret_fetch(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registration::{Feedback, Field, ServerError, GENERIC_ERROR};

    #[test]
    fn test_create_success_extracts_id() {
        assert_eq!(
            interpret_create(StatusCode::CREATED, r#"{"userId": 42, "message": "ok"}"#),
            Ok(UserId(42))
        );
    }

    #[test]
    fn test_create_success_without_id_is_failure() {
        let err = interpret_create(StatusCode::OK, "{}").unwrap_err();
        assert!(matches!(err, SubmitError::Failed(_)));
        assert_eq!(Feedback::from(err).general.as_deref(), Some(GENERIC_ERROR));
    }

    #[test]
    fn test_create_structured_rejection() {
        let body = r#"{"errors":[{"param":"email","msg":"Email already in use"}]}"#;
        let err = interpret_create(StatusCode::BAD_REQUEST, body).unwrap_err();
        assert_eq!(
            err,
            SubmitError::Rejected(vec![ServerError::field("email", "Email already in use")])
        );
        let feedback = Feedback::from(err);
        assert_eq!(
            feedback.field_errors.message(Field::Email),
            Some("Email already in use")
        );
        assert_eq!(feedback.general, None);
    }

    #[test]
    fn test_unstructured_rejection_is_failure() {
        let err = interpret_update(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            .unwrap_err();
        assert!(matches!(err, SubmitError::Failed(_)));
    }

    #[test]
    fn test_update_ignores_body() {
        assert_eq!(interpret_update(StatusCode::OK, ""), Ok(()));
        assert_eq!(interpret_update(StatusCode::NO_CONTENT, "not json"), Ok(()));
    }

    #[test]
    fn test_fetch_not_found() {
        assert_eq!(
            interpret_fetch(StatusCode::NOT_FOUND, r#"{"message":"User not found"}"#),
            Err(FetchError::NotFound)
        );
        assert!(matches!(
            interpret_fetch(StatusCode::BAD_GATEWAY, ""),
            Err(FetchError::Failed(_))
        ));
        assert!(matches!(
            interpret_fetch(StatusCode::OK, "[]"),
            Err(FetchError::Failed(_))
        ));
    }

    #[test]
    fn test_fetch_decodes_record() {
        let body = r#"{
            "id": 5, "firstName": "Barbara", "lastName": "Liskov",
            "email": "barbara@mit.edu",
            "profilePhoto": "5-b.png", "appointmentLetter": "5-l.pdf",
            "address": {
                "id": 5,
                "companyAddress": "77 Mass Ave", "companyCity": "Cambridge",
                "companyState": "MA", "companyZip": "021390",
                "homeAddress": "1 Elm", "homeCity": "Boston",
                "homeState": "MA", "homeZip": "021080"
            }
        }"#;
        let record = interpret_fetch(StatusCode::OK, body).unwrap();
        assert_eq!(record.id, UserId(5));
        assert_eq!(record.address.company_zip, "021390");
    }

    fn upload_parts(content_type: &str) -> Vec<Part> {
        vec![
            Part {
                name: "firstName",
                body: PartBody::Text("Ada".to_string()),
            },
            Part {
                name: "profilePhoto",
                body: PartBody::File(registration::FileUpload::new(
                    "ada.png",
                    content_type,
                    vec![0x89, 0x50],
                )),
            },
        ]
    }

    #[test]
    fn test_padded_content_type_still_builds_form() {
        assert!(to_form(upload_parts(" image/png ")).is_ok());
    }

    #[test]
    fn test_unparseable_content_type_fails_submission() {
        let err = to_form(upload_parts("not a mime type")).unwrap_err();
        assert!(matches!(err, SubmitError::Failed(_)));
        assert_eq!(Feedback::from(err).general.as_deref(), Some(GENERIC_ERROR));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_generic_failure() {
        // Port 9 (discard) is not listening on test machines.
        let api = HttpApi::new(ClientConfig::new("http://127.0.0.1:9", "/uploads"));
        let err = api.create_user(Vec::new()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Failed(_)));
        assert_eq!(Feedback::from(err).general.as_deref(), Some(GENERIC_ERROR));
    }
}
