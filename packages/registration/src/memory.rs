use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::models::{AddressRecord, UserId, UserRecord};
use crate::payload::{find_part, Part, PartBody};
use crate::submission::{FetchError, SubmitError, UserApi};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// A request as [`MemoryApi`] received it.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<UserId, UserRecord>,
    next_id: i64,
    requests: Vec<RecordedRequest>,
    failures: VecDeque<SubmitError>,
}

/// In-memory [`UserApi`] for tests: stores users, records requests, and can
/// be told to fail upcoming submissions.
#[derive(Clone, Debug, Default)]
pub struct MemoryApi {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id handed to the next created user.
    pub fn set_next_id(&self, id: i64) {
        self.inner.lock().unwrap().next_id = id - 1;
    }

    /// Make the next create or update fail with `err`.
    pub fn fail_next(&self, err: SubmitError) {
        self.inner.lock().unwrap().failures.push_back(err);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    /// Store a user directly, bypassing request recording.
    pub fn insert(&self, parts: &[Part]) -> UserId {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = UserId(inner.next_id);
        let record = apply_parts(blank_record(id), parts);
        inner.users.insert(id, record);
        id
    }
}

fn blank_record(id: UserId) -> UserRecord {
    UserRecord {
        id,
        first_name: String::new(),
        last_name: String::new(),
        email: String::new(),
        profile_photo: String::new(),
        appointment_letter: String::new(),
        address: AddressRecord {
            id: id.0,
            ..AddressRecord::default()
        },
    }
}

/// Copy submitted parts onto a record the way the server stores them:
/// text verbatim, files under an id-prefixed stored name.
fn apply_parts(mut record: UserRecord, parts: &[Part]) -> UserRecord {
    let id = record.id;
    let text = |name: &str| match find_part(parts, name).map(|p| &p.body) {
        Some(PartBody::Text(value)) => Some(value.clone()),
        _ => None,
    };
    let stored = |name: &str| match find_part(parts, name).map(|p| &p.body) {
        Some(PartBody::File(file)) => Some(format!("{id}-{}", file.file_name)),
        _ => None,
    };

    let photo = stored("profilePhoto");
    let letter = stored("appointmentLetter");
    let set = |slot: &mut String, name: &str| {
        if let Some(value) = text(name) {
            *slot = value;
        }
    };

    set(&mut record.first_name, "firstName");
    set(&mut record.last_name, "lastName");
    set(&mut record.email, "email");
    let address = &mut record.address;
    set(&mut address.company_address, "companyAddress");
    set(&mut address.company_city, "companyCity");
    set(&mut address.company_state, "companyState");
    set(&mut address.company_zip, "companyZip");
    set(&mut address.home_address, "homeAddress");
    set(&mut address.home_city, "homeCity");
    set(&mut address.home_state, "homeState");
    set(&mut address.home_zip, "homeZip");
    if let Some(photo) = photo {
        record.profile_photo = photo;
    }
    if let Some(letter) = letter {
        record.appointment_letter = letter;
    }
    record
}

impl UserApi for MemoryApi {
    async fn create_user(&self, parts: Vec<Part>) -> Result<UserId, SubmitError> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(RecordedRequest {
            method: Method::Post,
            path: "/api/users".to_string(),
            parts: parts.clone(),
        });
        if let Some(err) = inner.failures.pop_front() {
            return Err(err);
        }
        inner.next_id += 1;
        let id = UserId(inner.next_id);
        let record = apply_parts(blank_record(id), &parts);
        inner.users.insert(id, record);
        Ok(id)
    }

    async fn update_user(&self, id: UserId, parts: Vec<Part>) -> Result<(), SubmitError> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(RecordedRequest {
            method: Method::Put,
            path: format!("/api/users/{id}"),
            parts: parts.clone(),
        });
        if let Some(err) = inner.failures.pop_front() {
            return Err(err);
        }
        let record = inner.users.remove(&id).unwrap_or_else(|| blank_record(id));
        inner.users.insert(id, apply_parts(record, &parts));
        Ok(())
    }

    async fn fetch_user(&self, id: UserId) -> Result<UserRecord, FetchError> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(RecordedRequest {
            method: Method::Get,
            path: format!("/api/users/{id}"),
            parts: Vec::new(),
        });
        inner.users.get(&id).cloned().ok_or(FetchError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileUpload, FormValues};
    use crate::payload::multipart_parts;

    #[tokio::test]
    async fn test_create_then_fetch() {
        let api = MemoryApi::new();
        let values = FormValues {
            first_name: "Radia".to_string(),
            home_zip: "560001".to_string(),
            profile_photo: Some(FileUpload::new("radia.png", "image/png", vec![])),
            ..FormValues::default()
        };

        let id = api.create_user(multipart_parts(&values)).await.unwrap();
        let record = api.fetch_user(id).await.unwrap();

        assert_eq!(record.id, id);
        assert_eq!(record.first_name, "Radia");
        assert_eq!(record.address.home_zip, "560001");
        assert_eq!(record.profile_photo, format!("{id}-radia.png"));
        assert_eq!(record.appointment_letter, "");
    }

    #[tokio::test]
    async fn test_scripted_failure_is_consumed_once() {
        let api = MemoryApi::new();
        api.fail_next(SubmitError::Failed("boom".to_string()));

        assert!(api.create_user(Vec::new()).await.is_err());
        assert!(api.create_user(Vec::new()).await.is_ok());
        assert_eq!(api.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_unknown_user() {
        let api = MemoryApi::new();
        assert_eq!(api.fetch_user(UserId(999)).await, Err(FetchError::NotFound));
        assert_eq!(api.requests()[0].path, "/api/users/999");
    }
}
