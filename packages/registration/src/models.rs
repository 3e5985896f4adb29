//! # Records and form values
//!
//! Two shapes of the same user live side by side:
//!
//! - [`UserRecord`] / [`AddressRecord`] are what the API returns. Uploaded
//!   files appear as stored file names.
//! - [`FormValues`] is what a form session edits. Uploads are optional
//!   [`FileUpload`] handles carrying the bytes the browser handed over.
//!
//! [`Field`] names every input of the form. Its [`key`](Field::key) is the
//! camelCase name used both as the multipart part name and as the `param`
//! the server reports errors against.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Server-assigned user identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(UserId)
    }
}

/// Address block owned by exactly one user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    #[serde(default)]
    pub id: i64,
    pub company_address: String,
    pub company_city: String,
    pub company_state: String,
    pub company_zip: String,
    pub home_address: String,
    pub home_city: String,
    pub home_state: String,
    pub home_zip: String,
}

/// A persisted user as returned by `GET /api/users/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Stored file name of the uploaded photo.
    pub profile_photo: String,
    /// Stored file name of the uploaded PDF.
    pub appointment_letter: String,
    pub address: AddressRecord,
}

impl UserRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A file picked in the browser, held in memory until submission.
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    /// MIME type the browser declared for the file, trimmed and lowercased.
    /// Empty when unknown.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into().trim().to_ascii_lowercase(),
            bytes,
        }
    }
}

// File contents can be megabytes; keep them out of logs.
impl fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// What kind of input a field is, which decides the rules it gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Zip,
    File,
}

/// Every input on the registration form, in submission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    ProfilePhoto,
    CompanyAddress,
    CompanyCity,
    CompanyState,
    CompanyZip,
    HomeAddress,
    HomeCity,
    HomeState,
    HomeZip,
    AppointmentLetter,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::ProfilePhoto,
        Field::CompanyAddress,
        Field::CompanyCity,
        Field::CompanyState,
        Field::CompanyZip,
        Field::HomeAddress,
        Field::HomeCity,
        Field::HomeState,
        Field::HomeZip,
        Field::AppointmentLetter,
    ];

    /// Wire name, shared by multipart parts and server error `param`s.
    pub fn key(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::ProfilePhoto => "profilePhoto",
            Field::CompanyAddress => "companyAddress",
            Field::CompanyCity => "companyCity",
            Field::CompanyState => "companyState",
            Field::CompanyZip => "companyZip",
            Field::HomeAddress => "homeAddress",
            Field::HomeCity => "homeCity",
            Field::HomeState => "homeState",
            Field::HomeZip => "homeZip",
            Field::AppointmentLetter => "appointmentLetter",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::ProfilePhoto => "Profile Photo",
            Field::CompanyAddress | Field::HomeAddress => "Address",
            Field::CompanyCity | Field::HomeCity => "City",
            Field::CompanyState | Field::HomeState => "State",
            Field::CompanyZip | Field::HomeZip => "Zip",
            Field::AppointmentLetter => "Appointment Letter (PDF)",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Email => FieldKind::Email,
            Field::CompanyZip | Field::HomeZip => FieldKind::Zip,
            Field::ProfilePhoto | Field::AppointmentLetter => FieldKind::File,
            _ => FieldKind::Text,
        }
    }

    pub fn is_file(self) -> bool {
        self.kind() == FieldKind::File
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Transient values of one form session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub profile_photo: Option<FileUpload>,
    pub company_address: String,
    pub company_city: String,
    pub company_state: String,
    pub company_zip: String,
    pub home_address: String,
    pub home_city: String,
    pub home_state: String,
    pub home_zip: String,
    pub appointment_letter: Option<FileUpload>,
}

impl FormValues {
    /// Prefill from a loaded record. Uploads start empty so they stay
    /// unchanged unless the user picks a replacement.
    pub fn from_record(record: &UserRecord) -> Self {
        let address = &record.address;
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            profile_photo: None,
            company_address: address.company_address.clone(),
            company_city: address.company_city.clone(),
            company_state: address.company_state.clone(),
            company_zip: address.company_zip.clone(),
            home_address: address.home_address.clone(),
            home_city: address.home_city.clone(),
            home_state: address.home_state.clone(),
            home_zip: address.home_zip.clone(),
            appointment_letter: None,
        }
    }

    /// Text value of a scalar field, `None` for file fields.
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::CompanyAddress => &self.company_address,
            Field::CompanyCity => &self.company_city,
            Field::CompanyState => &self.company_state,
            Field::CompanyZip => &self.company_zip,
            Field::HomeAddress => &self.home_address,
            Field::HomeCity => &self.home_city,
            Field::HomeState => &self.home_state,
            Field::HomeZip => &self.home_zip,
            Field::ProfilePhoto | Field::AppointmentLetter => return None,
        };
        Some(value)
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        let value = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::CompanyAddress => &mut self.company_address,
            Field::CompanyCity => &mut self.company_city,
            Field::CompanyState => &mut self.company_state,
            Field::CompanyZip => &mut self.company_zip,
            Field::HomeAddress => &mut self.home_address,
            Field::HomeCity => &mut self.home_city,
            Field::HomeState => &mut self.home_state,
            Field::HomeZip => &mut self.home_zip,
            Field::ProfilePhoto | Field::AppointmentLetter => return None,
        };
        Some(value)
    }

    /// Set a scalar field. Returns `false` if `field` is a file field.
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) -> bool {
        match self.text_mut(field) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn file(&self, field: Field) -> Option<&FileUpload> {
        match field {
            Field::ProfilePhoto => self.profile_photo.as_ref(),
            Field::AppointmentLetter => self.appointment_letter.as_ref(),
            _ => None,
        }
    }

    /// Set or clear a file field. Returns `false` if `field` is a text field.
    pub fn set_file(&mut self, field: Field, file: Option<FileUpload>) -> bool {
        match field {
            Field::ProfilePhoto => self.profile_photo = file,
            Field::AppointmentLetter => self.appointment_letter = file,
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> UserRecord {
        UserRecord {
            id: UserId(7),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            profile_photo: "1700000000-ada.png".to_string(),
            appointment_letter: "1700000000-letter.pdf".to_string(),
            address: AddressRecord {
                id: 3,
                company_address: "1 Analytical Way".to_string(),
                company_city: "London".to_string(),
                company_state: "Greater London".to_string(),
                company_zip: "110001".to_string(),
                home_address: "12 St James's Square".to_string(),
                home_city: "London".to_string(),
                home_state: "Greater London".to_string(),
                home_zip: "110002".to_string(),
            },
        }
    }

    #[test]
    fn test_record_deserializes_from_camel_case() {
        let json = r#"{
            "id": 7,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "profilePhoto": "1700000000-ada.png",
            "appointmentLetter": "1700000000-letter.pdf",
            "address": {
                "id": 3,
                "companyAddress": "1 Analytical Way",
                "companyCity": "London",
                "companyState": "Greater London",
                "companyZip": "110001",
                "homeAddress": "12 St James's Square",
                "homeCity": "London",
                "homeState": "Greater London",
                "homeZip": "110002"
            }
        }"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, sample_record());
        assert_eq!(record.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_from_record_leaves_files_empty() {
        let values = FormValues::from_record(&sample_record());
        assert_eq!(values.first_name, "Ada");
        assert_eq!(values.company_zip, "110001");
        assert_eq!(values.home_state, "Greater London");
        assert!(values.profile_photo.is_none());
        assert!(values.appointment_letter.is_none());
    }

    #[test]
    fn test_field_keys_roundtrip() {
        for field in Field::ALL {
            assert_eq!(Field::from_key(field.key()), Some(field));
        }
        assert_eq!(Field::from_key("password"), None);
    }

    #[test]
    fn test_set_text_rejects_file_fields() {
        let mut values = FormValues::default();
        assert!(values.set_text(Field::HomeCity, "Pune"));
        assert_eq!(values.text(Field::HomeCity), Some("Pune"));
        assert!(!values.set_text(Field::ProfilePhoto, "photo.png"));
        assert_eq!(values.text(Field::ProfilePhoto), None);
    }

    #[test]
    fn test_set_file_rejects_text_fields() {
        let mut values = FormValues::default();
        let letter = FileUpload::new("letter.pdf", "application/pdf", vec![1, 2, 3]);
        assert!(values.set_file(Field::AppointmentLetter, Some(letter.clone())));
        assert_eq!(values.file(Field::AppointmentLetter), Some(&letter));
        assert!(!values.set_file(Field::Email, Some(letter)));
    }

    #[test]
    fn test_user_id_parses_from_route_segment() {
        assert_eq!("42".parse::<UserId>().unwrap(), UserId(42));
        assert!("abc".parse::<UserId>().is_err());
        assert_eq!(UserId(42).to_string(), "42");
    }

    #[test]
    fn test_file_upload_debug_hides_bytes() {
        let photo = FileUpload::new("me.png", "image/png", vec![0; 4096]);
        let rendered = format!("{photo:?}");
        assert!(rendered.contains("len: 4096"));
        assert!(!rendered.contains("0, 0"));
    }

    #[test]
    fn test_file_upload_normalizes_content_type() {
        let photo = FileUpload::new("me.png", " Image/PNG ", vec![]);
        assert_eq!(photo.content_type, "image/png");
    }
}
