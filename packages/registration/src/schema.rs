//! # Validation schema
//!
//! The schema is a static table: each [`Field`] maps to an ordered list of
//! [`Rule`]s. [`validate`] walks every field, records the first rule that
//! fails for it, and never stops early, so one pass reports every problem on
//! the form.
//!
//! Create and edit share the same table. The only rule that depends on
//! [`Mode`] is [`Rule::FileRequired`]; in edit mode a missing upload means
//! "keep the stored file".

use std::collections::BTreeMap;

use crate::models::{Field, FormValues};

/// Which record shape the form is producing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit,
}

impl Mode {
    pub fn requires_files(self) -> bool {
        matches!(self, Mode::Create)
    }
}

/// Why a field failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Required,
    InvalidFormat,
    UnsupportedType,
    /// Reported by the server against this field.
    Server,
}

impl ErrorKind {
    /// Stable name, used as a styling hook on the rendered message.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Required => "required",
            ErrorKind::InvalidFormat => "invalid-format",
            ErrorKind::UnsupportedType => "unsupported-type",
            ErrorKind::Server => "server",
        }
    }
}

/// One failed field: the message shown under the input and its kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

/// A single check applied to one field.
#[derive(Clone, Copy, Debug)]
pub enum Rule {
    /// Text must be non-blank.
    Required(&'static str),
    /// Text, exactly as it will be submitted, must be a syntactically valid
    /// email address.
    Email(&'static str),
    /// Text must be exactly this many ASCII digits.
    Digits(usize, &'static str),
    /// A file must be attached, in modes that require uploads.
    FileRequired(&'static str),
    /// An attached file must declare one of these content types.
    ContentType(&'static [&'static str], &'static str),
}

pub const PHOTO_TYPES: &[&str] = &["image/png", "image/jpg", "image/jpeg"];
pub const LETTER_TYPES: &[&str] = &["application/pdf"];

pub const SCHEMA: &[(Field, &[Rule])] = &[
    (Field::FirstName, &[Rule::Required("First name is required")]),
    (Field::LastName, &[Rule::Required("Last name is required")]),
    (
        Field::Email,
        &[Rule::Required("Email is required"), Rule::Email("Invalid email")],
    ),
    (
        Field::ProfilePhoto,
        &[
            Rule::FileRequired("Profile photo is required"),
            Rule::ContentType(PHOTO_TYPES, "Unsupported Format"),
        ],
    ),
    (Field::CompanyAddress, &[Rule::Required("Company address is required")]),
    (Field::CompanyCity, &[Rule::Required("Company city is required")]),
    (Field::CompanyState, &[Rule::Required("Company state is required")]),
    (
        Field::CompanyZip,
        &[
            Rule::Required("Company zip is required"),
            Rule::Digits(6, "Company zip must be 6 digits"),
        ],
    ),
    (Field::HomeAddress, &[Rule::Required("Home address is required")]),
    (Field::HomeCity, &[Rule::Required("Home city is required")]),
    (Field::HomeState, &[Rule::Required("Home state is required")]),
    (
        Field::HomeZip,
        &[
            Rule::Required("Home zip is required"),
            Rule::Digits(6, "Home zip must be 6 digits"),
        ],
    ),
    (
        Field::AppointmentLetter,
        &[
            Rule::FileRequired("Appointment letter is required"),
            Rule::ContentType(LETTER_TYPES, "Only PDF files are allowed"),
        ],
    ),
];

impl Rule {
    /// Run this rule against one field. `None` means it passed.
    fn check(self, values: &FormValues, field: Field, mode: Mode) -> Option<FieldError> {
        let fail = |kind, message: &str| {
            Some(FieldError {
                kind,
                message: message.to_string(),
            })
        };
        match self {
            Rule::Required(message) => match values.text(field) {
                Some(text) if text.trim().is_empty() => fail(ErrorKind::Required, message),
                _ => None,
            },
            Rule::Email(message) => match values.text(field) {
                Some(text) if !is_email(text) => fail(ErrorKind::InvalidFormat, message),
                _ => None,
            },
            Rule::Digits(len, message) => match values.text(field) {
                Some(text) if !is_digits(text, len) => fail(ErrorKind::InvalidFormat, message),
                _ => None,
            },
            Rule::FileRequired(message) => {
                if mode.requires_files() && values.file(field).is_none() {
                    fail(ErrorKind::Required, message)
                } else {
                    None
                }
            }
            Rule::ContentType(allowed, message) => match values.file(field) {
                Some(file) if !allowed.contains(&file.content_type.as_str()) => {
                    fail(ErrorKind::UnsupportedType, message)
                }
                _ => None,
            },
        }
    }
}

/// Per-field errors, ordered like the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// Message to show under `field`, if any.
    pub fn message(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(|e| e.message.as_str())
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Overwrite only the fields present in `other`.
    pub fn merge(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }
}

/// Content types an upload field accepts, for the file picker's `accept`.
pub fn accepted_types(field: Field) -> &'static [&'static str] {
    SCHEMA
        .iter()
        .filter(|(f, _)| *f == field)
        .flat_map(|(_, rules)| rules.iter())
        .find_map(|rule| match rule {
            Rule::ContentType(allowed, _) => Some(*allowed),
            _ => None,
        })
        .unwrap_or(&[])
}

/// Validate every field of `values` for `mode`.
pub fn validate(values: &FormValues, mode: Mode) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    for (field, rules) in SCHEMA {
        if let Some(error) = rules
            .iter()
            .find_map(|rule| rule.check(values, *field, mode))
        {
            errors.insert(*field, error);
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_digits(text: &str, len: usize) -> bool {
    text.len() == len && text.bytes().all(|b| b.is_ascii_digit())
}

/// Structural email check: one `@`, a dot-atom local part, and a domain of
/// one or more alphanumeric/hyphen labels. Surrounding whitespace fails.
pub fn is_email(text: &str) -> bool {
    const LOCAL_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~.-";

    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.len() > 64 || domain.len() > 253 {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || LOCAL_SPECIALS.contains(c))
    {
        return false;
    }

    domain.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}
