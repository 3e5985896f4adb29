//! Multipart body layout, independent of any HTTP client.
//!
//! [`multipart_parts`] decides *what* goes on the wire; the HTTP layer only
//! converts each [`Part`] into its client's multipart type.

use crate::models::{Field, FileUpload, FormValues};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PartBody {
    Text(String),
    File(FileUpload),
}

/// One named part of a multipart body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Part {
    pub name: &'static str,
    pub body: PartBody,
}

impl Part {
    pub fn is_file(&self) -> bool {
        matches!(self.body, PartBody::File(_))
    }

    pub fn text(&self) -> Option<&str> {
        match &self.body {
            PartBody::Text(text) => Some(text),
            PartBody::File(_) => None,
        }
    }
}

/// One text part per scalar field and one file part per attached upload,
/// in form order. Absent uploads produce no part at all.
pub fn multipart_parts(values: &FormValues) -> Vec<Part> {
    Field::ALL
        .into_iter()
        .filter_map(|field| {
            let body = match values.text(field) {
                Some(text) => PartBody::Text(text.to_string()),
                None => PartBody::File(values.file(field)?.clone()),
            };
            Some(Part {
                name: field.key(),
                body,
            })
        })
        .collect()
}

/// Look up a part by name.
pub fn find_part<'a>(parts: &'a [Part], name: &str) -> Option<&'a Part> {
    parts.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_follow_form_order() {
        let mut values = FormValues {
            first_name: "Alan".to_string(),
            ..FormValues::default()
        };
        values.profile_photo = Some(FileUpload::new("a.png", "image/png", vec![1]));
        values.appointment_letter = Some(FileUpload::new("a.pdf", "application/pdf", vec![2]));

        let names: Vec<_> = multipart_parts(&values).iter().map(|p| p.name).collect();
        let expected: Vec<_> = Field::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_missing_files_are_omitted() {
        let parts = multipart_parts(&FormValues::default());
        assert_eq!(parts.len(), 11);
        assert!(parts.iter().all(|p| !p.is_file()));
        assert!(find_part(&parts, "profilePhoto").is_none());
        assert!(find_part(&parts, "appointmentLetter").is_none());
        // Empty text is still sent
        assert_eq!(find_part(&parts, "homeZip").and_then(Part::text), Some(""));
    }
}
