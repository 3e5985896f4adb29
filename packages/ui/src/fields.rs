use dioxus::html::FileData;
use dioxus::prelude::*;
use registration::schema::accepted_types;
use registration::{Field, FileUpload, FormState};

/// Labelled text input bound to one field of `form`, with its error below.
#[component]
pub fn TextField(
    mut form: Signal<FormState>,
    field: Field,
    #[props(default = "text".to_string())] input_type: String,
) -> Element {
    let id = field.key();
    let label = field.label();
    let value = form.read().values().text(field).unwrap_or_default().to_string();
    let error = field_error(form, field);

    rsx! {
        div {
            class: "form-field",
            label { r#for: id, "{label}:" }
            input {
                id: id,
                name: id,
                r#type: "{input_type}",
                value: value,
                oninput: move |evt: FormEvent| form.write().set_field(field, evt.value()),
            }
            if let Some((kind, message)) = error {
                div { class: "error {kind}", "{message}" }
            }
        }
    }
}

/// File picker bound to one upload field of `form`.
#[component]
pub fn FileField(mut form: Signal<FormState>, field: Field) -> Element {
    let id = field.key();
    let label = field.label();
    let accept = accepted_types(field).join(", ");
    let chosen = form
        .read()
        .values()
        .file(field)
        .map(|f| f.file_name.clone());
    let error = field_error(form, field);

    let onchange = move |evt: FormEvent| async move {
        let upload = match evt.files().into_iter().next() {
            Some(data) => read_upload(data).await,
            None => None,
        };
        form.write().pick_file(field, upload);
    };

    rsx! {
        div {
            class: "form-field",
            label { r#for: id, "{label}:" }
            input {
                id: id,
                name: id,
                r#type: "file",
                accept: accept,
                onchange: onchange,
            }
            if let Some(name) = chosen {
                div { class: "file-chosen", "{name}" }
            }
            if let Some((kind, message)) = error {
                div { class: "error {kind}", "{message}" }
            }
        }
    }
}

/// Message for `field` with its kind name, for styling.
fn field_error(form: Signal<FormState>, field: Field) -> Option<(&'static str, String)> {
    let form = form.read();
    let error = form.field_errors().get(field)?;
    Some((error.kind.as_str(), error.message.clone()))
}

/// Pull a picked file into memory. The declared type is kept as-is; the
/// schema decides whether it is acceptable.
async fn read_upload(data: FileData) -> Option<FileUpload> {
    let name = data.name();
    let content_type = data.content_type().unwrap_or_default();
    match data.read_bytes().await {
        Ok(bytes) => Some(FileUpload::new(name, content_type, bytes.to_vec())),
        Err(e) => {
            tracing::error!(error = ?e, file = %name, "failed to read picked file");
            None
        }
    }
}
