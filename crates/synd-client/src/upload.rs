//! File upload payloads and request-body assembly.
//!
//! Draft-step persistence has a JSON/multipart duality: a step whose
//! submission includes a newly selected file goes out as
//! `multipart/form-data` with the draft fields as text parts; a step
//! without one goes out as plain JSON. Keeping an existing remote file
//! means the file field is simply absent from the body — the backend
//! preserves omitted fields, so an empty placeholder would clear it.

use crate::types::DraftFields;

/// A file selected for upload as part of a draft step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// The wire name of the file field (e.g. `proofOfBankUpload`).
    pub field: String,
    /// Original file name, carried for server-side extension checks.
    pub file_name: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Build an upload payload.
    pub fn new(
        field: impl Into<String>,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Assemble a multipart form from draft fields plus one file part.
///
/// String field values become text parts verbatim; other JSON values are
/// serialized compactly so the backend can parse them back.
pub(crate) fn multipart_form(fields: &DraftFields, file: &FileUpload) -> reqwest::multipart::Form {
    let mut form = reqwest::multipart::Form::new();
    for (name, value) in fields {
        let text = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        form = form.text(name.clone(), text);
    }
    form.part(
        file.field.clone(),
        reqwest::multipart::Part::bytes(file.bytes.clone()).file_name(file.file_name.clone()),
    )
}

/// Attach draft fields (and optionally a file) to a request builder:
/// multipart when a file is present, JSON otherwise.
pub(crate) fn fields_body(
    builder: reqwest::RequestBuilder,
    fields: &DraftFields,
    file: Option<&FileUpload>,
) -> reqwest::RequestBuilder {
    match file {
        Some(upload) => builder.multipart(multipart_form(fields, upload)),
        None => builder.json(fields),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_carries_field_and_name() {
        let upload = FileUpload::new("governmentId", "passport.png", vec![1, 2, 3]);
        assert_eq!(upload.field, "governmentId");
        assert_eq!(upload.file_name, "passport.png");
        assert_eq!(upload.bytes.len(), 3);
    }
}
