use crate::types::error::ApiError;
use axum::extract::Multipart;
use bytes::Bytes;
use std::collections::HashMap;

/// At most 10 files per request, matching the admin UI's gallery limit
const MAX_FILES: usize = 10;

/// One uploaded file part
pub struct FilePart {
    pub filename: String,
    pub data: Bytes,
}

/// Collected multipart form: text fields by name, file parts in order
#[derive(Default)]
pub struct UploadForm {
    pub fields: HashMap<String, String>,
    pub files: Vec<FilePart>,
}

impl UploadForm {
    pub fn take_field(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }
}

/// Drain a multipart body into text fields and file parts. Parts with a
/// filename are treated as files regardless of field name; everything else
/// is read as UTF-8 text.
pub async fn collect_form(mut multipart: Multipart) -> Result<UploadForm, ApiError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("Malformed multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let filename = field.file_name().map(|f| f.to_string());

        match filename {
            Some(filename) => {
                if form.files.len() >= MAX_FILES {
                    return Err(ApiError::Validation(format!(
                        "Too many files (limit {})",
                        MAX_FILES
                    )));
                }

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Validation(format!("Failed to read file: {}", e)))?;

                form.files.push(FilePart { filename, data });
            }
            None => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::Validation(format!("Failed to read field: {}", e)))?;

                form.fields.insert(name, value);
            }
        }
    }

    Ok(form)
}
