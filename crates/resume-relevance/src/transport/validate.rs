//! Client-side upload validation applied before any network call.

use super::{TransportError, UploadFile};

/// Uploads above this size are rejected locally (10 MB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

pub const ACCEPTED_RESUME_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];
pub const ACCEPTED_JD_EXTENSIONS: [&str; 2] = ["pdf", "txt"];

pub fn validate_resume_file(file: &UploadFile) -> Result<(), TransportError> {
    validate(file, &ACCEPTED_RESUME_EXTENSIONS)
}

pub fn validate_jd_file(file: &UploadFile) -> Result<(), TransportError> {
    validate(file, &ACCEPTED_JD_EXTENSIONS)
}

fn validate(file: &UploadFile, accepted: &[&str]) -> Result<(), TransportError> {
    let extension = file
        .filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if !accepted.contains(&extension.as_str()) {
        return Err(TransportError::InvalidFile(format!(
            "'{}' has unsupported type '.{}' (accepted: {})",
            file.filename,
            extension,
            accepted
                .iter()
                .map(|ext| format!(".{ext}"))
                .collect::<Vec<_>>()
                .join("/")
        )));
    }

    let size = file.bytes.len() as u64;
    if size > MAX_FILE_SIZE {
        return Err(TransportError::InvalidFile(format!(
            "'{}' is {} which exceeds the {} limit",
            file.filename,
            crate::domain::format_file_size(size),
            crate::domain::format_file_size(MAX_FILE_SIZE),
        )));
    }

    Ok(())
}
