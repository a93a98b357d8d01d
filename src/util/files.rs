//! Upload constraints and base64 attachment encoding.
//!
//! SYSTEM CONTEXT
//! ==============
//! Files never leave the page as multipart uploads. They are validated
//! locally, read fully, and embedded in JSON payloads as base64 text. All
//! rules run before any form state changes, so a rejected selection leaves
//! the form untouched.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// Per-file size cap.
pub const MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Upper bound on attached CV files.
pub const MAX_CV_FILES: usize = 3;

const PHOTO_FORMATS: &[&str] = &["jpg", "jpeg", "png"];
const CV_FORMATS: &[&str] = &["pdf", "docx"];

/// What an uploaded file is for; selects the allowed formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Photo,
    Cv,
}

/// Why an upload was refused. The messages render verbatim in the banner.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("One or more files exceed the size limit of 10 MB.")]
    TooLarge,
    #[error("Only JPG, JPEG, and PNG formats are allowed for profile photos.")]
    PhotoFormat,
    #[error("Only PDF and DOCX formats are allowed for CV files.")]
    CvFormat,
    #[error("You can upload a maximum of 3 CV files.")]
    TooManyCvs,
    #[error("Could not read the selected file.")]
    Unreadable,
}

/// Lowercased extension of a file name, if it has one.
pub fn extension(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Check one file against the size cap and the allowed formats for `kind`.
pub fn check_file(name: &str, size: u64, kind: FileKind) -> Result<(), UploadError> {
    if size > MAX_FILE_BYTES {
        return Err(UploadError::TooLarge);
    }
    let allowed = match kind {
        FileKind::Photo => PHOTO_FORMATS,
        FileKind::Cv => CV_FORMATS,
    };
    match extension(name) {
        Some(ext) if allowed.contains(&ext.as_str()) => Ok(()),
        _ => Err(match kind {
            FileKind::Photo => UploadError::PhotoFormat,
            FileKind::Cv => UploadError::CvFormat,
        }),
    }
}

/// Whether `adding` more CV files fits under the cap.
pub fn can_add_cvs(existing: usize, adding: usize) -> bool {
    existing + adding <= MAX_CV_FILES
}

/// Base64 text for an attachment body.
pub fn encode_attachment(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// MIME type inferred from the file extension, for preview data URLs.
pub fn mime_for(name: &str) -> &'static str {
    match extension(name).as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}

/// Inline preview URL for an encoded file.
pub fn preview_data_url(mime: &str, encoded: &str) -> String {
    format!("data:{mime};base64,{encoded}")
}

/// Files currently selected on a file input.
#[cfg(feature = "csr")]
pub fn files_from_input(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Read a browser file fully and base64-encode its contents.
#[cfg(feature = "csr")]
pub async fn read_base64(file: &web_sys::File) -> Result<String, UploadError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| UploadError::Unreadable)?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(encode_attachment(&bytes))
}
