use super::*;

// =============================================================
// Extensions and formats
// =============================================================

#[test]
fn extension_lowercases_and_takes_the_last_segment() {
    assert_eq!(extension("resume.PDF"), Some("pdf".to_owned()));
    assert_eq!(extension("archive.tar.gz"), Some("gz".to_owned()));
    assert_eq!(extension("no-extension"), None);
    assert_eq!(extension("trailing."), None);
}

#[test]
fn photos_accept_image_formats_only() {
    assert_eq!(check_file("me.jpg", 1_000, FileKind::Photo), Ok(()));
    assert_eq!(check_file("me.JPEG", 1_000, FileKind::Photo), Ok(()));
    assert_eq!(check_file("me.png", 1_000, FileKind::Photo), Ok(()));
    assert_eq!(check_file("me.pdf", 1_000, FileKind::Photo), Err(UploadError::PhotoFormat));
    assert_eq!(check_file("me", 1_000, FileKind::Photo), Err(UploadError::PhotoFormat));
}

#[test]
fn cvs_accept_document_formats_only() {
    assert_eq!(check_file("cv.pdf", 1_000, FileKind::Cv), Ok(()));
    assert_eq!(check_file("cv.docx", 1_000, FileKind::Cv), Ok(()));
    assert_eq!(check_file("cv.png", 1_000, FileKind::Cv), Err(UploadError::CvFormat));
    assert_eq!(check_file("cv.doc", 1_000, FileKind::Cv), Err(UploadError::CvFormat));
}

// =============================================================
// Size cap
// =============================================================

#[test]
fn exactly_ten_megabytes_is_allowed() {
    assert_eq!(check_file("cv.pdf", MAX_FILE_BYTES, FileKind::Cv), Ok(()));
}

#[test]
fn one_byte_over_the_cap_is_rejected() {
    assert_eq!(check_file("cv.pdf", MAX_FILE_BYTES + 1, FileKind::Cv), Err(UploadError::TooLarge));
}

#[test]
fn size_is_checked_before_format() {
    assert_eq!(check_file("cv.png", MAX_FILE_BYTES + 1, FileKind::Cv), Err(UploadError::TooLarge));
}

// =============================================================
// CV count
// =============================================================

#[test]
fn a_fourth_cv_is_rejected() {
    assert!(!can_add_cvs(3, 1));
    assert!(!can_add_cvs(0, 4));
    assert!(!can_add_cvs(2, 2));
}

#[test]
fn up_to_three_cvs_fit() {
    assert!(can_add_cvs(0, 3));
    assert!(can_add_cvs(2, 1));
    assert!(can_add_cvs(0, 0));
}

// =============================================================
// Encoding
// =============================================================

#[test]
fn attachments_encode_as_standard_base64() {
    assert_eq!(encode_attachment(b"hi"), "aGk=");
}

#[test]
fn preview_urls_embed_the_mime_type() {
    assert_eq!(mime_for("me.png"), "image/png");
    assert_eq!(mime_for("me.jpg"), "image/jpeg");
    assert_eq!(preview_data_url("image/png", "aGk="), "data:image/png;base64,aGk=");
}
