/// Accepted filename suffixes. Matching is exact and case-sensitive.
pub const ALLOWED_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".pdf"];

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub code: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Checks the filename suffix against the allow-list
pub fn is_supported_filename(filename: &str) -> bool {
    ALLOWED_EXTENSIONS
        .iter()
        .any(|&suffix| filename.ends_with(suffix))
}

/// Validates the filename suffix, naming the file in the error message
pub fn validate_extension(filename: &str) -> Result<(), ValidationError> {
    if is_supported_filename(filename) {
        return Ok(());
    }

    Err(ValidationError {
        code: "UNSUPPORTED_FILE_TYPE",
        message: format!("File type not supported: {}", filename),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions() {
        assert!(is_supported_filename("photo.png"));
        assert!(is_supported_filename("photo.jpg"));
        assert!(is_supported_filename("photo.jpeg"));
        assert!(is_supported_filename("anim.gif"));
        assert!(is_supported_filename("report.pdf"));
        assert!(is_supported_filename("archive.tar.pdf"));
        assert!(is_supported_filename(".png"));
    }

    #[test]
    fn test_rejected_extensions() {
        assert!(!is_supported_filename("virus.exe"));
        assert!(!is_supported_filename("notes.txt"));
        assert!(!is_supported_filename("image.webp"));
        assert!(!is_supported_filename("png"));
        assert!(!is_supported_filename(""));
        // Suffix must be at the very end
        assert!(!is_supported_filename("photo.png.exe"));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(!is_supported_filename("PHOTO.PNG"));
        assert!(!is_supported_filename("scan.Pdf"));
        assert!(!is_supported_filename("pic.JPG"));
    }

    #[test]
    fn test_validate_extension_message() {
        assert!(validate_extension("a.gif").is_ok());

        let err = validate_extension("b.exe").unwrap_err();
        assert_eq!(err.code, "UNSUPPORTED_FILE_TYPE");
        assert_eq!(err.message, "File type not supported: b.exe");
        assert_eq!(
            err.to_string(),
            "UNSUPPORTED_FILE_TYPE: File type not supported: b.exe"
        );
    }
}
