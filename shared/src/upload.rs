//! Pre-flight screening of a user-chosen file. Runs synchronously at the
//! picker boundary, before any network activity starts.

pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
pub const ACCEPTED_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

#[derive(Clone, Debug, PartialEq)]
pub enum RejectReason {
    TooLarge { size: u64 },
    UnsupportedType { mime: String },
}

impl RejectReason {
    /// Text for the blocking notice shown when a file is turned away.
    pub fn notice(&self) -> String {
        match self {
            RejectReason::TooLarge { .. } => {
                "File size exceeds 10MB. Please choose a smaller file.".to_string()
            }
            RejectReason::UnsupportedType { mime } => {
                format!("Unsupported file type ({mime}). Please choose a JPG, PNG or WEBP image.")
            }
        }
    }
}

/// Checks the file envelope only; content is never inspected here.
pub fn screen(size: u64, mime: &str) -> Result<(), RejectReason> {
    if size > MAX_UPLOAD_BYTES {
        return Err(RejectReason::TooLarge { size });
    }
    if !ACCEPTED_TYPES.contains(&mime) {
        return Err(RejectReason::UnsupportedType {
            mime: mime.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_supported_types_under_the_cap() {
        for mime in ACCEPTED_TYPES {
            assert_eq!(screen(1024, mime), Ok(()));
        }
    }

    #[test]
    fn accepts_a_file_exactly_at_the_cap() {
        assert_eq!(screen(MAX_UPLOAD_BYTES, "image/png"), Ok(()));
    }

    #[test]
    fn rejects_oversized_files() {
        let size = MAX_UPLOAD_BYTES + 1;
        assert_eq!(
            screen(size, "image/jpeg"),
            Err(RejectReason::TooLarge { size })
        );
    }

    #[test]
    fn rejects_unsupported_types() {
        assert_eq!(
            screen(10, "image/gif"),
            Err(RejectReason::UnsupportedType {
                mime: "image/gif".into()
            })
        );
        assert!(screen(10, "application/pdf").is_err());
    }

    #[test]
    fn size_check_runs_before_type_check() {
        assert_eq!(
            screen(MAX_UPLOAD_BYTES + 1, "text/plain"),
            Err(RejectReason::TooLarge {
                size: MAX_UPLOAD_BYTES + 1
            })
        );
    }

    #[test]
    fn rejection_notices_are_user_readable() {
        let too_large = RejectReason::TooLarge { size: 0 }.notice();
        assert!(too_large.contains("10MB"));

        let wrong_type = RejectReason::UnsupportedType {
            mime: "image/gif".into(),
        }
        .notice();
        assert!(wrong_type.contains("image/gif"));
    }
}
