//! State machine for one verification attempt: a chosen file is submitted,
//! the service reply is classified, and the outcome is exposed as a single
//! immutable snapshot for the view layer to read.

use std::fmt;

use crate::verdict::VerifyResult;

/// Descriptor of the file a submission was started for.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadMeta {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum FailureKind {
    NetworkError,
    ServerError,
    FormatError,
}

/// Why a submission failed after validation. The kind split exists for
/// diagnostics; the user always sees the same fixed message.
#[derive(Clone, Debug, PartialEq)]
pub enum VerifyError {
    Network { detail: String },
    Server { status: u16 },
    Format { detail: String },
}

impl VerifyError {
    pub fn kind(&self) -> FailureKind {
        match self {
            VerifyError::Network { .. } => FailureKind::NetworkError,
            VerifyError::Server { .. } => FailureKind::ServerError,
            VerifyError::Format { .. } => FailureKind::FormatError,
        }
    }

    /// The one string the result panel shows for any async failure.
    pub fn user_message(&self) -> &'static str {
        "Failed to analyze image. Check backend or API URL."
    }
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyError::Network { detail } => write!(f, "request failed: {detail}"),
            VerifyError::Server { status } => write!(f, "service replied with status {status}"),
            VerifyError::Format { detail } => write!(f, "unusable reply: {detail}"),
        }
    }
}

/// Single source of truth for the verify view. Exactly one variant is active;
/// transitions replace the whole snapshot, nothing is mutated in place.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Selected(UploadMeta),
    Analyzing(UploadMeta),
    Completed(VerifyResult),
    Failed(VerifyError),
}

impl SessionState {
    /// A freshly screened file. Selection and submission are one user action,
    /// so callers chain `select(..).start()` within a single update.
    pub fn select(meta: UploadMeta) -> Self {
        SessionState::Selected(meta)
    }

    /// Moves a selected file into the in-flight state, dropping any previous
    /// terminal snapshot so no stale result shows during a new request.
    pub fn start(self) -> Self {
        match self {
            SessionState::Selected(meta) => SessionState::Analyzing(meta),
            other => other,
        }
    }

    /// Terminal transition for the in-flight submission. Settling is only
    /// meaningful while analyzing; any other state is left untouched.
    pub fn settle(self, outcome: Result<VerifyResult, VerifyError>) -> Self {
        match self {
            SessionState::Analyzing(_) => match outcome {
                Ok(result) => SessionState::Completed(result),
                Err(error) => SessionState::Failed(error),
            },
            other => other,
        }
    }

    pub fn selected_file(&self) -> Option<&UploadMeta> {
        match self {
            SessionState::Selected(meta) | SessionState::Analyzing(meta) => Some(meta),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, SessionState::Analyzing(_))
    }

    pub fn result(&self) -> Option<&VerifyResult> {
        match self {
            SessionState::Completed(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&VerifyError> {
        match self {
            SessionState::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn user_error(&self) -> Option<&'static str> {
        self.error().map(VerifyError::user_message)
    }

    /// Defaults to the empty string until a result exists.
    pub fn label(&self) -> &str {
        self.result().map_or("", |r| r.verdict.label.as_str())
    }

    /// Defaults to 0 until a result exists.
    pub fn confidence_percent(&self) -> f64 {
        self.result().map_or(0.0, |r| r.verdict.confidence)
    }

    /// True only for a completed result with the exact authentic label, so
    /// the authentic treatment can never show before a real verdict arrives.
    pub fn is_authentic(&self) -> bool {
        self.result().is_some_and(|r| r.verdict.is_authentic())
    }
}

/// Monotonic tickets for overlapping submissions: the controller begins a
/// ticket per submit and discards settle messages that are not the latest,
/// so whichever submission was initiated last always wins.
#[derive(Debug, Default)]
pub struct Sequencer {
    latest: u64,
}

impl Sequencer {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// Classifies a settled HTTP reply. The body arrives as text so failure
/// diagnostics and JSON parsing share a single read; raw payloads are
/// logged here and never surfaced to the user.
pub fn classify_reply(
    status: u16,
    content_type: Option<&str>,
    body: &str,
) -> Result<VerifyResult, VerifyError> {
    if !(200..300).contains(&status) {
        log::error!("analysis service replied {status}: {body}");
        return Err(VerifyError::Server { status });
    }

    let is_json = content_type.is_some_and(|ct| ct.contains("application/json"));
    if !is_json {
        let ct = content_type.unwrap_or("none");
        log::error!("non-JSON analysis reply (content-type {ct}): {body}");
        return Err(VerifyError::Format {
            detail: format!("unexpected content type: {ct}"),
        });
    }

    serde_json::from_str::<VerifyResult>(body).map_err(|err| {
        log::error!("unparsable analysis reply: {err}; body: {body}");
        VerifyError::Format {
            detail: err.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::{Evidence, Verdict};

    fn meta() -> UploadMeta {
        UploadMeta {
            name: "holiday.jpg".into(),
            size: 512,
            mime: "image/jpeg".into(),
        }
    }

    fn authentic_body() -> &'static str {
        r#"{
            "status": "success",
            "verdict": {"label": "AUTHENTIC", "confidence": 97.5},
            "evidence": {"heatmap_image": "data:image/png;base64,xyz", "metadata": "EXIF found"}
        }"#
    }

    #[test]
    fn session_starts_idle_with_safe_defaults() {
        let state = SessionState::default();
        assert_eq!(state, SessionState::Idle);
        assert!(!state.is_busy());
        assert!(!state.is_authentic());
        assert_eq!(state.label(), "");
        assert_eq!(state.confidence_percent(), 0.0);
        assert!(state.result().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn select_then_start_reaches_analyzing() {
        let state = SessionState::select(meta()).start();
        assert_eq!(state, SessionState::Analyzing(meta()));
        assert!(state.is_busy());
        assert_eq!(state.selected_file().map(|m| m.name.as_str()), Some("holiday.jpg"));
    }

    #[test]
    fn resubmitting_clears_the_previous_result() {
        let completed = SessionState::Analyzing(meta()).settle(Ok(VerifyResult {
            status: "success".into(),
            verdict: Verdict {
                label: "AUTHENTIC".into(),
                confidence: 88.0,
            },
            evidence: Evidence::default(),
        }));
        assert!(completed.result().is_some());

        let resubmitted = SessionState::select(meta()).start();
        assert!(resubmitted.result().is_none());
        assert!(resubmitted.is_busy());
    }

    #[test]
    fn successful_reply_completes_with_parsed_verdict() {
        let outcome = classify_reply(200, Some("application/json"), authentic_body());
        let state = SessionState::Analyzing(meta()).settle(outcome);

        assert_eq!(state.label(), "AUTHENTIC");
        assert_eq!(state.confidence_percent(), 97.5);
        assert!(state.is_authentic());
        assert!(!state.is_busy());
    }

    #[test]
    fn deepfake_label_is_never_authentic() {
        let body = r#"{"status":"success","verdict":{"label":"DEEPFAKE","confidence":99.9}}"#;
        let outcome = classify_reply(200, Some("application/json"), body);
        let state = SessionState::Analyzing(meta()).settle(outcome);

        assert_eq!(state.label(), "DEEPFAKE");
        assert!(!state.is_authentic());
        assert!(state.result().is_some());
    }

    #[test]
    fn charset_suffix_on_the_content_type_still_counts_as_json() {
        let outcome = classify_reply(
            200,
            Some("application/json; charset=utf-8"),
            authentic_body(),
        );
        assert!(outcome.is_ok());
    }

    #[test]
    fn server_failure_keeps_the_status_and_produces_no_result() {
        let outcome = classify_reply(500, Some("application/json"), "internal error");
        let error = outcome.unwrap_err();
        assert_eq!(error, VerifyError::Server { status: 500 });
        assert_eq!(error.kind(), FailureKind::ServerError);

        let state = SessionState::Analyzing(meta()).settle(Err(error));
        assert!(state.result().is_none());
        assert_eq!(
            state.user_error(),
            Some("Failed to analyze image. Check backend or API URL.")
        );
    }

    #[test]
    fn html_reply_with_success_status_is_a_format_error() {
        let outcome = classify_reply(200, Some("text/html"), "<html>tunnel page</html>");
        assert_eq!(outcome.unwrap_err().kind(), FailureKind::FormatError);
    }

    #[test]
    fn missing_content_type_is_a_format_error() {
        let outcome = classify_reply(200, None, authentic_body());
        assert_eq!(outcome.unwrap_err().kind(), FailureKind::FormatError);
    }

    #[test]
    fn malformed_json_body_is_a_format_error() {
        let outcome = classify_reply(200, Some("application/json"), r#"{"verdict":"#);
        assert_eq!(outcome.unwrap_err().kind(), FailureKind::FormatError);
    }

    #[test]
    fn every_failure_kind_shares_the_fixed_user_message() {
        let errors = [
            VerifyError::Network {
                detail: "connection refused".into(),
            },
            VerifyError::Server { status: 502 },
            VerifyError::Format {
                detail: "truncated".into(),
            },
        ];
        for error in errors {
            assert_eq!(
                error.user_message(),
                "Failed to analyze image. Check backend or API URL."
            );
        }
    }

    #[test]
    fn failure_kinds_display_their_names() {
        assert_eq!(FailureKind::NetworkError.to_string(), "NetworkError");
        assert_eq!(FailureKind::ServerError.to_string(), "ServerError");
        assert_eq!(FailureKind::FormatError.to_string(), "FormatError");
    }

    #[test]
    fn later_submission_wins_over_an_earlier_slow_one() {
        let mut tickets = Sequencer::default();
        let first = tickets.begin();
        let second = tickets.begin();

        let mut state = SessionState::select(meta()).start();

        // Second (latest) submission settles first.
        assert!(tickets.is_current(second));
        state = state.settle(classify_reply(200, Some("application/json"), authentic_body()));
        assert!(state.is_authentic());

        // First submission settles late and must be discarded by the caller.
        assert!(!tickets.is_current(first));
        assert_eq!(state.label(), "AUTHENTIC");
    }

    #[test]
    fn settling_a_non_analyzing_state_changes_nothing() {
        let idle = SessionState::Idle.settle(Err(VerifyError::Server { status: 500 }));
        assert_eq!(idle, SessionState::Idle);
    }
}
