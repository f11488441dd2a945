pub mod session;
pub mod upload;
pub mod verdict;

pub use session::{
    classify_reply, FailureKind, Sequencer, SessionState, UploadMeta, VerifyError,
};
pub use upload::{screen, RejectReason, ACCEPTED_TYPES, MAX_UPLOAD_BYTES};
pub use verdict::{Evidence, Verdict, VerifyResult, AUTHENTIC_LABEL};
