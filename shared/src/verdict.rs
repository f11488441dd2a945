use serde::{Deserialize, Serialize};

/// The one label the service uses for untampered images. Anything else,
/// including an empty label, renders as non-authentic.
pub const AUTHENTIC_LABEL: &str = "AUTHENTIC";

/// Parsed reply from the analysis service. Only ever built from a 2xx JSON
/// body; failed or malformed replies become a `VerifyError` instead.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VerifyResult {
    pub status: String,
    pub verdict: Verdict,
    #[serde(default)]
    pub evidence: Evidence,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Verdict {
    pub label: String,
    /// Percentage in [0, 100] as reported by the service.
    pub confidence: f64,
}

/// Supporting artifacts for a verdict. Both fields may be absent or empty.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Evidence {
    #[serde(default)]
    pub heatmap_image: String,
    #[serde(default)]
    pub metadata: String,
}

impl Verdict {
    pub fn is_authentic(&self) -> bool {
        self.label == AUTHENTIC_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evidence_fields_default_when_absent() {
        let parsed: VerifyResult = serde_json::from_str(
            r#"{"status":"success","verdict":{"label":"AUTHENTIC","confidence":97.5}}"#,
        )
        .unwrap();
        assert_eq!(parsed.evidence, Evidence::default());
        assert!(parsed.evidence.heatmap_image.is_empty());
    }

    #[test]
    fn authenticity_requires_exact_label() {
        let authentic = Verdict {
            label: "AUTHENTIC".into(),
            confidence: 51.0,
        };
        assert!(authentic.is_authentic());

        for label in ["authentic", "Authentic", "DEEPFAKE", "AI_GENERATED", ""] {
            let verdict = Verdict {
                label: label.into(),
                confidence: 99.9,
            };
            assert!(!verdict.is_authentic(), "label {label:?} must not pass");
        }
    }
}
