pub mod client;
pub mod config;
pub mod info;
pub mod media;
pub mod state;

use serde::{Deserialize, Serialize};

pub use client::{PredictClient, PredictError};
pub use config::ApiConfig;
pub use info::{FlowerInfo, KNOWN_CLASSES, display_name, flower_info};
pub use media::{Preview, data_uri, load_preview, mime_for_path};
pub use state::{Command, Event, Outcome, PageState, Selection};

/// Prediction returned by the remote classification endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Category identifier as reported by the endpoint (lowercase for the
    /// known set, but treated as an open string).
    pub class: String,
    /// Model confidence in [0,1].
    pub confidence: f32,
}

/// Coarse confidence bucket used to pick visual emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    /// High at or above 0.80, medium at or above 0.60, low below that.
    pub fn from_confidence(confidence: f32) -> Self {
        if confidence >= 0.80 {
            ConfidenceTier::High
        } else if confidence >= 0.60 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }
}

impl Prediction {
    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::from_confidence(self.confidence)
    }

    /// Confidence as a percentage string with one decimal, e.g. "92.0%".
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.80, ConfidenceTier::High)]
    #[case(0.92, ConfidenceTier::High)]
    #[case(1.0, ConfidenceTier::High)]
    #[case(0.7999, ConfidenceTier::Medium)]
    #[case(0.60, ConfidenceTier::Medium)]
    #[case(0.5999, ConfidenceTier::Low)]
    #[case(0.0, ConfidenceTier::Low)]
    fn tier_boundaries(#[case] confidence: f32, #[case] expected: ConfidenceTier) {
        assert_eq!(ConfidenceTier::from_confidence(confidence), expected);
    }

    #[test]
    fn confidence_percent_has_one_decimal() {
        let p = Prediction {
            class: "rose".into(),
            confidence: 0.92,
        };
        assert_eq!(p.confidence_percent(), "92.0%");

        let p = Prediction {
            class: "tulip".into(),
            confidence: 0.555,
        };
        assert_eq!(p.confidence_percent(), "55.5%");
    }

    #[test]
    fn prediction_deserializes_from_endpoint_json() {
        let p: Prediction = serde_json::from_str(r#"{"class":"rose","confidence":0.92}"#).unwrap();
        assert_eq!(p.class, "rose");
        approx::assert_relative_eq!(p.confidence, 0.92);
        assert_eq!(p.tier(), ConfidenceTier::High);
    }
}
