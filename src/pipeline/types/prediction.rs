use serde::{Deserialize, Serialize};

/// A single classifier output: an ImageNet-style label with its confidence.
/// Classifiers return these ordered confidence-descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub confidence: f32,
}

impl Prediction {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}
