mod fixed;

pub use fixed::FixedClassifier;

use std::sync::Arc;

use image::RgbImage;

use crate::error::ClassifierError;
use crate::pipeline::types::Prediction;

/// Seam to the pretrained image classifier. The model is loaded once at
/// process start and injected into the analyzer as a shared handle; this
/// crate never trains or fine-tunes it.
///
/// `predict` must be safe to call concurrently; implementations hold the
/// loaded weights as read-only state.
pub trait ImageClassifier: Send + Sync {
    /// Input shape the classifier expects, width x height. The analyzer is
    /// responsible for resizing uploads to this shape.
    fn input_size(&self) -> (u32, u32);

    /// Top-K class predictions for an already-resized image, ordered
    /// confidence-descending.
    fn predict(&self, image: &RgbImage) -> Result<Vec<Prediction>, ClassifierError>;
}

/// Process-wide classifier handle, created once and held for the process
/// lifetime.
pub type ClassifierHandle = Arc<dyn ImageClassifier>;
