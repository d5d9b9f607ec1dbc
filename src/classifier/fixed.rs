use image::RgbImage;

use crate::classifier::ImageClassifier;
use crate::error::ClassifierError;
use crate::pipeline::types::Prediction;

/// Deterministic classifier stand-in for development and tests, usable when
/// no model runtime is available. Returns a canned prediction list
/// regardless of input.
#[derive(Debug, Clone)]
pub struct FixedClassifier {
    predictions: Vec<Prediction>,
    input_size: (u32, u32),
}

impl FixedClassifier {
    /// InceptionV3 input shape.
    pub const DEFAULT_INPUT_SIZE: (u32, u32) = (299, 299);

    pub fn new(predictions: Vec<Prediction>) -> Self {
        Self {
            predictions,
            input_size: Self::DEFAULT_INPUT_SIZE,
        }
    }

    /// Stand-in with no predictions at all; the analyzer must degrade to
    /// the unknown category when wired to this.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn with_input_size(mut self, width: u32, height: u32) -> Self {
        self.input_size = (width, height);
        self
    }
}

impl ImageClassifier for FixedClassifier {
    fn input_size(&self) -> (u32, u32) {
        self.input_size
    }

    fn predict(&self, _image: &RgbImage) -> Result<Vec<Prediction>, ClassifierError> {
        Ok(self.predictions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageBuffer;

    #[test]
    fn returns_canned_predictions_for_any_image() {
        let classifier = FixedClassifier::new(vec![Prediction::new("golden_retriever", 0.8)]);
        let img: RgbImage = ImageBuffer::from_pixel(8, 8, image::Rgb([0, 0, 0]));
        let preds = classifier.predict(&img).unwrap();
        assert_eq!(preds.len(), 1);
        assert_eq!(preds[0].label, "golden_retriever");
    }
}
