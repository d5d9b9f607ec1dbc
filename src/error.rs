use thiserror::Error;

// Main application error type

#[derive(Error, Debug)]
pub enum CaptionError {
    #[error("Analysis Error: {0}")]
    Analysis(#[from] AnalysisError),
    #[error("Generation Error: {0}")]
    Generation(#[from] GenerationError),
}

/// Errors raised while decoding or analyzing an image.
///
/// Low-confidence analysis is not an error; the analyzer degrades to the
/// `Unknown` category instead. Only an image that cannot be decoded or
/// resized to the classifier input shape is fatal to a request.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Image dimensions {0}x{1} cannot be resized to the classifier input")]
    InvalidDimensions(u32, u32),
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Unknown tone: {0}")]
    UnknownTone(#[from] UnknownToneError),
}

/// The caller passed a tone name outside the recognized set. This indicates
/// a caller programming error, not a property of the image.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized caption tone {0:?}")]
pub struct UnknownToneError(pub String);

/// Errors surfaced by a classifier backend. The analyzer treats these as a
/// degraded-prediction condition rather than propagating them to the caller.
#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Inference failed: {0}")]
    Inference(String),
    #[error("Classifier backend unavailable: {0}")]
    Unavailable(String),
}
