pub mod classifier;
pub mod common;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;

pub use classifier::{ClassifierHandle, FixedClassifier, ImageClassifier};
pub use config::PipelineConfig;
pub use error::{
    AnalysisError, CaptionError, ClassifierError, GenerationError, UnknownToneError,
};
pub use pipeline::types::{
    CaptionRequest, CaptionSet, EnvironmentCategory, Lighting, Prediction, SceneDescription, Tone,
};
pub use pipeline::{CaptionPipeline, CaptionService, SceneAnalyzer, SocialFormatter, TemplateEngine};
