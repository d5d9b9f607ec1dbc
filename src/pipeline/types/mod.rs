mod caption;
mod prediction;
mod request;
mod scene;

pub use caption::{CaptionSet, Tone};
pub use prediction::Prediction;
pub use request::CaptionRequest;
pub use scene::{EnvironmentCategory, Lighting, SceneDescription};
