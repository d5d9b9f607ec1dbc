pub mod analyze;
pub mod generate;
mod service;
pub mod social;
pub mod types;

pub use analyze::SceneAnalyzer;
pub use generate::TemplateEngine;
pub use service::{CaptionPipeline, CaptionService};
pub use social::SocialFormatter;
