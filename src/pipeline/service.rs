use std::pin::Pin;
use std::sync::Arc;

use futures::task::{Context, Poll};
use futures::Future;
use image::DynamicImage;
use tower::Service;
use tracing::info;

use crate::classifier::ClassifierHandle;
use crate::config::PipelineConfig;
use crate::error::CaptionError;
use crate::pipeline::analyze::SceneAnalyzer;
use crate::pipeline::generate::TemplateEngine;
use crate::pipeline::social::SocialFormatter;
use crate::pipeline::types::{CaptionRequest, CaptionSet, Tone};

/// The full caption pipeline: analyzer, template engine, social formatter,
/// run sequentially on the calling thread. No internal retries or timeouts;
/// callers that need a deadline wrap the service in a timeout layer.
pub struct CaptionPipeline {
    analyzer: SceneAnalyzer,
    engine: TemplateEngine,
}

impl CaptionPipeline {
    pub fn new(classifier: ClassifierHandle, config: PipelineConfig) -> Self {
        let engine = TemplateEngine::new(SocialFormatter::new(config.hashtags.clone()));
        Self {
            analyzer: SceneAnalyzer::new(classifier, config),
            engine,
        }
    }

    pub fn caption(&self, image: &DynamicImage, tone: Tone) -> Result<CaptionSet, CaptionError> {
        let scene = self.analyzer.analyze(image)?;
        let set = self.engine.generate(&scene, tone);
        info!(
            tone = tone.as_str(),
            category = scene.environment_category.as_str(),
            "caption request completed"
        );
        Ok(set)
    }

    /// Decode an uploaded file and caption it in one step.
    pub fn caption_bytes(&self, bytes: &[u8], tone: Tone) -> Result<CaptionSet, CaptionError> {
        let scene = self.analyzer.analyze_bytes(bytes)?;
        Ok(self.engine.generate(&scene, tone))
    }

    pub fn analyzer(&self) -> &SceneAnalyzer {
        &self.analyzer
    }

    pub fn engine(&self) -> &TemplateEngine {
        &self.engine
    }
}

/// `tower::Service` wrapper around the pipeline so request handlers can
/// compose it with timeout or concurrency layers.
#[derive(Clone)]
pub struct CaptionService {
    inner: Arc<CaptionPipeline>,
}

impl CaptionService {
    pub fn new(pipeline: CaptionPipeline) -> Self {
        Self {
            inner: Arc::new(pipeline),
        }
    }
}

impl Service<CaptionRequest> for CaptionService {
    type Response = CaptionSet;
    type Error = CaptionError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: CaptionRequest) -> Self::Future {
        let inner = self.inner.clone();

        Box::pin(async move { inner.caption(&request.image, request.tone) })
    }
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, ImageBuffer, Rgb};

    use crate::classifier::FixedClassifier;
    use crate::pipeline::types::Prediction;

    use super::*;

    fn pipeline() -> CaptionPipeline {
        CaptionPipeline::new(
            Arc::new(FixedClassifier::new(vec![
                Prediction::new("golden_retriever", 0.8),
                Prediction::new("tennis_ball", 0.1),
            ])),
            PipelineConfig::default(),
        )
    }

    fn test_image() -> DynamicImage {
        DynamicImage::ImageRgb8(ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(
            100,
            100,
            Rgb([200, 180, 140]),
        ))
    }

    #[test]
    fn pipeline_runs_end_to_end() {
        let set = pipeline().caption(&test_image(), Tone::Casual).unwrap();
        assert!(set.main.contains("golden retriever"));
        assert!(set.social.is_none());
    }

    #[test]
    fn social_tone_carries_formatted_caption() {
        let set = pipeline().caption(&test_image(), Tone::Social).unwrap();
        let social = set.social.unwrap();
        assert!(social.split_whitespace().any(|t| t.starts_with('#')));
    }

    #[tokio::test]
    async fn caption_service_answers_requests() {
        let mut service = CaptionService::new(pipeline());
        let request = CaptionRequest::new(test_image(), Tone::Professional);
        let response = service.call(request).await.unwrap();
        assert!(response.main.contains("golden retriever"));
    }
}
