mod keywords;
mod visual;

use image::{imageops::FilterType, DynamicImage};
use tracing::{debug, warn};

use crate::classifier::ClassifierHandle;
use crate::config::PipelineConfig;
use crate::error::AnalysisError;
use crate::pipeline::types::{EnvironmentCategory, Lighting, Prediction, SceneDescription};

use keywords::{keywords_for, NON_DESCRIPTIVE_LABELS};
use visual::VisualStats;

/// Derives a `SceneDescription` from an image using the injected classifier
/// plus pixel statistics.
///
/// The only fatal condition is an image that cannot be decoded or resized.
/// A failing classifier or an ambiguous prediction set degrades to the
/// `Unknown` category so the caller never sees a crash for a valid upload.
pub struct SceneAnalyzer {
    classifier: ClassifierHandle,
    config: PipelineConfig,
}

impl SceneAnalyzer {
    pub fn new(classifier: ClassifierHandle, config: PipelineConfig) -> Self {
        Self { classifier, config }
    }

    /// Decode raw upload bytes (JPEG/PNG/WebP) and analyze the result.
    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<SceneDescription, AnalysisError> {
        let image = image::load_from_memory(bytes)?;
        self.analyze(&image)
    }

    pub fn analyze(&self, image: &DynamicImage) -> Result<SceneDescription, AnalysisError> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(AnalysisError::InvalidDimensions(width, height));
        }

        let (input_w, input_h) = self.classifier.input_size();
        let resized = image
            .resize_exact(input_w, input_h, FilterType::Triangle)
            .to_rgb8();

        let predictions = match self.classifier.predict(&resized) {
            Ok(mut predictions) => {
                predictions.truncate(self.config.top_k);
                predictions
            }
            Err(err) => {
                warn!(error = %err, "classifier unavailable, degrading to unknown scene");
                Vec::new()
            }
        };

        let stats = visual::measure(&resized, self.config.sample_step);
        let aspect = width as f32 / height as f32;

        let (environment_category, confidence) = self.categorize(&predictions);
        let primary_subject = self.primary_subject(&predictions);
        let secondary_subjects = self.secondary_subjects(&predictions, &primary_subject);
        let lighting = self.classify_lighting(&stats);
        let mood_tags = self.mood_tags(lighting, &stats);
        let composition_tags = self.composition_tags(aspect, &stats);

        debug!(
            category = environment_category.as_str(),
            confidence,
            subject = %primary_subject,
            lighting = lighting.as_str(),
            "scene analyzed"
        );

        Ok(SceneDescription {
            primary_subject,
            secondary_subjects,
            environment_category,
            lighting,
            mood_tags,
            composition_tags,
            confidence,
        })
    }

    /// Weighted keyword scoring: each prediction contributes
    /// confidence x 1/(rank+1) to every category one of its keywords hits.
    /// Ties keep the earlier entry of the priority ordering.
    fn categorize(&self, predictions: &[Prediction]) -> (EnvironmentCategory, f32) {
        let mut best = EnvironmentCategory::Unknown;
        let mut best_score = 0.0f32;

        for category in EnvironmentCategory::priority_order() {
            let keywords = keywords_for(category);
            let mut score = 0.0f32;

            for (rank, prediction) in predictions.iter().enumerate() {
                let label = prediction.label.to_ascii_lowercase();
                if keywords.iter().any(|keyword| label.contains(keyword)) {
                    score += prediction.confidence * (1.0 / (rank as f32 + 1.0));
                }
            }

            if score > best_score {
                best = category;
                best_score = score;
            }
        }

        if best_score >= self.config.category_threshold {
            (best, best_score.min(1.0))
        } else {
            (EnvironmentCategory::Unknown, best_score.min(1.0))
        }
    }

    fn primary_subject(&self, predictions: &[Prediction]) -> String {
        predictions
            .iter()
            .find(|p| {
                p.confidence >= self.config.min_subject_confidence
                    && !NON_DESCRIPTIVE_LABELS.contains(&p.label.as_str())
            })
            .map(|p| clean_label(&p.label))
            .unwrap_or_else(|| "subject".to_string())
    }

    fn secondary_subjects(&self, predictions: &[Prediction], primary: &str) -> Vec<String> {
        let mut subjects = Vec::new();
        for prediction in predictions {
            if prediction.confidence < self.config.secondary_confidence {
                continue;
            }
            if NON_DESCRIPTIVE_LABELS.contains(&prediction.label.as_str()) {
                continue;
            }
            let label = clean_label(&prediction.label);
            if label != primary && !subjects.contains(&label) {
                subjects.push(label);
            }
            if subjects.len() == 3 {
                break;
            }
        }
        subjects
    }

    fn classify_lighting(&self, stats: &VisualStats) -> Lighting {
        let thresholds = &self.config.luminance;
        if stats.mean_luma >= thresholds.bright_min {
            Lighting::Bright
        } else if stats.mean_luma <= thresholds.dim_max {
            Lighting::Dim
        } else if stats.luma_stddev >= thresholds.dramatic_stddev {
            Lighting::Dramatic
        } else {
            Lighting::Neutral
        }
    }

    fn mood_tags(&self, lighting: Lighting, stats: &VisualStats) -> Vec<String> {
        let mut tags = Vec::new();
        match lighting {
            Lighting::Bright => tags.push("uplifting".to_string()),
            Lighting::Dim => tags.push("moody".to_string()),
            Lighting::Dramatic => tags.push("dramatic".to_string()),
            Lighting::Neutral => {}
        }

        let margin = self.config.luminance.warmth_margin;
        if stats.warmth > margin {
            tags.push("cozy".to_string());
        } else if stats.warmth < -margin {
            tags.push("serene".to_string());
        }

        tags
    }

    fn composition_tags(&self, aspect: f32, stats: &VisualStats) -> Vec<String> {
        let thresholds = &self.config.composition;
        let mut tags = Vec::new();

        if aspect >= thresholds.panoramic_aspect {
            tags.push("panoramic".to_string());
        } else if aspect <= thresholds.portrait_aspect {
            tags.push("portrait".to_string());
        }

        if stats.edge_density >= thresholds.detailed_edge_density {
            tags.push("detailed".to_string());
        }

        if stats.mean_saturation >= thresholds.vibrant_saturation {
            tags.push("vibrant".to_string());
        }

        tags
    }
}

/// "golden_retriever" -> "golden retriever"
fn clean_label(label: &str) -> String {
    label.to_ascii_lowercase().replace('_', " ")
}
