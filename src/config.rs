use serde::Deserialize;

/// Tunable parameters for the caption pipeline. The defaults are the
/// documented reference values; see DESIGN.md for how each was chosen.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Number of classifier predictions considered by the analyzer.
    pub top_k: usize,
    /// Minimum weighted keyword score a category must reach; below this the
    /// scene falls back to `Unknown`.
    pub category_threshold: f32,
    /// Predictions below this confidence are never promoted to primary subject.
    pub min_subject_confidence: f32,
    /// Predictions below this confidence are dropped from secondary subjects.
    pub secondary_confidence: f32,
    pub luminance: LuminanceThresholds,
    pub composition: CompositionThresholds,
    pub hashtags: HashtagBounds,
    /// Pixel sampling stride for luminance/saturation statistics.
    pub sample_step: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LuminanceThresholds {
    /// Mean Rec. 709 luminance at or above this reads as bright.
    pub bright_min: f32,
    /// Mean luminance at or below this reads as dim.
    pub dim_max: f32,
    /// Luminance standard deviation above this reads as dramatic.
    pub dramatic_stddev: f32,
    /// Warm/cool classification margin between mean red and mean blue.
    pub warmth_margin: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CompositionThresholds {
    /// Width/height ratio at or above this tags the image "panoramic".
    pub panoramic_aspect: f32,
    /// Width/height ratio at or below this tags the image "portrait".
    pub portrait_aspect: f32,
    /// Fraction of sampled neighbor pairs with a strong luminance step.
    pub detailed_edge_density: f32,
    /// Mean saturation above this tags the image "vibrant".
    pub vibrant_saturation: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HashtagBounds {
    pub min: usize,
    pub max: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            top_k: 10,
            category_threshold: 0.15,
            min_subject_confidence: 0.05,
            secondary_confidence: 0.1,
            luminance: LuminanceThresholds::default(),
            composition: CompositionThresholds::default(),
            hashtags: HashtagBounds::default(),
            sample_step: 4,
        }
    }
}

impl Default for LuminanceThresholds {
    fn default() -> Self {
        Self {
            bright_min: 170.0,
            dim_max: 70.0,
            dramatic_stddev: 60.0,
            warmth_margin: 15.0,
        }
    }
}

impl Default for CompositionThresholds {
    fn default() -> Self {
        Self {
            panoramic_aspect: 2.0,
            portrait_aspect: 0.5,
            detailed_edge_density: 0.18,
            vibrant_saturation: 0.45,
        }
    }
}

impl Default for HashtagBounds {
    fn default() -> Self {
        Self { min: 8, max: 10 }
    }
}

impl PipelineConfig {
    /// Load from an optional config file plus `SMART_CAPTION_*` environment
    /// overrides, falling back to defaults for anything unset.
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("SMART_CAPTION").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_category_threshold(mut self, threshold: f32) -> Self {
        self.category_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), String> {
        if self.top_k == 0 {
            return Err("top_k must be greater than 0".to_string());
        }

        if !(0.0..=1.0).contains(&self.category_threshold) {
            return Err("category_threshold must be between 0.0 and 1.0".to_string());
        }

        if self.sample_step == 0 {
            return Err("sample_step must be greater than 0".to_string());
        }

        if self.hashtags.min == 0 || self.hashtags.min > self.hashtags.max {
            return Err("hashtag bounds must satisfy 0 < min <= max".to_string());
        }

        if self.luminance.dim_max >= self.luminance.bright_min {
            return Err("dim_max must be below bright_min".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(PipelineConfig::default().validate().is_ok());
    }

    #[test]
    fn invalid_threshold_is_rejected() {
        let mut cfg = PipelineConfig::default();
        cfg.category_threshold = 1.5;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let cfg: PipelineConfig =
            serde_json::from_str(r#"{"top_k": 5, "hashtags": {"min": 9}}"#).unwrap();
        assert_eq!(cfg.top_k, 5);
        assert_eq!(cfg.hashtags.min, 9);
        assert_eq!(cfg.hashtags.max, 10);
        assert_eq!(cfg.category_threshold, 0.15);
    }
}
