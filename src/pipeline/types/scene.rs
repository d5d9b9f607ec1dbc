use serde::{Deserialize, Serialize};

/// Fixed set of scene buckets used to select templates and hashtags.
///
/// `priority_order` doubles as the tie-break order when two categories end
/// up with the same weighted keyword score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentCategory {
    People,
    Animal,
    Food,
    Vehicle,
    Nature,
    Architecture,
    Indoor,
    Outdoor,
    Unknown,
}

impl EnvironmentCategory {
    /// Scoreable categories, highest tie-break priority first. `Unknown` is
    /// a fallback only and never scored.
    pub const fn priority_order() -> [EnvironmentCategory; 8] {
        [
            EnvironmentCategory::People,
            EnvironmentCategory::Animal,
            EnvironmentCategory::Food,
            EnvironmentCategory::Vehicle,
            EnvironmentCategory::Nature,
            EnvironmentCategory::Architecture,
            EnvironmentCategory::Indoor,
            EnvironmentCategory::Outdoor,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnvironmentCategory::People => "people",
            EnvironmentCategory::Animal => "animal",
            EnvironmentCategory::Food => "food",
            EnvironmentCategory::Vehicle => "vehicle",
            EnvironmentCategory::Nature => "nature",
            EnvironmentCategory::Architecture => "architecture",
            EnvironmentCategory::Indoor => "indoor",
            EnvironmentCategory::Outdoor => "outdoor",
            EnvironmentCategory::Unknown => "unknown",
        }
    }

    /// Adjective used to fill the environment slot of caption templates.
    pub fn scene_descriptor(&self) -> &'static str {
        match self {
            EnvironmentCategory::People => "portrait",
            EnvironmentCategory::Animal => "wildlife",
            EnvironmentCategory::Food => "culinary",
            EnvironmentCategory::Vehicle => "automotive",
            EnvironmentCategory::Nature => "natural",
            EnvironmentCategory::Architecture => "architectural",
            EnvironmentCategory::Indoor => "interior",
            EnvironmentCategory::Outdoor => "open-air",
            EnvironmentCategory::Unknown => "captivating",
        }
    }
}

/// Lighting bucket derived from luminance statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lighting {
    Bright,
    Dim,
    Dramatic,
    Neutral,
}

impl Lighting {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lighting::Bright => "bright",
            Lighting::Dim => "dim",
            Lighting::Dramatic => "dramatic",
            Lighting::Neutral => "neutral",
        }
    }

    /// Phrase used when a template wants prose rather than the bare bucket.
    pub fn phrase(&self) -> &'static str {
        match self {
            Lighting::Bright => "bathed in radiant light",
            Lighting::Dim => "wrapped in soft shadow",
            Lighting::Dramatic => "lit with dramatic contrast",
            Lighting::Neutral => "captured in natural light",
        }
    }
}

/// Structured summary of one image, derived once by the analyzer and
/// immutable afterwards. Tag lists are deduplicated and kept in derivation
/// order so downstream generation stays deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub primary_subject: String,
    pub secondary_subjects: Vec<String>,
    pub environment_category: EnvironmentCategory,
    pub lighting: Lighting,
    pub mood_tags: Vec<String>,
    pub composition_tags: Vec<String>,
    pub confidence: f32,
}

impl SceneDescription {
    /// Generic description used when predictions are empty or nothing
    /// crosses the category threshold. Ambiguous images degrade to this
    /// instead of surfacing an error.
    pub fn fallback() -> Self {
        Self {
            primary_subject: "subject".to_string(),
            secondary_subjects: Vec::new(),
            environment_category: EnvironmentCategory::Unknown,
            lighting: Lighting::Neutral,
            mood_tags: Vec::new(),
            composition_tags: Vec::new(),
            confidence: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_always_carries_a_category() {
        let scene = SceneDescription::fallback();
        assert_eq!(scene.environment_category, EnvironmentCategory::Unknown);
        assert_eq!(scene.primary_subject, "subject");
    }

    #[test]
    fn priority_order_excludes_unknown() {
        assert!(!EnvironmentCategory::priority_order()
            .contains(&EnvironmentCategory::Unknown));
    }
}
