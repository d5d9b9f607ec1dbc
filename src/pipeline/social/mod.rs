use indexmap::IndexSet;

use crate::common::hash::fnv1a64;
use crate::config::HashtagBounds;
use crate::pipeline::types::{EnvironmentCategory, SceneDescription};

/// Formats a base caption for social media: category hashtags, emojis, and
/// an engagement phrase. Phrase and emoji selection is keyed off content
/// hashes, never an RNG, so output is reproducible.
pub struct SocialFormatter {
    bounds: HashtagBounds,
}

/// Always appended, independent of the environment category.
const TRENDING_TAGS: &[&str] = &["photooftheday", "instagood"];

/// Padding pool used when dedup leaves the set short, and the category pool
/// for unknown scenes.
const GENERIC_TAGS: &[&str] = &[
    "photography",
    "beautiful",
    "amazing",
    "art",
    "picoftheday",
    "visualsoflife",
];

const ENGAGEMENT_PHRASES: &[&str] = &[
    "Tag someone who would love this! 👇",
    "Double tap if this made your day!",
    "Drop your thoughts in the comments!",
    "Save this one for later!",
    "Share this with a friend who needs to see it!",
];

fn category_tags(category: EnvironmentCategory) -> &'static [&'static str] {
    match category {
        EnvironmentCategory::People => &[
            "portrait",
            "people",
            "human",
            "portraitphotography",
            "faces",
            "candid",
        ],
        EnvironmentCategory::Animal => &[
            "animal",
            "pet",
            "wildlife",
            "animallovers",
            "cute",
            "naturelovers",
        ],
        EnvironmentCategory::Food => &[
            "food",
            "foodie",
            "delicious",
            "yummy",
            "foodphotography",
            "instafood",
        ],
        EnvironmentCategory::Vehicle => &[
            "car",
            "automotive",
            "vehicle",
            "carsofinstagram",
            "drive",
            "horsepower",
        ],
        EnvironmentCategory::Nature => &[
            "nature",
            "naturephotography",
            "landscape",
            "outdoors",
            "earth",
            "wilderness",
        ],
        EnvironmentCategory::Architecture => &[
            "architecture",
            "building",
            "design",
            "architecturelovers",
            "city",
            "lines",
        ],
        EnvironmentCategory::Indoor => &[
            "interior",
            "interiordesign",
            "home",
            "cozy",
            "decor",
            "indoors",
        ],
        EnvironmentCategory::Outdoor => &[
            "outdoor",
            "openair",
            "explore",
            "adventure",
            "streetphotography",
            "wander",
        ],
        EnvironmentCategory::Unknown => GENERIC_TAGS,
    }
}

fn category_emojis(category: EnvironmentCategory) -> &'static [&'static str] {
    match category {
        EnvironmentCategory::People => &["✨", "🌟", "💫", "👥"],
        EnvironmentCategory::Animal => &["🐾", "💕", "🦋", "🌸"],
        EnvironmentCategory::Food => &["😋", "🤤", "✨", "👌"],
        EnvironmentCategory::Vehicle => &["🚗", "⚡", "💨", "🔥"],
        EnvironmentCategory::Nature => &["🌿", "🌅", "🍃", "💚"],
        EnvironmentCategory::Architecture => &["🏛️", "✨", "📐", "🎨"],
        EnvironmentCategory::Indoor => &["🛋️", "🕯️", "✨", "🏡"],
        EnvironmentCategory::Outdoor => &["🌤️", "🏞️", "✨", "🥾"],
        EnvironmentCategory::Unknown => &["✨", "💫", "🌟", "⭐"],
    }
}

impl SocialFormatter {
    pub fn new(bounds: HashtagBounds) -> Self {
        Self { bounds }
    }

    /// Output layout: base caption with emojis, blank line, engagement
    /// phrase, then the hashtag row.
    pub fn format_social(&self, scene: &SceneDescription, base_caption: &str) -> String {
        let hashtags = self.hashtags(scene);
        let emojis = self.emojis(scene);
        let phrase = ENGAGEMENT_PHRASES
            [(fnv1a64(base_caption) % ENGAGEMENT_PHRASES.len() as u64) as usize];

        let row = hashtags
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ");

        format!("{base_caption} {emojis}\n\n{phrase}\n{row}")
    }

    /// Subject tag + category pool + trending tags, deduplicated in
    /// insertion order, padded from the generic pool up to the lower bound
    /// and capped at the upper bound.
    fn hashtags(&self, scene: &SceneDescription) -> Vec<String> {
        let mut tags: IndexSet<String> = IndexSet::new();

        let subject_tag = sanitize_tag(&scene.primary_subject);
        if !subject_tag.is_empty() {
            tags.insert(subject_tag);
        }

        for tag in category_tags(scene.environment_category) {
            tags.insert((*tag).to_string());
        }

        for tag in TRENDING_TAGS {
            tags.insert((*tag).to_string());
        }

        let mut filler = GENERIC_TAGS.iter();
        while tags.len() < self.bounds.min {
            match filler.next() {
                Some(tag) => {
                    tags.insert((*tag).to_string());
                }
                None => break,
            }
        }

        tags.into_iter().take(self.bounds.max).collect()
    }

    fn emojis(&self, scene: &SceneDescription) -> String {
        let pool = category_emojis(scene.environment_category);
        let index = (fnv1a64(&scene.primary_subject) % pool.len() as u64) as usize;
        format!("{}{}", pool[index], pool[(index + 1) % pool.len()])
    }
}

impl Default for SocialFormatter {
    fn default() -> Self {
        Self::new(HashtagBounds::default())
    }
}

/// "Golden Retriever" -> "goldenretriever"
fn sanitize_tag(subject: &str) -> String {
    subject
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use crate::pipeline::types::Lighting;

    use super::*;

    fn scene(category: EnvironmentCategory, subject: &str) -> SceneDescription {
        SceneDescription {
            primary_subject: subject.to_string(),
            secondary_subjects: Vec::new(),
            environment_category: category,
            lighting: Lighting::Bright,
            mood_tags: Vec::new(),
            composition_tags: Vec::new(),
            confidence: 0.7,
        }
    }

    fn hashtag_tokens(output: &str) -> Vec<&str> {
        output
            .split_whitespace()
            .filter(|token| token.starts_with('#'))
            .collect()
    }

    #[test]
    fn hashtag_count_stays_within_bounds() {
        let formatter = SocialFormatter::default();
        for (category, subject) in [
            (EnvironmentCategory::Animal, "golden retriever"),
            (EnvironmentCategory::Food, "pizza"),
            (EnvironmentCategory::Unknown, "subject"),
        ] {
            let output = formatter.format_social(&scene(category, subject), "Base caption");
            let count = hashtag_tokens(&output).len();
            assert!((8..=10).contains(&count), "{count} hashtags for {subject}");
        }
    }

    #[test]
    fn subject_colliding_with_pool_tag_still_meets_lower_bound() {
        let formatter = SocialFormatter::default();
        let output = formatter.format_social(
            &scene(EnvironmentCategory::Nature, "nature"),
            "Base caption",
        );
        assert!(hashtag_tokens(&output).len() >= 8);
    }

    #[test]
    fn output_contains_an_emoji_and_engagement_phrase() {
        let formatter = SocialFormatter::default();
        let output =
            formatter.format_social(&scene(EnvironmentCategory::Animal, "puppy"), "So cute");

        assert!(output.chars().any(|c| c as u32 >= 0x1F000 || c == '✨'));
        let phrase_line = output.split('\n').nth(2).unwrap();
        assert!(ENGAGEMENT_PHRASES.contains(&phrase_line));
    }

    #[test]
    fn layout_is_base_blank_phrase_hashtags() {
        let formatter = SocialFormatter::default();
        let output = formatter.format_social(&scene(EnvironmentCategory::Food, "pizza"), "Yum");
        let lines: Vec<&str> = output.split('\n').collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Yum"));
        assert!(lines[1].is_empty());
        assert!(lines[3].starts_with('#'));
    }

    #[test]
    fn formatting_is_deterministic() {
        let formatter = SocialFormatter::default();
        let s = scene(EnvironmentCategory::Vehicle, "sports car");
        assert_eq!(
            formatter.format_social(&s, "Fast"),
            formatter.format_social(&s, "Fast")
        );
    }
}
