mod vocabulary;

use tracing::debug;

use crate::common::hash::pick;
use crate::error::UnknownToneError;
use crate::pipeline::social::SocialFormatter;
use crate::pipeline::types::{CaptionSet, SceneDescription, Tone};

use vocabulary::{bank, DEFAULT_CAPTIONS, POETIC_METAPHORS, SOCIAL_STARTERS};

/// Renders a `CaptionSet` from a `SceneDescription` and a tone.
///
/// Generation is pure template substitution: vocabulary picks are seeded by
/// scene fields, so identical input always yields byte-identical output.
pub struct TemplateEngine {
    formatter: SocialFormatter,
}

impl TemplateEngine {
    pub fn new(formatter: SocialFormatter) -> Self {
        Self { formatter }
    }

    /// Parse a tone name first, then generate. An unrecognized name yields
    /// `UnknownToneError` and no partial caption set.
    pub fn generate_named(
        &self,
        scene: &SceneDescription,
        tone_name: &str,
    ) -> Result<CaptionSet, UnknownToneError> {
        let tone = tone_name.parse::<Tone>()?;
        Ok(self.generate(scene, tone))
    }

    pub fn generate(&self, scene: &SceneDescription, tone: Tone) -> CaptionSet {
        let main = self.render_main(scene, tone);

        // Fixed approach priority: subject, mood, artistic, context. An
        // approach is skipped when its required scene field is empty.
        let mut alternatives = Vec::new();
        alternatives.push(self.subject_focused(scene, tone));
        if !scene.mood_tags.is_empty() {
            alternatives.push(self.mood_focused(scene, tone));
        }
        if !scene.composition_tags.is_empty() {
            alternatives.push(self.artistic_focused(scene, tone));
        }
        if !scene.secondary_subjects.is_empty() {
            alternatives.push(self.context_focused(scene, tone));
        }
        dedup_case_insensitive(&main, &mut alternatives);

        let social = match tone {
            Tone::Social => Some(self.formatter.format_social(scene, &main)),
            _ => None,
        };

        debug!(
            tone = tone.as_str(),
            alternatives = alternatives.len(),
            "caption set generated"
        );

        CaptionSet {
            main,
            alternatives,
            social,
        }
    }

    /// Generic caption for callers that need something to show after a
    /// failed request.
    pub fn fallback_caption(&self, tone: Tone) -> String {
        pick(DEFAULT_CAPTIONS, tone.as_str()).to_string()
    }

    fn render_main(&self, scene: &SceneDescription, tone: Tone) -> String {
        let subject = scene.primary_subject.as_str();
        let env = scene.environment_category.scene_descriptor();
        let bank = bank(tone);

        match tone {
            Tone::Creative => format!(
                "A {} {} in this {} scene, {}",
                pick(bank.style_words, subject),
                subject,
                env,
                scene.lighting.phrase(),
            ),
            Tone::Professional => format!(
                "Professional {} photography in a {} setting, {} executed with {} lighting",
                subject,
                env,
                pick(bank.modifiers, subject),
                scene.lighting.as_str(),
            ),
            Tone::Casual => format!(
                "Really {} {}! Love the {} vibes and that {} light",
                pick(bank.style_words, subject),
                subject,
                env,
                scene.lighting.as_str(),
            ),
            Tone::Poetic => format!(
                "{} captured like {}, {} in this {} scene",
                title_case(subject),
                pick(POETIC_METAPHORS, subject),
                scene.lighting.phrase(),
                env,
            ),
            Tone::Social => format!(
                "{} this {} {}! {} goals right here",
                pick(SOCIAL_STARTERS, subject),
                pick(bank.style_words, subject),
                subject,
                title_case(env),
            ),
            Tone::Descriptive => {
                let mut parts = vec![
                    format!("This image features {subject}"),
                    format!("set in a {env} scene"),
                    format!("captured with {} lighting", scene.lighting.as_str()),
                ];
                if let Some(mood) = scene.mood_tags.first() {
                    parts.push(format!("carrying a {mood} mood"));
                }
                let mut caption = parts.join(", ");
                caption.push('.');
                caption
            }
        }
    }

    fn subject_focused(&self, scene: &SceneDescription, tone: Tone) -> String {
        let subject = scene.primary_subject.as_str();
        let env = scene.environment_category.scene_descriptor();
        let bank = bank(tone);

        match tone {
            Tone::Creative => format!(
                "An extraordinary {} perfectly positioned in a {} scene, {} composed",
                subject,
                env,
                pick(bank.modifiers, subject),
            ),
            Tone::Professional => format!(
                "Professional {} photography demonstrating {} and superior composition",
                subject,
                pick(bank.style_words, subject),
            ),
            Tone::Casual => format!(
                "Loving this {}! Such a {} shot with amazing details",
                subject,
                pick(bank.style_words, subject),
            ),
            Tone::Poetic => format!(
                "Where {} meets artistry, magic happens in whispers of light and shadow",
                subject,
            ),
            Tone::Social => format!(
                "{} perfection! {} stunning",
                title_case(subject),
                title_case(pick(bank.modifiers, subject)),
            ),
            Tone::Descriptive => format!(
                "Detailed capture of {subject} showing clear visual elements and composition",
            ),
        }
    }

    fn mood_focused(&self, scene: &SceneDescription, tone: Tone) -> String {
        let subject = scene.primary_subject.as_str();
        let lighting = scene.lighting.as_str();
        // Callers guarantee mood_tags is non-empty.
        let mood = scene.mood_tags[0].as_str();

        match tone {
            Tone::Creative => format!(
                "A {mood} capture of {subject} where {lighting} light creates an enchanting atmosphere",
            ),
            Tone::Professional => format!(
                "Expert use of {lighting} lighting creates a {mood} mood in this {subject} photograph",
            ),
            Tone::Casual => format!(
                "The lighting in this {subject} shot is incredible! Such {mood} vibes",
            ),
            Tone::Poetic => format!(
                "In gentle {lighting} light, {subject} whispers stories of {mood} beauty",
            ),
            Tone::Social => format!(
                "{} {subject} energy! This lighting is everything",
                title_case(mood),
            ),
            Tone::Descriptive => format!(
                "{} photographed with {lighting} lighting, creating a {mood} visual atmosphere",
                title_case(subject),
            ),
        }
    }

    fn artistic_focused(&self, scene: &SceneDescription, tone: Tone) -> String {
        let subject = scene.primary_subject.as_str();
        // Callers guarantee composition_tags is non-empty.
        let comp = scene.composition_tags[0].as_str();

        match tone {
            Tone::Creative => {
                format!("An artistic study of {subject} built on its {comp} composition")
            }
            Tone::Professional => {
                format!("A {comp} composition showcases {subject} with professional-grade precision")
            }
            Tone::Casual => format!("This {subject} has such a {comp} look! Really love the style"),
            Tone::Poetic => format!("Through a {comp} frame, {subject} becomes poetry in visual harmony"),
            Tone::Social => format!("Artistic {subject} goals! That {comp} composition though"),
            Tone::Descriptive => {
                format!("Analytical view of {subject} demonstrating a {comp} composition")
            }
        }
    }

    fn context_focused(&self, scene: &SceneDescription, tone: Tone) -> String {
        let subject = scene.primary_subject.as_str();
        // Callers guarantee secondary_subjects is non-empty.
        let others = scene
            .secondary_subjects
            .iter()
            .take(2)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" and ");

        match tone {
            Tone::Creative => format!(
                "A storytelling capture of {subject} with {others}, weaving narrative through visual elements",
            ),
            Tone::Professional => {
                format!("Contextual {subject} photography with {others} framed alongside")
            }
            Tone::Casual => {
                format!("Great shot of {subject} with {others}! Love how everything comes together")
            }
            Tone::Poetic => format!("In quiet harmony, {subject} rests among {others}"),
            Tone::Social => format!("{} vibes with {others}! Perfect scene", title_case(subject)),
            Tone::Descriptive => format!("Comprehensive view of {subject} with {others} also visible"),
        }
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new(SocialFormatter::default())
    }
}

/// Case-insensitive dedup against the main caption and between alternatives,
/// preserving approach order.
fn dedup_case_insensitive(main: &str, alternatives: &mut Vec<String>) {
    let mut seen = vec![main.to_lowercase()];
    alternatives.retain(|caption| {
        let key = caption.to_lowercase();
        if seen.contains(&key) {
            false
        } else {
            seen.push(key);
            true
        }
    });
}

fn title_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use crate::pipeline::types::{EnvironmentCategory, Lighting};

    use super::*;

    fn golden_retriever_scene() -> SceneDescription {
        SceneDescription {
            primary_subject: "golden retriever".to_string(),
            secondary_subjects: vec!["tennis ball".to_string()],
            environment_category: EnvironmentCategory::Animal,
            lighting: Lighting::Bright,
            mood_tags: vec!["joyful".to_string()],
            composition_tags: vec!["detailed".to_string()],
            confidence: 0.8,
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let engine = TemplateEngine::default();
        let scene = golden_retriever_scene();
        for tone in Tone::ALL {
            assert_eq!(engine.generate(&scene, tone), engine.generate(&scene, tone));
        }
    }

    #[test]
    fn casual_caption_references_subject_and_environment() {
        let engine = TemplateEngine::default();
        let set = engine.generate(&golden_retriever_scene(), Tone::Casual);

        assert!(set.main.contains("golden retriever"));
        assert!(set.main.contains("wildlife"));
        assert!(set.alternatives.len() <= 4);

        let mut keys: Vec<String> = set
            .alternatives
            .iter()
            .chain(std::iter::once(&set.main))
            .map(|c| c.to_lowercase())
            .collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), set.alternatives.len() + 1);
    }

    #[test]
    fn empty_mood_skips_exactly_the_mood_alternative() {
        let engine = TemplateEngine::default();
        let with_mood = golden_retriever_scene();
        let mut without_mood = golden_retriever_scene();
        without_mood.mood_tags.clear();

        let a = engine.generate(&with_mood, Tone::Creative);
        let b = engine.generate(&without_mood, Tone::Creative);
        assert_eq!(a.alternatives.len(), b.alternatives.len() + 1);
    }

    #[test]
    fn bare_scene_still_produces_a_subject_alternative() {
        let engine = TemplateEngine::default();
        let set = engine.generate(&SceneDescription::fallback(), Tone::Professional);

        assert!(!set.main.is_empty());
        assert_eq!(set.alternatives.len(), 1);
    }

    #[test]
    fn social_field_is_populated_only_for_social_tone() {
        let engine = TemplateEngine::default();
        let scene = golden_retriever_scene();

        assert!(engine.generate(&scene, Tone::Social).social.is_some());
        for tone in [Tone::Creative, Tone::Casual, Tone::Descriptive] {
            assert!(engine.generate(&scene, tone).social.is_none());
        }
    }

    #[test]
    fn unknown_tone_name_produces_no_partial_set() {
        let engine = TemplateEngine::default();
        let err = engine
            .generate_named(&golden_retriever_scene(), "sarcastic")
            .unwrap_err();
        assert_eq!(err, UnknownToneError("sarcastic".to_string()));
    }

    #[test]
    fn fallback_caption_is_stable_per_tone() {
        let engine = TemplateEngine::default();
        assert_eq!(
            engine.fallback_caption(Tone::Casual),
            engine.fallback_caption(Tone::Casual)
        );
    }
}
