use crate::pipeline::types::Tone;

/// Static per-tone vocabulary substituted into caption templates. Loaded
/// into the binary once; read-only for the process lifetime.
pub(crate) struct ToneBank {
    pub style_words: &'static [&'static str],
    pub modifiers: &'static [&'static str],
}

pub(crate) const fn bank(tone: Tone) -> &'static ToneBank {
    match tone {
        Tone::Creative => &ToneBank {
            style_words: &[
                "artistic",
                "imaginative",
                "inspired",
                "visionary",
                "expressive",
            ],
            modifiers: &["masterfully", "creatively", "artistically", "imaginatively"],
        },
        Tone::Professional => &ToneBank {
            style_words: &[
                "technical excellence",
                "precision",
                "professional quality",
                "polished craft",
            ],
            modifiers: &["professionally", "expertly", "precisely", "meticulously"],
        },
        Tone::Casual => &ToneBank {
            style_words: &["cool", "awesome", "nice", "sweet", "fun"],
            modifiers: &["totally", "really", "super", "pretty"],
        },
        Tone::Poetic => &ToneBank {
            style_words: &["ethereal", "sublime", "graceful", "flowing", "harmonious"],
            modifiers: &["gracefully", "elegantly", "poetically", "beautifully"],
        },
        Tone::Social => &ToneBank {
            style_words: &["viral-worthy", "insta-perfect", "share-ready", "trending"],
            modifiers: &["absolutely", "totally", "completely", "definitely"],
        },
        Tone::Descriptive => &ToneBank {
            style_words: &["detailed", "comprehensive", "thorough", "analytical"],
            modifiers: &["clearly", "distinctly", "precisely", "accurately"],
        },
    }
}

pub(crate) const SOCIAL_STARTERS: &[&str] =
    &["Obsessed with", "Can't get over", "Living for", "Absolutely loving"];

pub(crate) const POETIC_METAPHORS: &[&str] = &[
    "a painted dream",
    "poetry in visual form",
    "a moment frozen in beauty",
    "nature's own artistry",
];

/// Generic fallbacks shown when caption generation has nothing better, e.g.
/// for the presentation layer's error path.
pub(crate) const DEFAULT_CAPTIONS: &[&str] = &[
    "A visually compelling image that captures attention with its unique composition",
    "An expertly crafted photograph showcasing attention to detail and visual storytelling",
    "A captivating scene that draws viewers in through light, color, and perspective",
    "A beautifully composed image that demonstrates real artistic vision",
    "A striking visual narrative balancing aesthetic appeal with emotional resonance",
];
