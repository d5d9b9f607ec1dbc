use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownToneError;

/// Named caption style. Each tone owns its own template bank, so tone
/// dispatch is an exhaustive match and adding a tone is a compile-time
/// checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Creative,
    Professional,
    Casual,
    Poetic,
    Social,
    Descriptive,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Creative,
        Tone::Professional,
        Tone::Casual,
        Tone::Poetic,
        Tone::Social,
        Tone::Descriptive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Creative => "creative",
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Poetic => "poetic",
            Tone::Social => "social",
            Tone::Descriptive => "descriptive",
        }
    }
}

impl FromStr for Tone {
    type Err = UnknownToneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "creative" => Ok(Tone::Creative),
            "professional" => Ok(Tone::Professional),
            "casual" => Ok(Tone::Casual),
            "poetic" => Ok(Tone::Poetic),
            "social" | "social media" => Ok(Tone::Social),
            "descriptive" => Ok(Tone::Descriptive),
            _ => Err(UnknownToneError(s.to_string())),
        }
    }
}

/// The bundle returned for one (image, tone) request. Constructed fresh per
/// request and never mutated afterwards; `social` is populated only for
/// `Tone::Social`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionSet {
    pub main: String,
    /// Ordered by generation approach: subject-focused, mood-focused,
    /// artistic-focused, context-focused.
    pub alternatives: Vec<String>,
    pub social: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_tones_parse() {
        for tone in Tone::ALL {
            assert_eq!(tone.as_str().parse::<Tone>().unwrap(), tone);
        }
        assert_eq!("Social Media".parse::<Tone>().unwrap(), Tone::Social);
    }

    #[test]
    fn unrecognized_tone_is_an_error() {
        let err = "sarcastic".parse::<Tone>().unwrap_err();
        assert_eq!(err, UnknownToneError("sarcastic".to_string()));
    }
}
