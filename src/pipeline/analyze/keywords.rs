use crate::pipeline::types::EnvironmentCategory;

/// Keyword buckets mapping classifier labels to environment categories.
/// Matching is substring-based over the lowercased label, so "golden_retriever"
/// does not need its own entry as long as a breed keyword appears in it.
pub(crate) fn keywords_for(category: EnvironmentCategory) -> &'static [&'static str] {
    match category {
        EnvironmentCategory::People => &[
            "person", "man", "woman", "child", "baby", "face", "human", "people", "boy", "girl",
        ],
        EnvironmentCategory::Animal => &[
            "dog", "cat", "bird", "horse", "cow", "sheep", "elephant", "lion", "tiger", "bear",
            "rabbit", "fish", "pet", "retriever", "terrier", "spaniel",
        ],
        EnvironmentCategory::Food => &[
            "pizza", "burger", "sandwich", "cake", "bread", "fruit", "apple", "banana", "food",
            "meal", "dish", "plate",
        ],
        EnvironmentCategory::Vehicle => &[
            "car", "truck", "bus", "motorcycle", "bicycle", "train", "airplane", "boat", "ship",
            "vehicle", "convertible",
        ],
        EnvironmentCategory::Nature => &[
            "tree", "flower", "mountain", "beach", "ocean", "forest", "grass", "sky", "cloud",
            "sunset", "landscape", "valley", "lakeside",
        ],
        EnvironmentCategory::Architecture => &[
            "building", "house", "church", "tower", "bridge", "castle", "monument", "structure",
            "palace", "dome",
        ],
        EnvironmentCategory::Indoor => &[
            "room", "kitchen", "bedroom", "office", "restaurant", "store", "museum", "interior",
            "bookcase", "desk",
        ],
        EnvironmentCategory::Outdoor => &[
            "park", "street", "road", "garden", "field", "outdoor", "fountain", "fence",
        ],
        EnvironmentCategory::Unknown => &[],
    }
}

/// ImageNet labels that classify reliably but make for useless caption
/// subjects ("a stunning web site that creates visual impact").
pub(crate) const NON_DESCRIPTIVE_LABELS: &[&str] = &[
    "web_site",
    "menu",
    "envelope",
    "book_jacket",
    "packet",
    "comic_book",
    "dust_jacket",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scoreable_category_has_keywords() {
        for category in EnvironmentCategory::priority_order() {
            assert!(!keywords_for(category).is_empty());
        }
        assert!(keywords_for(EnvironmentCategory::Unknown).is_empty());
    }
}
