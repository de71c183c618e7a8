//! Description Analyzer - classify a free-text tool description
//!
//! Keyword heuristics, not language understanding. Every description, including
//! an empty one, produces a complete analysis.

use log::debug;

use crate::domain::{Category, ToolDescriptionAnalysis};

/// Maximum number of tags kept per tool
pub const MAX_TAGS: usize = 5;

/// Number of leading words used to derive a tool name
pub const NAME_WORDS: usize = 4;

/// Glyph for categories without an entry in [`ICONS`]
pub const FALLBACK_ICON: &str = "🛠️";

/// A keyword group bound to a category
struct CategoryRule {
    keywords: &'static [&'static str],
    category: Category,
}

/// Tried in order; the first group with a keyword present wins.
const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule { keywords: &["convert", "transform"], category: Category::Converters },
    CategoryRule { keywords: &["calculate", "compute"], category: Category::Calculators },
    CategoryRule { keywords: &["generate", "create"], category: Category::Generators },
    CategoryRule { keywords: &["format", "prettify"], category: Category::Formatters },
    CategoryRule { keywords: &["validate", "check"], category: Category::Validators },
    CategoryRule { keywords: &["encode", "decode"], category: Category::Encoders },
];

const TAG_KEYWORDS: &[&str] = &[
    "text", "json", "xml", "html", "css", "url", "base64", "hash", "encrypt", "decrypt", "image", "file",
    "data", "color", "date", "time", "number", "string", "api",
];

const ICONS: &[(Category, &str)] = &[
    (Category::Converters, "🔄"),
    (Category::Calculators, "🧮"),
    (Category::Generators, "⚡"),
    (Category::Formatters, "📝"),
    (Category::Validators, "✅"),
    (Category::Encoders, "🔐"),
    (Category::Utilities, "🔧"),
];

/// Analyze a description into name, category, tags and icon
pub fn analyze(description: &str) -> ToolDescriptionAnalysis {
    let category = categorize(description);
    let name = extract_name(description);
    let tags = extract_tags(description, category.as_str());
    let icon = icon_for(category.as_str()).to_string();

    debug!("Analyzed description: name={:?} category={} tags={:?}", name, category, tags);

    ToolDescriptionAnalysis {
        name,
        category,
        tags,
        icon,
    }
}

/// Pick the category of the first keyword group present in the description
pub fn categorize(description: &str) -> Category {
    let lower = description.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
        .map(|rule| rule.category)
        .unwrap_or_default()
}

/// Title-case the first four whitespace-separated words
pub fn extract_name(description: &str) -> String {
    description
        .split_whitespace()
        .take(NAME_WORDS)
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Category first, then each vocabulary keyword found in the description.
///
/// Deduplicated in first-seen order and capped at [`MAX_TAGS`].
pub fn extract_tags(description: &str, category: &str) -> Vec<String> {
    let lower = description.to_lowercase();
    let mut tags = vec![category.to_string()];

    for keyword in TAG_KEYWORDS.iter().filter(|k| lower.contains(*k)) {
        if !tags.iter().any(|t| t == keyword) {
            tags.push(keyword.to_string());
        }
    }

    tags.truncate(MAX_TAGS);
    tags
}

/// Glyph for a category name; unknown names get [`FALLBACK_ICON`]
pub fn icon_for(category: &str) -> &'static str {
    Category::parse(category)
        .and_then(|c| ICONS.iter().find(|(ic, _)| *ic == c))
        .map(|(_, icon)| *icon)
        .unwrap_or(FALLBACK_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_description() {
        let analysis = analyze("Convert hexadecimal color codes to RGB values");
        assert_eq!(analysis.category, Category::Converters);
        assert_eq!(analysis.name, "Convert Hexadecimal Color Codes");
        assert_eq!(analysis.tags, vec!["converters", "color"]);
        assert_eq!(analysis.icon, "🔄");
    }

    #[test]
    fn test_each_keyword_group() {
        assert_eq!(categorize("Transform CSV rows"), Category::Converters);
        assert_eq!(categorize("Compute loan interest"), Category::Calculators);
        assert_eq!(categorize("Create random passwords"), Category::Generators);
        assert_eq!(categorize("Prettify SQL"), Category::Formatters);
        assert_eq!(categorize("Check email addresses"), Category::Validators);
        assert_eq!(categorize("Decode JWT tokens"), Category::Encoders);
    }

    #[test]
    fn test_category_matching_is_case_insensitive() {
        assert_eq!(categorize("CALCULATE BMI"), Category::Calculators);
    }

    #[test]
    fn test_priority_order_breaks_ties() {
        // generate is checked before validate
        assert_eq!(categorize("Validate and generate UUIDs"), Category::Generators);
        // convert beats everything
        assert_eq!(categorize("Decode then convert"), Category::Converters);
    }

    #[test]
    fn test_encode_without_earlier_keyword_is_encoder() {
        for description in ["encode text to base64", "Decode a URL component", "url ENCODE helper"] {
            assert_eq!(categorize(description), Category::Encoders, "{description}");
        }
    }

    #[test]
    fn test_no_keyword_defaults_to_utilities() {
        let analysis = analyze("Roll some dice for me");
        assert_eq!(analysis.category, Category::Utilities);
        assert_eq!(analysis.tags, vec!["utilities"]);
        assert_eq!(analysis.icon, "🔧");
    }

    #[test]
    fn test_keywords_match_as_substrings() {
        // "created" contains "create", "validated" contains "date"
        assert_eq!(categorize("Show when a file was created"), Category::Generators);
        let tags = extract_tags("validated input", "validators");
        assert_eq!(tags, vec!["validators", "date"]);
    }

    #[test]
    fn test_extract_name_takes_four_words() {
        assert_eq!(extract_name("generate secure RANDOM passwords quickly"), "Generate Secure Random Passwords");
        assert_eq!(extract_name("hash it"), "Hash It");
    }

    #[test]
    fn test_extract_name_collapses_whitespace() {
        assert_eq!(extract_name("  format \t json   nicely "), "Format Json Nicely");
    }

    #[test]
    fn test_extract_name_empty_description() {
        assert_eq!(extract_name(""), "");
        assert_eq!(extract_name("   "), "");
    }

    #[test]
    fn test_tags_capped_at_five() {
        let tags = extract_tags("json xml html css url text", "converters");
        assert_eq!(tags.len(), MAX_TAGS);
        assert_eq!(tags[0], "converters");
        assert_eq!(tags, vec!["converters", "text", "json", "xml", "html"]);
    }

    #[test]
    fn test_tags_deduplicated() {
        // "data" is both the category string and a keyword
        let tags = extract_tags("data cleanup", "data");
        assert_eq!(tags, vec!["data"]);
    }

    #[test]
    fn test_icon_lookup() {
        assert_eq!(icon_for("encoders"), "🔐");
        assert_eq!(icon_for("validators"), "✅");
        assert_eq!(icon_for("widgets"), FALLBACK_ICON);
    }

    #[test]
    fn test_empty_description_never_fails() {
        let analysis = analyze("");
        assert_eq!(analysis.category, Category::Utilities);
        assert_eq!(analysis.name, "");
        assert_eq!(analysis.tags, vec!["utilities"]);
    }
}
