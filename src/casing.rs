//! Identifier casing transforms
//!
//! Pure string functions shared by schema assembly and the template helpers, so
//! the casing in generated filenames always matches the casing inside the files.

/// Split an identifier or phrase into words.
///
/// Any non-alphanumeric character separates words, as do lower-to-upper
/// transitions (`hexToRgb`) and the end of an acronym (`HTTPServer`).
fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase()
            && let Some(prev) = current.chars().last()
        {
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Uppercase the first character and lowercase the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Convert to camelCase (`Hex To RGB` -> `hexToRgb`)
pub fn to_camel_case(input: &str) -> String {
    split_words(input)
        .iter()
        .enumerate()
        .map(|(i, word)| if i == 0 { word.to_lowercase() } else { capitalize(word) })
        .collect()
}

/// Convert to PascalCase (`Hex To RGB` -> `HexToRgb`)
pub fn to_pascal_case(input: &str) -> String {
    split_words(input).iter().map(|word| capitalize(word)).collect()
}

/// Convert to kebab-case (`Hex To RGB` -> `hex-to-rgb`)
pub fn to_kebab_case(input: &str) -> String {
    join_lowercase(input, "-")
}

/// Convert to snake_case (`Hex To RGB` -> `hex_to_rgb`)
pub fn to_snake_case(input: &str) -> String {
    join_lowercase(input, "_")
}

fn join_lowercase(input: &str, separator: &str) -> String {
    split_words(input)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Generate a tool id from a display name
pub fn generate_tool_id(name: &str) -> String {
    to_kebab_case(name)
}

/// Make a string usable as an identifier in generated source.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_`, and a leading digit
/// gets an underscore prefix.
pub fn sanitize_identifier(input: &str) -> String {
    let sanitized: String = input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if sanitized.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", sanitized)
    } else {
        sanitized
    }
}
