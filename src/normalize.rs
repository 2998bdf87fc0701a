use clap::ValueEnum;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A run of digits, dots and whitespace that ends in "digit, dot, whitespace",
/// e.g. "1. " or "12. ". Titles that merely start with a number ("12.5 Angry
/// Men", "2001: A Space Odyssey") are left alone. This is a heuristic, not a
/// tokenizer.
static RANK_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d.\s]*\d\.\s+").unwrap());

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19\d{2}|20\d{2})\b").unwrap());

// Longer classes come first so "PG-13" is not cut short as "PG". Hyphens
// count as part of a token, so "TV-PG" is not read as "PG".
static RATING_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[^\w-])(NC-17|PG-13|PG|G|R)(?:[^\w-]|$)").unwrap());

/// How the rating field of a chart row is turned into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RatingMode {
    /// Keep only a known rating class (R, PG-13, PG, G, NC-17).
    #[default]
    Vocabulary,
    /// Keep the whole field text, trimmed.
    Verbatim,
}

/// Trims a chart title and removes its leading rank, "3. Vertigo" -> "Vertigo".
pub fn normalize_title(raw: &str) -> String {
    let trimmed = raw.trim();
    RANK_PREFIX.replace(trimmed, "").trim().to_string()
}

/// Leftmost 4-digit year in 1900..=2099, if any.
pub fn extract_year(text: &str) -> Option<String> {
    YEAR.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn extract_rating(text: &str, mode: RatingMode) -> Option<String> {
    match mode {
        RatingMode::Vocabulary => RATING_CLASS
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string()),
        RatingMode::Verbatim => Some(text.trim().to_string()),
    }
}
