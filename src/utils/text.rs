use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static SPACE_BEFORE_COMMA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+,").expect("valid comma regex"));
static DOUBLED_COMMA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*,").expect("valid doubled-comma regex"));

pub fn clean_space(text: &str) -> String {
    let flattened = text.replace('\n', " ");
    let collapsed = WHITESPACE_RE.replace_all(&flattened, " ");
    let no_dangling = SPACE_BEFORE_COMMA_RE.replace_all(&collapsed, ",");
    DOUBLED_COMMA_RE
        .replace_all(&no_dangling, ", ")
        .trim()
        .to_string()
}

pub fn clamp_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return text.to_string();
    }
    words[..max_words].join(" ")
}

pub fn split_terms(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn phrase_matcher(phrase: &str) -> Option<Regex> {
    let trimmed = phrase.trim();
    if trimmed.is_empty() {
        return None;
    }
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(trimmed))).ok()
}

pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    phrase_matcher(phrase)
        .map(|matcher| matcher.is_match(text))
        .unwrap_or(false)
}
