use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::engine::EngineError;

static DISALLOW_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(non[- ]?consensual)\b|\bagainst\s+their\s+will\b",
        r"(?i)\b(rape|molest|incest|bestiality)\b",
        r"(?i)\b(minor|underage|child)\b.*\b(nude|sexual|explicit)\b",
        r"(?i)\b(sexual)\b.*\b(violence|assault)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid block pattern"))
    .collect()
});

static SEXUAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(sex|nsfw|porn|explicit|nude|nudity)\b").expect("valid sexual-term pattern"));
static VIOLENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(drown|kill|murder|stab|shoot|maim|behead|strangle)\b")
        .expect("valid violent-term pattern")
});

static SOFTEN_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)\bdrown(s|ed|ing)?\b", "overpower (off-screen, implied)"),
        (r"(?i)\bkill(s|ed|ing)?\b", "neutralize (off-screen, implied)"),
        (r"(?i)\bstab(s|bed|bing)?\b", "threaten (off-screen)"),
        (r"(?i)\bshoot(s|ing)?\b", "aim (off-screen)"),
        (r"(?i)\bblood(y)?\b", "splashing water"),
    ]
    .iter()
    .map(|(pattern, replacement)| {
        (Regex::new(pattern).expect("valid soften pattern"), *replacement)
    })
    .collect()
});

#[derive(Debug)]
pub struct ScreenedIdea {
    pub text: String,
    pub softened: bool,
}

pub fn screen(idea: &str) -> Result<ScreenedIdea, EngineError> {
    if is_blocked(idea) {
        warn!("Rejected idea by content screen");
        return Err(EngineError::BlockedContent(
            "sexual violence or minors with explicit content".to_string(),
        ));
    }

    let mut text = idea.to_string();
    for (pattern, replacement) in SOFTEN_RULES.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }
    let softened = text != idea;
    if softened {
        debug!("Softened violent vocabulary in idea");
    }
    Ok(ScreenedIdea { text, softened })
}

fn is_blocked(idea: &str) -> bool {
    if SEXUAL_RE.is_match(idea) && VIOLENT_RE.is_match(idea) {
        return true;
    }
    DISALLOW_RES.iter().any(|pattern| pattern.is_match(idea))
}
