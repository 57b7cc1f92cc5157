use std::env;
use std::path::PathBuf;

use anyhow::Result;
use once_cell::sync::Lazy;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub lexicon_config_path: Option<PathBuf>,
}

pub static CONFIG: Lazy<Config> =
    Lazy::new(|| Config::load().expect("Failed to load configuration"));

fn env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn resolve_lexicon_path() -> Option<PathBuf> {
    if let Ok(env_value) = env::var("LEXICON_CONFIG_PATH") {
        let env_path = PathBuf::from(env_value);
        if env_path.is_absolute() {
            return Some(env_path);
        }
        return Some(
            PathBuf::from(env::current_dir().unwrap_or_else(|_| PathBuf::from("."))).join(env_path),
        );
    }

    let candidates = [
        PathBuf::from("lexicon.json"),
        PathBuf::from("config").join("lexicon.json"),
    ];
    for candidate in candidates {
        if candidate.exists() {
            info!("Using lexicon config found at {}", candidate.display());
            return Some(candidate);
        }
    }
    None
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Config {
            log_level: env_string("LOG_LEVEL", "info").to_lowercase(),
            lexicon_config_path: resolve_lexicon_path(),
        })
    }
}
