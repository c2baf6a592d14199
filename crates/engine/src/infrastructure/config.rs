//! Process configuration, read once from the environment at startup.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use wordgrid_domain::{
    LayoutCounts, LengthCategory, SamplingMode, DEFAULT_MISSING_LETTER_INDEX,
    DEFAULT_ROUND_TIME_SECONDS,
};

/// Everything the engine reads from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,

    // Words
    pub word_list_path: Option<PathBuf>,
    pub word_category: LengthCategory,
    pub dictionary_api_url: Option<String>,
    pub dictionary_api_key: Option<String>,

    // Game rules
    /// Seated when `/new` names no players. Two distinct non-empty ids.
    pub default_player_ids: [String; 2],
    pub round_time_seconds: u32,
    pub initial_missing_letter_index: i32,
    pub play_score: u32,
    pub next_missing_letter_index: i32,

    // Board
    pub layout_counts: LayoutCounts,
    pub layout_sampling: SamplingMode,
    pub home_cells: Vec<String>,

    // Deadlines
    pub store_timeout: Duration,
    pub validator_timeout: Duration,
}

impl AppConfig {
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_PLAYER_IDS: [&'static str; 2] = ["12345", "54321"];
    pub const DEFAULT_PLAY_SCORE: u32 = 10;
    pub const DEFAULT_NEXT_MISSING_LETTER_INDEX: i32 = 2;
    pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 5000;
    pub const DEFAULT_VALIDATOR_TIMEOUT_MS: u64 = 30_000;

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Invalid values fall back to the default with
    /// a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let server_port = var("SERVER_PORT")
            .or_else(|| var("PORT"))
            .map(|raw| parse_or("SERVER_PORT", &raw, Self::DEFAULT_PORT))
            .unwrap_or(Self::DEFAULT_PORT);

        let defaults = LayoutCounts::default();
        let layout_counts = LayoutCounts::new(
            setting(&var, "BARRIER_COUNT", defaults.barriers),
            setting(&var, "OBSTACLE_COUNT", defaults.obstacles),
            setting(&var, "REWARD_COUNT", defaults.rewards),
        );

        Self {
            server_host: var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            server_port,
            word_list_path: var("WORD_LIST_PATH").map(PathBuf::from),
            word_category: setting(&var, "WORD_CATEGORY", LengthCategory::Seven),
            dictionary_api_url: var("DICTIONARY_API_URL"),
            dictionary_api_key: var("DICTIONARY_API_KEY"),
            default_player_ids: var("DEFAULT_PLAYER_IDS")
                .and_then(|raw| parse_player_pair(&raw))
                .unwrap_or_else(default_player_pair),
            round_time_seconds: setting(&var, "ROUND_TIME_SECONDS", DEFAULT_ROUND_TIME_SECONDS),
            initial_missing_letter_index: setting(
                &var,
                "INITIAL_MISSING_LETTER_INDEX",
                DEFAULT_MISSING_LETTER_INDEX,
            ),
            play_score: setting(&var, "PLAY_SCORE", Self::DEFAULT_PLAY_SCORE),
            next_missing_letter_index: setting(
                &var,
                "NEXT_MISSING_LETTER_INDEX",
                Self::DEFAULT_NEXT_MISSING_LETTER_INDEX,
            ),
            layout_counts,
            layout_sampling: setting(&var, "LAYOUT_SAMPLING", SamplingMode::Distinct),
            home_cells: var("HOME_CELLS")
                .map(|raw| split_list(&raw))
                .unwrap_or_default(),
            store_timeout: Duration::from_millis(setting(
                &var,
                "STORE_TIMEOUT_MS",
                Self::DEFAULT_STORE_TIMEOUT_MS,
            )),
            validator_timeout: Duration::from_millis(setting(
                &var,
                "VALIDATOR_TIMEOUT_MS",
                Self::DEFAULT_VALIDATOR_TIMEOUT_MS,
            )),
        }
    }

    /// Dictionary URL and key, when both are configured.
    pub fn dictionary_api(&self) -> Option<(&str, &str)> {
        match (&self.dictionary_api_url, &self.dictionary_api_key) {
            (Some(url), Some(key)) => Some((url.as_str(), key.as_str())),
            _ => None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn setting<T: FromStr>(var: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match var(key) {
        Some(raw) => parse_or(key, &raw, default),
        None => default,
    }
}

fn parse_or<T: FromStr>(key: &str, raw: &str, default: T) -> T {
    raw.parse().unwrap_or_else(|_| {
        tracing::warn!(key, value = raw, "Invalid configuration value, using default");
        default
    })
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_player_pair(raw: &str) -> Option<[String; 2]> {
    match <[String; 2]>::try_from(split_list(raw)) {
        Ok([a, b]) if a != b => Some([a, b]),
        _ => {
            tracing::warn!(
                value = raw,
                "DEFAULT_PLAYER_IDS needs two distinct ids, using default"
            );
            None
        }
    }
}

fn default_player_pair() -> [String; 2] {
    AppConfig::DEFAULT_PLAYER_IDS.map(str::to_string)
}
