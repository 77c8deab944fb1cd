use log::Level;
use shared::constants::DEFAULT_PALETTE_ID;
use web_sys::window;

pub const MAX_INITIAL_WHEELS: usize = 12;

/// Start-up options read from the page URL, e.g.
/// `/?palette=nord&wheels=3&seed=42&log=debug`.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerConfig {
    pub palette_id: String,
    pub wheel_count: usize,
    pub seed: Option<u64>,
    pub log_level: Level,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            palette_id: DEFAULT_PALETTE_ID.to_string(),
            wheel_count: 1,
            seed: None,
            log_level: Level::Info,
        }
    }
}

impl PickerConfig {
    pub fn from_window() -> Self {
        window()
            .and_then(|w| w.location().search().ok())
            .map(|search| Self::from_query(&search))
            .unwrap_or_default()
    }

    /// Parses a query string (with or without the leading `?`). Unknown
    /// keys and malformed values are ignored.
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();

        for pair in query.trim_start_matches('?').split('&') {
            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (key, value.trim()),
                None => continue,
            };

            match key {
                "palette" if !value.is_empty() => config.palette_id = value.to_string(),
                "wheels" => {
                    if let Ok(count) = value.parse::<usize>() {
                        config.wheel_count = count.clamp(1, MAX_INITIAL_WHEELS);
                    }
                }
                "seed" => config.seed = value.parse().ok(),
                "log" => {
                    if let Ok(level) = value.parse() {
                        config.log_level = level;
                    }
                }
                _ => {}
            }
        }

        config
    }
}
