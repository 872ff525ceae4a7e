//! Acceptable ranges for the optimized inference settings

use crate::models::{SettingValidations, SettingsSnapshot};

pub const TEMPERATURE_MAX: f64 = 2.0;
pub const MAX_TOKENS_LIMIT: f64 = 4096.0;
pub const TOP_P_MAX: f64 = 1.0;

/// Check each setting against its range; missing settings read as 0
pub fn check_ranges(settings: &SettingsSnapshot) -> SettingValidations {
    let temperature = settings.number("temperature");
    let max_tokens = settings.number("max_tokens");
    let top_p = settings.number("top_p");

    SettingValidations {
        temperature: (0.0..=TEMPERATURE_MAX).contains(&temperature),
        max_tokens: max_tokens > 0.0 && max_tokens <= MAX_TOKENS_LIMIT,
        top_p: top_p > 0.0 && top_p <= TOP_P_MAX,
        top_k: settings.number("top_k") > 0.0,
        repeat_penalty: settings.number("repeat_penalty") > 0.0,
        num_threads: settings.number("num_threads") > 0.0,
    }
}
