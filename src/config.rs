use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_PORT: u16 = 8080;

/// How long the offline path waits before showing its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    pub min: Duration,
    pub max: Duration,
}

impl Default for DelayRange {
    fn default() -> Self {
        Self { min: Duration::from_millis(2000), max: Duration::from_millis(3500) }
    }
}

impl DelayRange {
    #[cfg(test)]
    pub fn none() -> Self {
        Self { min: Duration::ZERO, max: Duration::ZERO }
    }

    /// Maps a unit draw in `[0, 1)` onto the range.
    pub fn pick(&self, unit: f64) -> Duration {
        let span = self.max.saturating_sub(self.min);
        self.min + span.mul_f64(unit.clamp(0.0, 1.0))
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub port: u16,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("VIRALCRAFT_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let port = lookup("PORT").and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT);
        Self { api_url, port }
    }
}
