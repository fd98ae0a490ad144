/// Dashboard configuration
///
/// Defaults reproduce the stock dashboard; a JSON file (`DASHBOARD_CONFIG`)
/// and environment variables override them, env taking precedence.

use std::{
    fs::{File, OpenOptions},
    path::PathBuf,
    str::FromStr,
    time::Duration,
};

use serde::Deserialize;

use super::error::DashboardError;

/// How the symbol selector takes input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectorStyle {
    /// Searchable catalog of indices and stocks, plus a custom entry
    #[default]
    Dropdown,
    /// Plain text box; the typed symbol is added as-is
    FreeText,
}

impl FromStr for SelectorStyle {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dropdown" => Ok(SelectorStyle::Dropdown),
            "free-text" | "freetext" | "free_text" => Ok(SelectorStyle::FreeText),
            _ => Err(DashboardError::InvalidSetting {
                key: "SELECTOR_STYLE",
                value: s.to_string(),
            }),
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Initial watchlist, in display order
    pub watchlist: Vec<String>,
    /// Initially selected symbol (added to the watchlist if missing)
    pub selected: String,
    pub selector_style: SelectorStyle,
    /// Show the open/closed badge next to the history title
    pub show_market_status_badge: bool,
    /// Suspend price drift while the market is closed
    pub pause_drift_when_closed: bool,
    /// Quote drift period
    pub drift_interval: Duration,
    /// Market open/closed re-check period
    pub market_status_interval: Duration,
    /// Input poll timeout of the render loop
    pub tick_rate: Duration,
    /// Seed for reproducible synthetic data
    pub seed: Option<u64>,
    /// Log file; logging is disabled when unset
    pub log_file: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            watchlist: ["AAPL", "GOOGL", "MSFT", "TSLA", "AMZN", "^GSPC", "^FTSE"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            selected: "AAPL".to_string(),
            selector_style: SelectorStyle::Dropdown,
            show_market_status_badge: true,
            pause_drift_when_closed: false,
            drift_interval: Duration::from_secs(3),
            market_status_interval: Duration::from_secs(60),
            tick_rate: Duration::from_millis(250),
            seed: None,
            log_file: None,
        }
    }
}

/// Optional overrides read from the JSON config file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    watchlist: Option<Vec<String>>,
    selected: Option<String>,
    selector_style: Option<SelectorStyle>,
    show_market_status_badge: Option<bool>,
    pause_drift_when_closed: Option<bool>,
    drift_interval_ms: Option<u64>,
    market_status_interval_ms: Option<u64>,
    tick_rate_ms: Option<u64>,
    seed: Option<u64>,
    log_file: Option<PathBuf>,
}

impl DashboardConfig {
    /// Build from `DASHBOARD_CONFIG` (JSON file) and env overrides
    pub fn from_env() -> Result<Self, DashboardError> {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("DASHBOARD_CONFIG") {
            config = config.merge_file(PathBuf::from(path))?;
        }

        config.apply_env(|key| std::env::var(key).ok())
    }

    /// Merge a JSON config file on top of `self`
    pub fn merge_file(self, path: PathBuf) -> Result<Self, DashboardError> {
        let raw = std::fs::read_to_string(&path).map_err(|source| DashboardError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        self.merge_json(&raw)
            .map_err(|source| DashboardError::ConfigParse { path, source })
    }

    /// Merge a JSON document on top of `self`
    pub fn merge_json(mut self, raw: &str) -> Result<Self, serde_json::Error> {
        let file: FileConfig = serde_json::from_str(raw)?;

        if let Some(watchlist) = file.watchlist {
            self.watchlist = normalize_symbols(watchlist);
        }
        if let Some(selected) = file.selected {
            self.selected = normalize_symbol(&selected);
        }
        if let Some(style) = file.selector_style {
            self.selector_style = style;
        }
        if let Some(show) = file.show_market_status_badge {
            self.show_market_status_badge = show;
        }
        if let Some(pause) = file.pause_drift_when_closed {
            self.pause_drift_when_closed = pause;
        }
        if let Some(ms) = file.drift_interval_ms {
            self.drift_interval = Duration::from_millis(ms.max(1));
        }
        if let Some(ms) = file.market_status_interval_ms {
            self.market_status_interval = Duration::from_millis(ms.max(1));
        }
        if let Some(ms) = file.tick_rate_ms {
            self.tick_rate = Duration::from_millis(ms.max(1));
        }
        if file.seed.is_some() {
            self.seed = file.seed;
        }
        if file.log_file.is_some() {
            self.log_file = file.log_file;
        }
        Ok(self)
    }

    /// Apply env-style overrides looked up through `lookup`
    pub fn apply_env(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, DashboardError> {
        if let Some(list) = lookup("WATCHLIST") {
            self.watchlist = normalize_symbols(list.split(','));
        }
        if let Some(selected) = lookup("SELECTED") {
            self.selected = normalize_symbol(&selected);
        }
        if let Some(style) = lookup("SELECTOR_STYLE") {
            self.selector_style = style.parse()?;
        }
        if let Some(seed) = lookup("DASHBOARD_SEED") {
            let parsed = seed
                .trim()
                .parse()
                .map_err(|_| DashboardError::InvalidSetting {
                    key: "DASHBOARD_SEED",
                    value: seed.clone(),
                })?;
            self.seed = Some(parsed);
        }
        if let Some(path) = lookup("DASHBOARD_LOG") {
            self.log_file = Some(PathBuf::from(path));
        }
        Ok(self)
    }

    /// Open the configured log file for appending, `None` when logging is off
    pub fn open_log_file(&self) -> Result<Option<File>, DashboardError> {
        let Some(path) = &self.log_file else {
            return Ok(None);
        };
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map(Some)
            .map_err(|source| DashboardError::LogFile {
                path: path.clone(),
                source,
            })
    }

    /// Set the initial watchlist
    pub fn with_watchlist<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.watchlist = normalize_symbols(symbols);
        self
    }

    /// Set the initially selected symbol
    pub fn with_selected(mut self, symbol: &str) -> Self {
        self.selected = normalize_symbol(symbol);
        self
    }

    /// Set selector style
    pub fn with_selector_style(mut self, style: SelectorStyle) -> Self {
        self.selector_style = style;
        self
    }

    /// Toggle the market status badge
    pub fn with_market_status_badge(mut self, show: bool) -> Self {
        self.show_market_status_badge = show;
        self
    }

    /// Pause drift while the market is closed
    pub fn with_pause_drift_when_closed(mut self, pause: bool) -> Self {
        self.pause_drift_when_closed = pause;
        self
    }

    /// Set drift period
    pub fn with_drift_interval(mut self, interval: Duration) -> Self {
        self.drift_interval = interval;
        self
    }

    /// Set market status re-check period
    pub fn with_market_status_interval(mut self, interval: Duration) -> Self {
        self.market_status_interval = interval;
        self
    }

    /// Set a fixed data seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Trim and upper-case a user-typed symbol
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

fn normalize_symbols<I, S>(symbols: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for symbol in symbols {
        let symbol = normalize_symbol(symbol.as_ref());
        if !symbol.is_empty() && !out.contains(&symbol) {
            out.push(symbol);
        }
    }
    out
}
