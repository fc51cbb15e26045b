use clap::ArgMatches;

pub const DEFAULT_SKEW_SECONDS: u64 = 30;
pub const DEFAULT_WARNING_THRESHOLD_SECONDS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateConfig {
    /// Margin subtracted from `exp` before the expiry comparison, absorbing
    /// clock drift and request latency.
    pub skew_seconds: u64,
    /// A live session with less than this left is reported as expiring.
    pub warning_threshold_seconds: u64,
}

impl Default for GateConfig {
    fn default() -> Self {
        GateConfig {
            skew_seconds: DEFAULT_SKEW_SECONDS,
            warning_threshold_seconds: DEFAULT_WARNING_THRESHOLD_SECONDS,
        }
    }
}

impl GateConfig {
    pub fn with_skew(mut self, skew_seconds: u64) -> Self {
        self.skew_seconds = skew_seconds;
        self
    }

    pub fn with_warning_threshold(mut self, warning_threshold_seconds: u64) -> Self {
        self.warning_threshold_seconds = warning_threshold_seconds;
        self
    }

    pub fn from_matches(matches: &ArgMatches) -> Result<Self, String> {
        let mut config = GateConfig::default();
        if let Some(skew) = matches.value_of("skew") {
            config.skew_seconds = parse_seconds("skew", skew)?;
        }
        if let Some(warn) = matches.value_of("warn") {
            config.warning_threshold_seconds = parse_seconds("warn", warn)?;
        }
        Ok(config)
    }
}

fn parse_seconds(flag: &str, raw: &str) -> Result<u64, String> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| format!("--{} expects a non-negative number of seconds, got '{}'", flag, raw))
}
