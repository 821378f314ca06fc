//! CLI-specific configuration for the terminal frontend.
use std::env;
use std::time::Duration;

/// Terminal presentation settings.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Delay between characters of typewriter text. Zero prints lines at once.
    pub text_delay: Duration,
    /// Base delay for pacing beats between combat phases.
    pub pacing: Duration,
    /// Emit ANSI colors and attributes.
    pub color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            text_delay: Duration::from_millis(12),
            pacing: Duration::from_millis(600),
            color: true,
        }
    }
}

impl CliConfig {
    /// Configuration with no delays and no colors, for scripted runs.
    pub fn plain() -> Self {
        Self {
            text_delay: Duration::ZERO,
            pacing: Duration::ZERO,
            color: false,
        }
    }

    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FATEWHEEL_TEXT_DELAY_MS` - Typewriter delay per character (default: 12)
    /// - `FATEWHEEL_PACING_MS` - Delay between combat phases (default: 600)
    /// - `FATEWHEEL_COLOR` - `true`/`false` (default: true, `NO_COLOR` disables)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("FATEWHEEL_TEXT_DELAY_MS") {
            config.text_delay = Duration::from_millis(ms);
        }

        if let Some(ms) = read_env::<u64>("FATEWHEEL_PACING_MS") {
            config.pacing = Duration::from_millis(ms);
        }

        if env::var_os("NO_COLOR").is_some() {
            config.color = false;
        }
        if let Some(color) = read_env::<bool>("FATEWHEEL_COLOR") {
            config.color = color;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
