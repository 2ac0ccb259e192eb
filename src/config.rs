use anyhow::{bail, Context, Result};
use std::time::Duration;

/// Seconds a player gets per turn; reset after every accepted word
pub const DEFAULT_TURN_SECONDS: u32 = 15;

/// Interval between countdown ticks
pub const DEFAULT_TICK_MILLIS: u64 = 1000;

/// Shortest original word accepted (in characters)
pub const MIN_WORD_LENGTH: usize = 8;

/// Longest original word accepted (in characters)
pub const MAX_WORD_LENGTH: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Turn budget in seconds
    pub turn_seconds: u32,

    // Countdown tick interval
    pub tick_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let turn_seconds = match std::env::var("LETTER_DUEL_TURN_SECONDS") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("LETTER_DUEL_TURN_SECONDS is not a number: '{}'", raw))?,
            Err(_) => DEFAULT_TURN_SECONDS,
        };
        if turn_seconds == 0 {
            bail!("LETTER_DUEL_TURN_SECONDS must be at least 1");
        }

        let tick_millis = match std::env::var("LETTER_DUEL_TICK_MILLIS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("LETTER_DUEL_TICK_MILLIS is not a number: '{}'", raw))?,
            Err(_) => DEFAULT_TICK_MILLIS,
        };
        if tick_millis == 0 {
            bail!("LETTER_DUEL_TICK_MILLIS must be at least 1");
        }

        Ok(Self {
            turn_seconds,
            tick_interval: Duration::from_millis(tick_millis),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            turn_seconds: DEFAULT_TURN_SECONDS,
            tick_interval: Duration::from_millis(DEFAULT_TICK_MILLIS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("LETTER_DUEL_TURN_SECONDS");
        std::env::remove_var("LETTER_DUEL_TICK_MILLIS");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().expect("defaults should load");
        assert_eq!(config, Config::default());
        assert_eq!(config.turn_seconds, 15);
        assert_eq!(config.tick_interval, Duration::from_secs(1));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("LETTER_DUEL_TURN_SECONDS", "30");
        std::env::set_var("LETTER_DUEL_TICK_MILLIS", "250");

        let config = Config::from_env().expect("overrides should load");
        assert_eq!(config.turn_seconds, 30);
        assert_eq!(config.tick_interval, Duration::from_millis(250));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_garbage() {
        clear_env();
        std::env::set_var("LETTER_DUEL_TURN_SECONDS", "fifteen");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("LETTER_DUEL_TURN_SECONDS"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_zero() {
        clear_env();
        std::env::set_var("LETTER_DUEL_TICK_MILLIS", "0");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("at least 1"));

        clear_env();
    }
}
