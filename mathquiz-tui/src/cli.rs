//! Command-line options
//!
//! Flags override the config file, which overrides the built-in defaults.

use std::path::PathBuf;

use clap::Parser;
use libmathquiz::config::{Config, MAX_ROUND_SECS};
use libmathquiz::game::FeedbackPolicy;
use libmathquiz::logging::{LogFormat, LoggingConfig};
use libmathquiz::Result;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "mathquiz")]
#[command(version, about = "A timed arithmetic quiz for kids")]
#[command(long_about = r#"A timed arithmetic quiz for kids.

Pick additions, subtractions, multiplications, divisions or a mix, then
answer as many questions as you can before the clock runs out. A right
answer scores a point, a wrong one takes a point away (never below zero).

CONFIG:
    Read from $MATHQUIZ_CONFIG or ~/.config/mathquiz/config.toml when present.

EXAMPLES:
    # Play with defaults
    mathquiz

    # Same questions every time, 30 second rounds
    mathquiz --seed 7 --duration 30

    # Debug logging to a file
    mathquiz --log-file /tmp/mathquiz.log --verbose
"#)]
pub struct Args {
    /// Config file to read instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for reproducible questions
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Round length in seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u32).range(1..=MAX_ROUND_SECS as i64))]
    pub duration: Option<u32>,

    /// Ignore malformed answers instead of showing feedback
    #[arg(long)]
    pub silent: bool,

    /// Log output format (text, json, pretty)
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Load the config file and apply flag overrides
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_path(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        Ok(config)
    }

    /// Apply flag overrides to an already loaded config
    pub fn apply(&self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.questions.seed = Some(seed);
        }
        if let Some(duration) = self.duration {
            config.round.duration_secs = duration;
        }
        if self.silent {
            config.round.feedback = FeedbackPolicy::Silent;
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.to_string_lossy().into_owned());
        }
    }

    /// Logging settings for this run
    pub fn logging(&self, config: &Config) -> LoggingConfig {
        let mut logging = LoggingConfig::from_config(&config.logging);
        logging.verbose = self.verbose;
        logging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keep_config() {
        let args = Args::try_parse_from(["mathquiz"]).unwrap();
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::try_parse_from([
            "mathquiz",
            "--seed",
            "9",
            "--duration",
            "30",
            "--silent",
            "--log-format",
            "json",
        ])
        .unwrap();

        let mut config = Config::default();
        args.apply(&mut config);

        assert_eq!(config.questions.seed, Some(9));
        assert_eq!(config.round.duration_secs, 30);
        assert_eq!(config.round.feedback, FeedbackPolicy::Silent);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_duration_out_of_range_rejected() {
        assert!(Args::try_parse_from(["mathquiz", "--duration", "0"]).is_err());
        assert!(Args::try_parse_from(["mathquiz", "--duration", "99999"]).is_err());
    }

    #[test]
    fn test_bad_log_format_rejected() {
        assert!(Args::try_parse_from(["mathquiz", "--log-format", "xml"]).is_err());
    }
}
