use anyhow::Result;
use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Check the availability of a service
#[derive(Debug, Parser)]
#[command(name = "check-service", version)]
pub struct Cli {
    /// The URL of the service to check
    #[arg(value_name = "url", value_parser = NonEmptyStringValueParser::new())]
    pub url: String,

    /// Timeout in seconds for the request
    #[arg(
        long,
        env = "CHECK_SERVICE_TIMEOUT",
        value_name = "SECONDS",
        default_value_t = DEFAULT_TIMEOUT_SECONDS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, env = "CHECK_SERVICE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Everything a single check needs, passed by value into the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub url: String,
    pub timeout_seconds: u64,
    pub log_level: String,
}

impl From<Cli> for CheckConfig {
    fn from(cli: Cli) -> Self {
        Self {
            url: cli.url,
            timeout_seconds: cli.timeout,
            log_level: cli.log_level,
        }
    }
}

impl CheckConfig {
    /// Get the log level as a tracing::Level
    pub fn get_tracing_level(&self) -> Result<tracing::Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(tracing::Level::TRACE),
            "debug" => Ok(tracing::Level::DEBUG),
            "info" => Ok(tracing::Level::INFO),
            "warn" | "warning" => Ok(tracing::Level::WARN),
            "error" => Ok(tracing::Level::ERROR),
            _ => Err(anyhow::anyhow!(
                "Invalid log level: {}. Valid levels are: trace, debug, info, warn, error",
                self.log_level
            )),
        }
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_seconds)
    }
}
