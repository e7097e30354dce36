use std::fmt;
use std::time::Duration;

use colored::Colorize;
use tracing::{debug, error};

use crate::config::CheckConfig;
use crate::prober::HttpProbe;
use crate::timestamp::{Clock, elapsed_ms};

/// How a single check ended. Only an exact `200` counts as available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Available { status: u16 },
    UnavailableStatus { status: u16 },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub url: String,
    pub outcome: Outcome,
    pub response_time_ms: f64,
}

impl CheckResult {
    pub fn status_code(&self) -> Option<u16> {
        match self.outcome {
            Outcome::Available { status } | Outcome::UnavailableStatus { status } => Some(status),
            Outcome::Failed { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Failed { error } => Some(error),
            _ => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.outcome, Outcome::Available { .. })
    }

    /// The [`Display`](fmt::Display) line coloured for a terminal: green when
    /// available, yellow for any other status, red on failure.
    pub fn colored_line(&self) -> String {
        let line = self.to_string();
        match self.outcome {
            Outcome::Available { .. } => line.green().to_string(),
            Outcome::UnavailableStatus { .. } => line.yellow().to_string(),
            Outcome::Failed { .. } => line.red().to_string(),
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Available { .. } => write!(
                f,
                "Service at {} is available! Response time: {:.2} ms",
                self.url, self.response_time_ms
            ),
            Outcome::UnavailableStatus { status } => write!(
                f,
                "Service at {} responded with status: {}. Response time: {:.2} ms",
                self.url, status, self.response_time_ms
            ),
            Outcome::Failed { error } => {
                write!(f, "Failed to check service at {}: {}", self.url, error)
            }
        }
    }
}

pub struct Checker<P, C> {
    probe: P,
    clock: C,
}

impl<P: HttpProbe, C: Clock> Checker<P, C> {
    pub fn new(probe: P, clock: C) -> Self {
        Self { probe, clock }
    }

    /// Issues exactly one GET and classifies the result. Transport errors are
    /// folded into [`Outcome::Failed`]; this never returns an error.
    pub async fn check(&self, url: &str, timeout: Duration) -> CheckResult {
        let start = self.clock.now_ns();

        debug!("start to send a get request to the url=[{}]", url);
        let result = self.probe.get(url, timeout).await;

        let response_time_ms = elapsed_ms(start, self.clock.now_ns());

        let outcome = match result {
            Ok(200) => Outcome::Available { status: 200 },
            Ok(status) => Outcome::UnavailableStatus { status },
            Err(e) => {
                let error = format!("{e:#}");
                error!("Failed to check service at {}: {}", url, error);
                Outcome::Failed { error }
            }
        };

        CheckResult {
            url: url.to_string(),
            outcome,
            response_time_ms,
        }
    }

    pub async fn run(&self, config: &CheckConfig) -> CheckResult {
        self.check(&config.url, config.timeout()).await
    }
}
