pub mod checker;
pub mod config;
pub mod prober;
pub mod timestamp;

pub use checker::{CheckResult, Checker, Outcome};
pub use config::{CheckConfig, Cli};
