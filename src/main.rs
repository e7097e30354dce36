use std::io::IsTerminal;

use clap::Parser;
use service_checker::prober::http::ReqwestProbe;
use service_checker::timestamp::MonotonicClock;
use service_checker::{CheckConfig, Checker, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Usage errors exit here, before any network activity
    let config = CheckConfig::from(Cli::parse());
    let log_level = config.get_tracing_level()?;

    // Logs go to stderr so stdout carries only the result line
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                format!("service_checker={}", log_level.as_str().to_lowercase()).parse()?,
            ),
        )
        .init();

    let checker = Checker::new(ReqwestProbe::new()?, MonotonicClock);
    let result = checker.run(&config).await;

    if std::io::stdout().is_terminal() {
        println!("{}", result.colored_line());
    } else {
        println!("{result}");
    }

    Ok(())
}
