use std::{env, io::stderr, process::ExitCode};

use anyhow::Context;
use freegames::{cli::Cli, config::Config, launcher::Launcher};
use is_terminal::IsTerminal;
use tracing::debug;
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Nothing is logged unless asked for with `RUST_LOG`, fatal errors are reported by `main`
fn env_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::OFF.into())
        .parse_lossy(directives.unwrap_or_default())
}

// NOTE: logs go to stderr so that `show` output can be redirected, e.g.
// `RUST_LOG=debug freegames show snake > snake.py`
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(stderr)
                .without_time()
                .with_line_number(true)
                .with_ansi(stderr().is_terminal()),
        )
        .with(env_filter(env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .init();
}

fn run() -> anyhow::Result<ExitCode> {
    let config = Config::from_env();
    debug!("Resolved config: {config:?}");

    // Parse even when discovery fails, so that help and usage errors still work
    let launcher = Launcher::new(config);
    let games = launcher.as_ref().map(Launcher::games).unwrap_or_default();
    let cli = Cli::parse_with_games(games);

    let launcher = launcher.context("Failed to discover games")?;
    let code = cli.run(&launcher, &mut std::io::stdout().lock())?;
    Ok(code)
}

fn main() -> ExitCode {
    init_tracing();

    run().unwrap_or_else(|e| {
        eprintln!("Error: {e:?}");
        ExitCode::FAILURE
    })
}
