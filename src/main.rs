use anyhow::Context;
use calcpad::Config;
use calcpad::session::Session;
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Keypad calculator for the terminal.
///
/// Type keys and press Enter: digits, `.`, `+ - * /`, `=`, `%`, plus letter
/// keys for clear, backspace and sign toggle (`c`, `b`, `n` by default).
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Config file (defaults to <config dir>/calcpad/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Feed these keys, print the final display and exit
    #[arg(long)]
    keys: Option<String>,

    /// Print displays as JSON objects
    #[arg(long)]
    json: bool,

    /// Copy results to the clipboard after every equals
    #[arg(long)]
    copy: bool,

    /// Log filter, e.g. "calcpad=debug"
    #[arg(long)]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref()).context("Failed to load config")?;
    config.json |= args.json;
    config.copy_on_equals |= args.copy;
    if let Some(filter) = args.log {
        config.log_filter = filter;
    }

    init_logging(&config.log_filter);

    let mut session = Session::new(config);
    let stdout = io::stdout();

    if let Some(keys) = args.keys {
        let display = session.feed(&keys);
        session
            .write_display(&mut stdout.lock(), &display)
            .context("Failed to write display")?;
        return Ok(());
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    tracing::debug!(interactive, "starting session");

    session
        .run(stdin.lock(), stdout.lock(), interactive)
        .context("Session failed")?;

    Ok(())
}

/// Log to stderr so stdout carries only displays. `RUST_LOG` wins over the
/// configured filter.
fn init_logging(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}
