use anyhow::Result;
use crossterm::tty::IsTty;
use std::io;
use tetris_stack::{
    config::{Config, USAGE},
    PieceSupply, Session, TerminalIo,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr, so the transcript on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::from_args(std::env::args().skip(1))?;
    if config.help {
        print!("{USAGE}");
        return Ok(());
    }

    let stdout = io::stdout();
    let color = config.color.unwrap_or_else(|| stdout.is_tty());
    let supply = PieceSupply::new(config.generator());

    let mut io = TerminalIo::new(io::stdin().lock(), stdout.lock(), color);
    Session::new(supply, &mut io).run()?;

    Ok(())
}
