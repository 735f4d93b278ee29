use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use fileshell::{Session, Shell};

/// Interactive shell for basic file management.
#[derive(Parser, Debug)]
#[command(name = "fileshell", version, about)]
struct Cli {
    /// Directory to start in instead of the current one.
    #[arg(short = 'C', long)]
    dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let session = match &cli.dir {
        Some(dir) => Session::new(dir)
            .with_context(|| format!("cannot start in {}", dir.display()))?,
        None => Session::from_env().context("cannot determine the current directory")?,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(session, stdin.lock(), stdout.lock());
    shell.run()
}
