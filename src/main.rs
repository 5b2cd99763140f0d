mod shell;

use std::io::{self, Write};

use bst_explorer::BinaryTree;
use clap::Parser;
use colored::Colorize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use shell::args::Cli;
use shell::command::execute;
use shell::error::ShellResult;
use shell::Shell;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {e}").red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> ShellResult<()> {
    let mut tree: BinaryTree = cli.values.iter().copied().collect();
    tracing::debug!(seeded = cli.values.len(), nodes = tree.node_count(), "tree seeded");

    match cli.command {
        Some(command) => {
            let mut out = io::stdout().lock();
            execute(&command, &mut tree, &mut out)?;
            out.flush()?;
            Ok(())
        }
        None => Shell::new(tree, cli.history)?.repl(),
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG wins over -d when it is set.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
    tracing::debug!(?level, "logging initialized");
}
