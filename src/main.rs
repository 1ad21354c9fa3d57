use std::process;

use clap::Parser;
use colored::Colorize;
use oriscan::{
    cli::{Args, Command},
    run,
};

fn main() {
    let args = Args::parse();

    #[cfg(feature = "tracing")]
    init_tracing();

    if !args.quiet {
        print_banner(&args.command);
    }

    if let Err(e) = run::run(&args) {
        eprintln!(
            "{}\n {}",
            "Application error:".blue().bold(),
            e.to_string().blue()
        );
        drop(e);
        process::exit(1);
    }
}

/// Prints the operation and its parameters to stderr, keeping stdout for results.
fn print_banner(command: &Command) {
    let (operation, params) = match command {
        Command::Count { pattern, .. } => ("count", format!("pattern={pattern}")),
        Command::Table { k, min_count, .. } => ("table", format!("k={k} min-count={min_count}")),
        Command::Frequent { k, .. } => ("frequent", format!("k={k}")),
        Command::Revcomp { .. } => ("revcomp", String::new()),
        Command::Find { pattern, .. } => ("find", format!("pattern={pattern}")),
        Command::Clumps {
            k,
            window,
            threshold,
            strategy,
            ..
        } => (
            "clumps",
            format!("k={k} L={window} t={threshold} strategy={strategy}"),
        ),
    };
    eprintln!("{}: {} {}", "oriscan".bold(), operation.blue().bold(), params);
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
