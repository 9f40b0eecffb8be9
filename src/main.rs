use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::Stylize;
use tracing_subscriber::EnvFilter;

use hanoi::puzzle::{Puzzle, DEFAULT_DISCS};

#[derive(Parser)]
#[command(name = "hanoi")]
#[command(about = "Solve the Tower of Hanoi iteratively and print every move", long_about = None)]
struct Cli {
    /// Number of discs; non-positive values are treated as 1
    #[arg(short = 'n', long, default_value_t = DEFAULT_DISCS, allow_negative_numbers = true)]
    discs: i32,

    /// Only print the initial and final boards
    #[arg(short, long)]
    quiet: bool,

    /// Enable per-move debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut puzzle = Puzzle::new(cli.discs);
    println!("Initial Puzzle:\n{}", puzzle);

    let mut original = puzzle.clone();
    let output = puzzle.solve().context("solving the puzzle")?;
    println!(
        "Solved {} discs with: {} moves",
        puzzle.disc_count(),
        output.len()
    );

    if cli.quiet {
        println!("{}", puzzle);
        return Ok(());
    }

    for (step, item) in output.iter().enumerate() {
        original
            .apply_move(item.from, item.to)
            .with_context(|| format!("replaying move {} ({})", step + 1, item))?;
        let label = format!("#{}", step + 1);
        println!(
            "{} {}\n{}",
            label.dark_grey(),
            item.to_string().bold(),
            original
        );
    }

    Ok(())
}
