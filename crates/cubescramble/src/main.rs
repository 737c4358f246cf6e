//! Command-line scramble generator for cube puzzles.

mod cli;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    color_eyre::install()?;
    cli::exec(args)
}
