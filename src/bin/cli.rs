// src/bin/cli.rs
use oj_lookup::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
