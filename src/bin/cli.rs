// src/bin/cli.rs
use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    ff_scrape::cli::run()
}
