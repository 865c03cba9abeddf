// src/bin/tokcount.rs
use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use tokcount_core::cli::Cli;
use tokcount_core::count;
use tokcount_core::exit::TallyExit;
use tokcount_core::input;
use tokcount_core::tokens::BpeTokenizer;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        TallyExit::for_error(&e).exit();
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = input::load_json(&cli.file)?;
    let tokenizer = BpeTokenizer::default_model()?;
    let tally = count::count_document(&tokenizer, &root);
    println!("{}", tally.total());
    Ok(())
}
