mod cli;
mod cli_modes;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use cli_modes::{about_mode, add_mode, entries_mode, prompt_mode, summary_mode, use_color};
use rasa_core::Journal;
use render::{RenderOptions, Renderer};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("rasa: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let journal = Journal::new()?;
    let renderer = Renderer::new(Some(RenderOptions {
        use_color: use_color(&cli),
    }));

    match &cli.command {
        Command::Add(args) => add_mode(args, &renderer, &journal),
        Command::Prompt { rasa } => prompt_mode(*rasa, &renderer),
        Command::Summary { month, year } => summary_mode(*month, *year, &renderer, &journal),
        Command::Entries { rasa } => entries_mode(*rasa, &renderer, &journal),
        Command::About => about_mode(&renderer),
        Command::Path => {
            renderer.print_info(&format!("{}", journal.config.journal_file.display()));
            Ok(())
        }
    }
}
