use super::editor_utils::{create_editor_buffer, resolve_editor};
use crate::cli::AddArgs;
use crate::render::Renderer;
use anyhow::Result;
use chrono::Local;
use rasa_core::{Journal, JournalEntry};

pub fn add_mode(args: &AddArgs, renderer: &Renderer, journal: &Journal) -> Result<()> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let prompt = args.prompt.then(|| args.rasa.pick_prompt().to_string());
    if let Some(text) = &prompt {
        renderer.print_md(&format!("> {text}"));
    }

    let verse = if !args.verse.is_empty() {
        Some(args.verse.join(" "))
    } else if args.prompt {
        compose_verse(renderer, journal)?
    } else {
        None
    };

    let entry = JournalEntry::new(date, args.rasa, prompt, verse)?;
    journal.append(&entry)?;

    renderer.print_info(&format!(
        "Added new entry to {}",
        journal.config.journal_file.display()
    ));
    renderer.print_entry_line(&entry);
    Ok(())
}

fn compose_verse(renderer: &Renderer, journal: &Journal) -> Result<Option<String>> {
    let editor = resolve_editor(&journal.config.editor)?;
    let input = create_editor_buffer(&editor)?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        renderer.print_info("No verse to save, because no text was received.");
        return Ok(None);
    }
    Ok(Some(trimmed.to_string()))
}
