use super::print_errors;
use crate::render::Renderer;
use anyhow::Result;
use rasa_core::{Journal, Rasa};

pub fn entries_mode(rasa: Rasa, renderer: &Renderer, journal: &Journal) -> Result<()> {
    let result = journal.query_by_rasa(rasa);
    if result.entries.is_empty() {
        renderer.print_info(&format!("No entries found for {}.", rasa.name()));
    } else {
        renderer.print_info(&format!(
            "{} entries found for {} ({}).",
            result.entries.len(),
            rasa.name(),
            rasa.meaning()
        ));
        renderer.print_entries(&result.entries);
    }
    if !result.errors.is_empty() {
        print_errors(renderer, &result.errors);
    }
    Ok(())
}
