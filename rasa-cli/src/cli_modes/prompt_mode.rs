use crate::render::Renderer;
use anyhow::Result;
use rasa_core::Rasa;

pub fn prompt_mode(rasa: Rasa, renderer: &Renderer) -> Result<()> {
    let prompt = rasa.pick_prompt();
    renderer.print_info(&format!("{} ({}) asks:", rasa.name(), rasa.meaning()));
    renderer.print_md(&format!("> {prompt}"));
    Ok(())
}
