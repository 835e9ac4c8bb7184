use crate::render::Renderer;
use anyhow::Result;
use rasa_core::Rasa;

/// Menu emoji for the nine rasas, in catalog (id) order.
const EMOJI: [&str; 9] = ["😍", "😄", "😢", "😡", "💪", "😨", "🤢", "😲", "😐"];

const LEARN_MORE_URL: &str = "https://bharatanatyamnataraja.wordpress.com/navarasam/";

pub fn about_mode(renderer: &Renderer) -> Result<()> {
    let mut md = String::from("# The Nine Rasas\n\n");
    md.push_str(
        "Navarasam names the nine emotional states of Indian classical \
         performance. Every journal entry records one of them, and the \
         mood calendar paints each day in its rasa's color.\n\n",
    );
    for rasa in Rasa::all() {
        let emoji = EMOJI[(rasa.id() - 1) as usize];
        md.push_str(&format!(
            "{}. {} **{}** - {} *({})*\n",
            rasa.id(),
            emoji,
            rasa.name(),
            rasa.meaning(),
            rasa.color()
        ));
    }
    md.push_str(&format!("\nRead more: {LEARN_MORE_URL}\n"));
    renderer.print_md(&md);
    Ok(())
}
