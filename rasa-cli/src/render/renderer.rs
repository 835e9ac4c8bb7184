use super::theme::Palette;
use rasa_core::calendar::Cell;
use rasa_core::render::format_date;
use rasa_core::{JournalEntry, Rasa, Summary};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: Palette::default_skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions { use_color: true },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else if md.ends_with('\n') {
            print!("{md}");
        } else {
            println!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    /// One-line confirmation for a freshly recorded entry.
    pub fn print_entry_line(&self, entry: &JournalEntry) {
        let mut date = format_date(entry.date);
        let mut name = entry.rasa.name().to_string();
        if self.opts.use_color {
            date = date.with(Color::Cyan).to_string();
            if let Some(color) = Palette::color_for(entry.rasa.color()) {
                name = name.with(color).to_string();
            }
        }
        println!("{} - {} ({})", date, name, entry.rasa.meaning());
    }

    pub fn print_entries(&self, entries: &[JournalEntry]) {
        for (i, entry) in entries.iter().enumerate() {
            let heading = format!("## {}: {}", format_date(entry.date), entry.rasa.name());
            let mut md = format!("{heading}\n");
            if let Some(prompt) = &entry.prompt {
                md.push_str(&format!("*Prompt:* {prompt}\n"));
            }
            if let Some(verse) = &entry.verse {
                md.push_str(&format!("> {verse}\n"));
            }
            self.print_md(&md);

            if i + 1 < entries.len() {
                println!();
            }
            self.print_md("---");
        }
    }

    /// Per-rasa counts and the dominant rasa of a summarized period.
    pub fn print_summary(&self, summary: &Summary) {
        if self.opts.use_color {
            let mut md = String::from("|:-|:-|:-:|\n|**Rasa**|**Meaning**|**Entries**|\n|:-|:-|:-:|\n");
            for (rasa, count) in &summary.counts {
                md.push_str(&format!("|{}|{}|{}|\n", rasa.name(), rasa.meaning(), count));
            }
            md.push_str("|-|\n");
            self.skin.print_text(&md);
        } else {
            for (rasa, count) in &summary.counts {
                println!("{:<11}{:<20}{}", rasa.name(), rasa.meaning(), count);
            }
        }
        self.print_info(&format!(
            "{} entries. Dominant rasa: {} ({}).",
            summary.total,
            summary.dominant.name(),
            summary.dominant.meaning()
        ));
    }

    /// The month as rows of seven day cells, each painted in its rasa's
    /// color. Without color, recorded days carry a `*` marker instead.
    pub fn print_calendar(&self, cells: &[Cell]) {
        println!();
        for week in cells.chunks(7) {
            let mut row = String::new();
            for cell in week {
                let day = format!("{:>2}", cell.day);
                let painted = match Palette::color_for(cell.color) {
                    Some(color) if self.opts.use_color => {
                        format!("{} ", day.with(color).bold())
                    }
                    Some(_) => format!("{day}*"),
                    None => format!("{day} "),
                };
                row.push_str(&painted);
                row.push(' ');
            }
            println!("{}", row.trim_end());
        }
    }

    /// The color key under the calendar, one row per rasa in id order.
    pub fn print_legend(&self, legend: &[(&'static str, Rasa)]) {
        println!();
        for (token, rasa) in legend {
            let swatch = match Palette::color_for(token) {
                Some(color) if self.opts.use_color => "██".with(color).to_string(),
                _ => "  ".to_string(),
            };
            println!(
                "{} {:<10} {:<11} {}",
                swatch,
                token,
                rasa.name(),
                rasa.meaning()
            );
        }
    }
}
