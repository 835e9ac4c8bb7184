mod about_mode;
mod add_mode;
mod editor_utils;
mod entries_mode;
mod prompt_mode;
mod summary_mode;
mod use_color;

pub use about_mode::about_mode;
pub use add_mode::add_mode;
pub use entries_mode::entries_mode;
pub use prompt_mode::prompt_mode;
pub use summary_mode::summary_mode;
pub use use_color::use_color;

use crate::render::Renderer;
use rasa_core::QueryError;

/// Reports rows the query had to skip, without failing the command.
pub(crate) fn print_errors(renderer: &Renderer, errors: &[QueryError]) {
    renderer.print_md(&format!("\n# Skipped {} malformed row(s):", errors.len()));
    for error in errors {
        match error {
            QueryError::MalformedRow { line, reason } => {
                renderer.print_md(&format!("* line {line}: {reason}"));
            }
            QueryError::FileError { path, reason } => {
                renderer.print_md(&format!("* Could not process '{}': {}", path.display(), reason));
            }
        }
    }
}
