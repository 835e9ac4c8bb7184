use super::print_errors;
use crate::render::Renderer;
use anyhow::Result;
use chrono::NaiveDate;
use rasa_core::{
    Error, Journal,
    calendar::{legend, month_cells},
    summarize,
};

pub fn summary_mode(month: u32, year: i32, renderer: &Renderer, journal: &Journal) -> Result<()> {
    let result = journal.query_by_period(month, year)?;
    let title = period_title(month, year);

    match summarize(&result.entries) {
        Ok(summary) => {
            renderer.print_md(&format!("# {title}"));
            renderer.print_summary(&summary);
            let cells = month_cells(month, year, &summary.entries_by_day)?;
            renderer.print_calendar(&cells);
            renderer.print_legend(&legend());
        }
        Err(Error::EmptyPeriod) => {
            renderer.print_info(&format!("No entries recorded for {title}."));
        }
        Err(e) => return Err(e.into()),
    }

    if !result.errors.is_empty() {
        print_errors(renderer, &result.errors);
    }
    Ok(())
}

fn period_title(month: u32, year: i32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{month}/{year}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_titles_use_the_month_name() {
        assert_eq!(period_title(6, 2025), "June 2025");
        assert_eq!(period_title(2, 2024), "February 2024");
    }
}
