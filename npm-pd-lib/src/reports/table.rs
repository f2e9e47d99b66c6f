use crate::Result;
use crate::facts::SearchResult;
use chrono::{Local, TimeZone};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use core::fmt::{Display, Write};

const HEADERS: [&str; 7] = ["Last Update", "Name", "Version", "Quality", "Popularity", "Maintenance", "Score"];

/// Render a package listing as a table, one row per result.
pub fn generate<W: Write>(results: &[SearchResult], use_colors: bool, writer: &mut W) -> Result<()> {
    generate_in_timezone(results, use_colors, &Local, writer)
}

/// Render a package listing with its dates shown in `tz`.
pub(super) fn generate_in_timezone<Tz, W>(results: &[SearchResult], use_colors: bool, tz: &Tz, writer: &mut W) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
    W: Write,
{
    let mut table = Table::new();
    let _ = table.load_preset(UTF8_FULL);

    if use_colors {
        let _ = table.enforce_styling();
        let _ = table.set_header(HEADERS.iter().map(|header| Cell::new(header).fg(Color::Cyan).add_attribute(Attribute::Bold)));
    } else {
        let _ = table.force_no_tty();
        let _ = table.set_header(HEADERS);
    }

    for result in results {
        let score = &result.score;
        let _ = table.add_row(vec![
            Cell::new(result.package.date.with_timezone(tz).format("%Y-%m-%d")),
            Cell::new(&result.package.name),
            Cell::new(&result.package.version),
            score_cell(score.detail.quality),
            score_cell(score.detail.popularity),
            score_cell(score.detail.maintenance),
            score_cell(score.final_score),
        ]);
    }

    writeln!(writer, "{table}")?;
    Ok(())
}

fn score_cell(value: f64) -> Cell {
    Cell::new(format!("{value:.4}")).set_alignment(CellAlignment::Right)
}
