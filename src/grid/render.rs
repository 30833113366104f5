//! Fixed-width terminal rendering of a [`GridLayout`]

use std::io::Write;

use super::layout::{store_label, Cell, GridLayout, GridRow};
use super::width::truncate;

/// Glyph drawn for any present peer
pub const MARKER: &str = "▀";

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

impl Cell {
    /// SGR color for the marker; `None` for absent cells
    pub fn color(&self) -> Option<&'static str> {
        match self {
            Cell::Leader => Some(RED),
            Cell::Learner => Some(YELLOW),
            Cell::Follower => Some(BLUE),
            Cell::Absent => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn header(&self, grid: &GridLayout) -> String {
        let mut line = String::new();
        push_field(&mut line, grid.widths.label, "", None);
        for (id, width) in grid.store_ids.iter().zip(&grid.widths.stores) {
            push_field(&mut line, *width, &store_label(*id), None);
        }
        push_field(&mut line, grid.widths.key, "start", None);
        push_field(&mut line, grid.widths.key, "end", None);
        line
    }

    pub fn row(&self, grid: &GridLayout, row: &GridRow) -> String {
        let mut line = String::new();
        push_field(&mut line, grid.widths.label, &row.label(), None);
        for (cell, width) in row.cells.iter().zip(&grid.widths.stores) {
            let glyph = if cell.is_present() { MARKER } else { "" };
            let color = if self.color { cell.color() } else { None };
            push_field(&mut line, *width, glyph, color);
        }
        push_field(&mut line, grid.widths.key, &row.start_key, None);
        push_field(&mut line, grid.widths.key, &row.end_key, None);
        line
    }

    /// Header followed by one line per row, in row order
    pub fn render(&self, grid: &GridLayout) -> Vec<String> {
        std::iter::once(self.header(grid))
            .chain(grid.rows.iter().map(|row| self.row(grid, row)))
            .collect()
    }

    /// Stream lines to `out`, each one complete before it is written.
    /// Returns the number of lines written.
    pub fn render_to<W: Write>(&self, grid: &GridLayout, out: &mut W) -> std::io::Result<usize> {
        writeln!(out, "{}", self.header(grid))?;
        for row in &grid.rows {
            writeln!(out, "{}", self.row(grid, row))?;
        }
        out.flush()?;
        Ok(grid.rows.len() + 1)
    }
}

/// Left-align `content` in `width` columns, truncating when it does not fit.
/// Escapes wrap only the visible text and never count toward the width.
fn push_field(line: &mut String, width: usize, content: &str, color: Option<&str>) {
    let (visible, used) = truncate(content, width);
    match color {
        Some(sgr) if !visible.is_empty() => {
            line.push_str(sgr);
            line.push_str(visible);
            line.push_str(RESET);
        }
        _ => line.push_str(visible),
    }
    line.extend(std::iter::repeat(' ').take(width - used));
}
