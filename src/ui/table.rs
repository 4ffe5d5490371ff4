// Fri Oct 16 2026 - Alex

use colored::*;
use std::cmp::max;

pub struct TableBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
    alignment: Vec<Alignment>,
    use_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
            column_widths: Vec::new(),
            alignment: Vec::new(),
            use_color: true,
        }
    }

    pub fn with_headers(mut self, headers: &[&str]) -> Self {
        self.headers = headers.iter().map(|s| s.to_string()).collect();
        self.column_widths = self.headers.iter().map(|h| h.len()).collect();
        self.alignment = vec![Alignment::Left; self.headers.len()];
        self
    }

    pub fn add_row<T: std::fmt::Display>(mut self, row: &[T]) -> Self {
        let string_row: Vec<String> = row.iter().map(|c| c.to_string()).collect();

        for (i, cell) in string_row.iter().enumerate() {
            let width = visible_len(cell);
            match self.column_widths.get_mut(i) {
                Some(w) => *w = max(*w, width),
                None => self.column_widths.push(width),
            }
        }

        self.rows.push(string_row);
        self
    }

    pub fn with_alignment(mut self, column: usize, alignment: Alignment) -> Self {
        if let Some(a) = self.alignment.get_mut(column) {
            *a = alignment;
        }
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn build(&self) -> String {
        if self.headers.is_empty() && self.rows.is_empty() {
            return String::new();
        }

        let mut output = Vec::new();
        let separator = self.separator();

        output.push(separator.clone());
        if !self.headers.is_empty() {
            output.push(self.build_row(&self.headers, true));
            output.push(separator.clone());
        }
        for row in &self.rows {
            output.push(self.build_row(row, false));
        }
        output.push(separator);

        output.join("\n")
    }

    fn separator(&self) -> String {
        let parts: Vec<String> = self.column_widths.iter().map(|w| "-".repeat(w + 2)).collect();
        format!("+{}+", parts.join("+"))
    }

    fn build_row(&self, cells: &[String], is_header: bool) -> String {
        let mut parts = Vec::with_capacity(cells.len());

        for (i, cell) in cells.iter().enumerate() {
            let width = self.column_widths.get(i).copied().unwrap_or(0);
            let padding = " ".repeat(width.saturating_sub(visible_len(cell)));
            let aligned = match self.alignment.get(i).copied().unwrap_or(Alignment::Left) {
                Alignment::Left => format!("{}{}", cell, padding),
                Alignment::Right => format!("{}{}", padding, cell),
            };

            let formatted = if is_header && self.use_color {
                aligned.bold().to_string()
            } else {
                aligned
            };
            parts.push(format!(" {} ", formatted));
        }

        format!("|{}|", parts.join("|"))
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Length of `s` without ANSI color sequences.
fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut in_escape = false;
    for c in s.chars() {
        match (in_escape, c) {
            (false, '\u{1b}') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, _) => len += 1,
        }
    }
    len
}
