//! Single-select list
//!
//! A table of rows where exactly one row can be highlighted and committed.
//! Both halves of the confirmation question are instances of this list.

use super::input::QuestionInput;
use super::{KeyKind, Msg};
use crate::scrolling::ScrollState;

/// Rows shown before the first resize message arrives
const DEFAULT_VISIBLE_ROWS: usize = 20;

/// Gap between table columns
const COLUMN_GAP: &str = "  ";

/// A list from which a single option is chosen as the answer
#[derive(Debug, Clone)]
pub struct SingleSelectList {
    question: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    options: Vec<String>,
    scroll: ScrollState,
    choice: String,
    reserved_lines: usize,
}

impl SingleSelectList {
    /// Build a list from a question payload
    pub fn new(input: &QuestionInput) -> Self {
        let mut scroll = ScrollState::new(input.rows.len(), DEFAULT_VISIBLE_ROWS);
        if let Some(default) = &input.default_option {
            if let Some(index) = input.indexed_options.iter().position(|o| o == default) {
                scroll.set_selected(Some(index));
            }
        }

        let mut list = Self {
            question: input.question_string.clone(),
            headers: input.header_strings.clone(),
            rows: input.rows.clone(),
            options: input.indexed_options.clone(),
            scroll,
            choice: String::new(),
            reserved_lines: 0,
        };
        list.reserved_lines = list.chrome_lines();
        list
    }

    /// Lines the view spends on the prompt, the header and the page footer
    pub fn chrome_lines(&self) -> usize {
        usize::from(!self.question.is_empty()) + usize::from(!self.headers.is_empty()) + 1
    }

    /// Lines of a resized area that are not available to rows
    pub fn set_reserved_lines(&mut self, reserved_lines: usize) {
        self.reserved_lines = reserved_lines;
    }

    /// Number of rows drawn at once
    pub fn visible_rows(&self) -> usize {
        self.scroll.visible_items
    }

    /// Highlight the row at `index`; any negative index clears the highlight
    pub fn select(&mut self, index: isize) {
        let index = usize::try_from(index).ok();
        self.scroll.set_selected(index);
    }

    /// Currently highlighted row
    pub fn selected(&self) -> Option<usize> {
        self.scroll.selected
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Apply a message forwarded by the owning question
    pub fn update(&mut self, msg: &Msg) {
        match msg {
            Msg::Key(KeyKind::Up) => self.scroll.move_up(),
            Msg::Key(KeyKind::Down) => self.scroll.move_down(),
            Msg::Resize { height, .. } => {
                let visible = usize::from(*height).saturating_sub(self.reserved_lines);
                self.scroll.update_visible_items(visible);
            }
            _ => {}
        }
    }

    /// Commit the highlighted row as this list's answer
    pub fn select_item(&mut self) {
        self.choice = self
            .scroll
            .selected
            .and_then(|index| self.options.get(index))
            .cloned()
            .unwrap_or_default();
    }

    /// The committed answer, empty until [`select_item`](Self::select_item)
    pub fn choice(&self) -> &str {
        &self.choice
    }

    /// Render the prompt, header and visible rows
    pub fn view(&self) -> String {
        let widths = self.column_widths();
        let mut lines = Vec::new();

        if !self.question.is_empty() {
            lines.push(self.question.clone());
        }
        if !self.headers.is_empty() {
            lines.push(format!("  {}", format_cells(&self.headers, &widths)));
        }

        let (start, end) = self.scroll.visible_range();
        for (index, row) in self.rows.iter().enumerate().take(end).skip(start) {
            let marker = if self.scroll.selected == Some(index) {
                "> "
            } else {
                "  "
            };
            lines.push(format!("{}{}", marker, format_cells(row, &widths)));
        }

        if let Some((page, pages)) = self.scroll.page_info() {
            lines.push(format!("  (page {}/{})", page, pages));
        }

        lines.join("\n")
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for row in std::iter::once(&self.headers).chain(self.rows.iter()) {
            for (column, cell) in row.iter().enumerate() {
                let width = cell.chars().count();
                match widths.get_mut(column) {
                    Some(current) => *current = (*current).max(width),
                    None => widths.push(width),
                }
            }
        }
        widths
    }
}

fn format_cells(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    padded.join(COLUMN_GAP).trim_end().to_string()
}
