//! Navigation bar component
//!
//! A persistent bottom bar listing the keys the current question accepts.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One key hint in the navigation bar
#[derive(Debug, Clone, PartialEq)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

impl NavBarItem {
    pub fn new(key_display: &str, action_label: &str) -> Self {
        Self {
            key_display: key_display.to_string(),
            action_label: action_label.to_string(),
        }
    }
}

/// Navigation bar component
pub struct NavBar {
    items: Vec<NavBarItem>,
}

impl NavBar {
    /// Create a new navigation bar with the given items
    pub fn new(items: Vec<NavBarItem>) -> Self {
        Self { items }
    }

    /// Key hints for a confirmation question
    pub fn for_confirmation() -> Self {
        Self::new(vec![
            NavBarItem::new("Up/Dn", "Navigate"),
            NavBarItem::new("Enter", "Select"),
            NavBarItem::new("Ctrl-C", "Cancel"),
        ])
    }

    /// Build the styled line without rendering it
    pub fn line(&self) -> Line<'_> {
        let mut spans = Vec::new();

        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled("[", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(
                item.key_display.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled("]", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                item.action_label.as_str(),
                Style::default().fg(Color::White),
            ));
        }

        Line::from(spans)
    }

    /// Render the navigation bar
    pub fn render(&self, f: &mut Frame, area: Rect) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let paragraph = Paragraph::new(self.line())
            .block(Block::default().borders(Borders::NONE))
            .style(Style::default().bg(Color::Rgb(30, 30, 40)));

        f.render_widget(paragraph, area);
    }

    /// Get the required height for the navigation bar
    pub fn height() -> u16 {
        1
    }
}
