use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::counter::{CounterState, LOWER_LIMIT, UPPER_LIMIT};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, VALUE_ACCENT};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &CounterState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let value_style = Style::default().fg(VALUE_ACCENT);
        let line = Line::from(vec![
            Span::styled("  numstep", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("range {}..{}", LOWER_LIMIT, UPPER_LIMIT), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("value {}", state.value), value_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
