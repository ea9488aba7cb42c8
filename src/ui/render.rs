use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::counter::CounterState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, centered_rect, layout_regions};
use crate::ui::theme::{
    ALERT_TEXT, GLOBAL_BORDER, HEADER_TEXT, INPUT_TEXT, POPUP_BORDER, VALUE_ACCENT,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.counter();

    frame.render_widget(Header::new().widget(state), header);
    frame.render_widget(Clear, body);

    let (input, stepper, quote) = body_regions(body);
    frame.render_widget(input_field(state), input);
    frame.render_widget(stepper_row(state), stepper);
    frame.render_widget(quote_panel(state), quote);

    frame.render_widget(Footer::new().widget(area.width), footer);

    if state.limit_reached {
        let popup = centered_rect(40, 20, area);
        frame.render_widget(Clear, popup);
        frame.render_widget(limit_alert(), popup);
    }
}

fn input_field(state: &CounterState) -> Paragraph<'static> {
    let text = if state.pending_input.is_empty() {
        Span::styled(
            "[Initial value]",
            Style::default().fg(GLOBAL_BORDER),
        )
    } else {
        Span::styled(
            state.pending_input.clone(),
            Style::default().fg(INPUT_TEXT),
        )
    };
    Paragraph::new(Line::from(text))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("Initial value")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

fn stepper_row(state: &CounterState) -> Paragraph<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let value_style = Style::default().fg(VALUE_ACCENT);
    let line = Line::from(vec![
        Span::styled("ADD (↑)", text_style),
        Span::styled("   ", text_style),
        Span::styled(state.value.to_string(), value_style),
        Span::styled("   ", text_style),
        Span::styled("SUB (↓)", text_style),
    ]);
    Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn quote_panel(state: &CounterState) -> Paragraph<'static> {
    let body = state.quote.clone().unwrap_or_default();
    Paragraph::new(body)
        .style(Style::default().fg(HEADER_TEXT))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title("Number fact (Ctrl+G)")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

fn limit_alert() -> Paragraph<'static> {
    let lines = vec![
        Line::from(Span::styled(
            "Limit reached.",
            Style::default().fg(ALERT_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to dismiss",
            Style::default().fg(HEADER_TEXT),
        )),
    ];
    Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER)),
    )
}
