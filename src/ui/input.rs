use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::counter::{CounterIntent, CounterState};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if let Some(intent) = intent_for_key(key, app.counter()) {
        app.dispatch(intent);
    }
}

/// Map a key press to a counter intent, given the current state.
///
/// Text editing is resolved here: the view owns the keystroke-to-string
/// translation and the reducer only ever sees the full new field text.
pub fn intent_for_key(key: KeyEvent, state: &CounterState) -> Option<CounterIntent> {
    if is_ctrl_char(key, 'g') {
        return Some(CounterIntent::QuoteRequested);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('+') => Some(CounterIntent::Increment),
        // On an empty field, '-' starts a negative initial value; with text
        // present (or via the arrow) it steps the counter down.
        KeyCode::Char('-') if state.pending_input.is_empty() => {
            Some(CounterIntent::InputChanged("-".to_string()))
        }
        KeyCode::Down | KeyCode::Char('-') => Some(CounterIntent::Decrement),
        KeyCode::Enter | KeyCode::Esc if state.limit_reached => {
            Some(CounterIntent::AlertDismissed)
        }
        KeyCode::Backspace => {
            let mut text = state.pending_input.clone();
            text.pop();
            Some(CounterIntent::InputChanged(text))
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut text = state.pending_input.clone();
            text.push(ch);
            Some(CounterIntent::InputChanged(text))
        }
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
