//! State record for the counter.

use crate::ui::mvi::UiState;

/// Inclusive lower bound enforced by the step intents.
pub const LOWER_LIMIT: i64 = 0;

/// Inclusive upper bound enforced by the step intents.
pub const UPPER_LIMIT: i64 = 10;

/// Shown in place of a trivia sentence when the fetch fails.
pub const QUOTE_FALLBACK: &str = "Could not load a fact for this number.";

/// The whole state of the stepper screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CounterState {
    /// Raw typed text for the initial value; not guaranteed parseable.
    pub pending_input: String,

    /// The authoritative counter value. Step intents keep it within
    /// `[LOWER_LIMIT, UPPER_LIMIT]`; a parseable `InputChanged` writes it
    /// through unclamped (normalized by the next step).
    pub value: i64,

    /// True exactly when the last step was clamped at a bound.
    /// Cleared only by `CounterIntent::AlertDismissed`.
    pub limit_reached: bool,

    /// Outcome of the most recent quote fetch (trivia sentence or the
    /// fallback text). `None` before any fetch completes.
    pub quote: Option<String>,
}

impl UiState for CounterState {}
