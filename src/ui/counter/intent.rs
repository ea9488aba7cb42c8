//! Intents and effects for the counter.

use crate::ui::mvi::{Effect, Intent};

/// Intents dispatched to the counter reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum CounterIntent {
    /// The initial-value text field changed. Carries the full new text.
    InputChanged(String),

    /// Step the value up by one, clamping at the upper bound.
    Increment,

    /// Step the value down by one, clamping at the lower bound.
    Decrement,

    /// The "Limit reached." alert was dismissed.
    AlertDismissed,

    /// User asked for a trivia sentence about the current value.
    QuoteRequested,

    /// A quote fetch finished. Errors arrive stringified; the reducer only
    /// cares whether the fetch succeeded.
    QuoteFetched(Result<String, String>),
}

impl Intent for CounterIntent {}

/// Side effects the counter reducer can ask the caller to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterEffect {
    /// Fetch a trivia sentence for `number`. The number is snapshotted at
    /// dispatch time, so later value changes never affect an in-flight fetch.
    FetchQuote { number: i64 },
}

impl Effect for CounterEffect {}
