//! Counter feature module.
//!
//! A bounded numeric stepper with a text-driven initial value and an
//! asynchronous number-trivia lookup.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Counter state record (value, pending input, alert, quote)
//! - `intent.rs` - User actions and fetch completions
//! - `reducer.rs` - State transitions plus the optional fetch effect

mod intent;
mod reducer;
mod state;

pub use intent::{CounterEffect, CounterIntent};
pub use reducer::CounterReducer;
pub use state::{CounterState, LOWER_LIMIT, QUOTE_FALLBACK, UPPER_LIMIT};
