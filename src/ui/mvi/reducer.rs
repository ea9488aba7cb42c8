//! Reducer trait for MVI architecture.

use super::effect::Effect;
use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> (State, Option<Effect>).
/// The optional effect describes work for the caller to perform; the
/// reducer itself performs no I/O.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// The effect type this reducer may emit.
    type Effect: Effect;

    /// Process an intent and return the new state plus an optional effect.
    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Option<Self::Effect>);
}
