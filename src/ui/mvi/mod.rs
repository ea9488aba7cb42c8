//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ (State, Option<Effect>) ──→ View
//!    ↑                              │
//!    └── completion intent ─────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Effect**: Description of an asynchronous side effect whose result
//!   re-enters the system as a new intent
//! - **Reducer**: Pure function that transforms state based on intents

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::Effect;
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
