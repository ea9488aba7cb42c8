//! Reducer for the counter.

use crate::ui::mvi::Reducer;

use super::intent::{CounterEffect, CounterIntent};
use super::state::{CounterState, LOWER_LIMIT, QUOTE_FALLBACK, UPPER_LIMIT};

/// Reducer for the stepper screen.
///
/// Pure function — the only effect it ever emits is `FetchQuote`, which the
/// caller runs as a fire-and-forget task. The task's completion comes back
/// as `CounterIntent::QuoteFetched` on the same serialized intent stream.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;
    type Effect = CounterEffect;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> (Self::State, Option<Self::Effect>) {
        match intent {
            CounterIntent::InputChanged(text) => {
                // A parseable value writes through unclamped; the next step
                // intent normalizes it. Unparseable text only updates the
                // recorded input.
                if let Ok(value) = text.parse::<i64>() {
                    if !state.limit_reached {
                        state.value = value;
                    }
                }
                state.pending_input = text;
                (state, None)
            }

            CounterIntent::Increment => {
                // Saturating: a typed-in value near i64::MAX must step to the
                // clamp, not overflow.
                state.value = state.value.saturating_add(1);
                check_limits(&mut state);
                (state, None)
            }

            CounterIntent::Decrement => {
                state.value = state.value.saturating_sub(1);
                check_limits(&mut state);
                (state, None)
            }

            CounterIntent::AlertDismissed => {
                state.limit_reached = false;
                (state, None)
            }

            CounterIntent::QuoteRequested => {
                let number = state.value;
                (state, Some(CounterEffect::FetchQuote { number }))
            }

            CounterIntent::QuoteFetched(result) => {
                state.quote = Some(match result {
                    Ok(body) => body,
                    Err(_) => QUOTE_FALLBACK.to_string(),
                });
                (state, None)
            }
        }
    }
}

/// Clamp `value` to `[LOWER_LIMIT, UPPER_LIMIT]`, flagging when a bound was
/// crossed. The flag is never cleared here — only `AlertDismissed` does that.
fn check_limits(state: &mut CounterState) {
    if state.value > UPPER_LIMIT {
        state.value = UPPER_LIMIT;
        state.limit_reached = true;
    } else if state.value < LOWER_LIMIT {
        state.value = LOWER_LIMIT;
        state.limit_reached = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: CounterState, intent: CounterIntent) -> CounterState {
        CounterReducer::reduce(state, intent).0
    }

    #[test]
    fn increment_steps_value_up() {
        let state = reduce(CounterState::default(), CounterIntent::Increment);
        assert_eq!(state.value, 1);
        assert!(!state.limit_reached);
    }

    #[test]
    fn increment_at_upper_bound_clamps_and_flags() {
        let state = CounterState {
            value: UPPER_LIMIT,
            ..CounterState::default()
        };
        let state = reduce(state, CounterIntent::Increment);
        assert_eq!(state.value, UPPER_LIMIT);
        assert!(state.limit_reached);
    }

    #[test]
    fn decrement_at_lower_bound_clamps_and_flags() {
        let state = reduce(CounterState::default(), CounterIntent::Decrement);
        assert_eq!(state.value, LOWER_LIMIT);
        assert!(state.limit_reached);
    }

    #[test]
    fn in_range_step_leaves_flag_untouched() {
        let state = CounterState {
            value: 5,
            limit_reached: true,
            ..CounterState::default()
        };
        let state = reduce(state, CounterIntent::Increment);
        assert_eq!(state.value, 6);
        assert!(state.limit_reached, "only AlertDismissed clears the flag");
    }

    #[test]
    fn quote_requested_snapshots_current_value() {
        let state = CounterState {
            value: 7,
            ..CounterState::default()
        };
        let (after, effect) = CounterReducer::reduce(state.clone(), CounterIntent::QuoteRequested);
        assert_eq!(after, state, "requesting a quote changes no state");
        assert_eq!(effect, Some(CounterEffect::FetchQuote { number: 7 }));
    }

    #[test]
    fn non_fetch_intents_emit_no_effect() {
        for intent in [
            CounterIntent::InputChanged("3".into()),
            CounterIntent::Increment,
            CounterIntent::Decrement,
            CounterIntent::AlertDismissed,
            CounterIntent::QuoteFetched(Ok("body".into())),
        ] {
            let (_, effect) = CounterReducer::reduce(CounterState::default(), intent);
            assert_eq!(effect, None);
        }
    }
}
