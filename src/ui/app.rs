use crate::quote::QuoteFetcher;
use crate::ui::counter::{CounterEffect, CounterIntent, CounterReducer, CounterState};
use crate::ui::mvi::Reducer;

/// Top-level application state: the counter record plus view-only concerns
/// (quit flag) and the effect executor.
///
/// The counter state is owned here and threaded through the reducer by
/// value on every dispatch — there is no ambient global state.
pub struct App {
    should_quit: bool,
    counter: CounterState,
    quotes: QuoteFetcher,
}

impl App {
    pub fn new(quotes: QuoteFetcher) -> Self {
        Self {
            should_quit: false,
            counter: CounterState::default(),
            quotes,
        }
    }

    pub fn counter(&self) -> &CounterState {
        &self.counter
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the reducer and execute any effect it emits. All dispatches
    /// happen on the main loop, so reductions never interleave.
    pub fn dispatch(&mut self, intent: CounterIntent) {
        let (state, effect) =
            CounterReducer::reduce(std::mem::take(&mut self.counter), intent);
        self.counter = state;
        if let Some(effect) = effect {
            self.perform(effect);
        }
    }

    fn perform(&self, effect: CounterEffect) {
        match effect {
            CounterEffect::FetchQuote { number } => self.quotes.request(number),
        }
    }
}
