//! Number-trivia lookups against numbersapi.com.
//!
//! `QuoteClient` performs the HTTP call; `QuoteFetcher` turns a
//! `FetchQuote` effect into a fire-and-forget task whose completion is
//! delivered back to the UI event stream.

mod client;
mod fetcher;
#[cfg(test)]
pub(crate) mod mock_server;

pub use client::{QuoteClient, QuoteError};
pub use fetcher::QuoteFetcher;
