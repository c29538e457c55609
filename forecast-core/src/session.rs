//! Search session state machine (idle -> searching -> ready | failed).
//!
//! Every search gets a generation number. Completing a ticket that is no
//! longer the latest is a no-op, so a slow response can never overwrite the
//! result of a search started after it.

use crate::{error::LookupError, model::Dashboard, pipeline::search, provider::WeatherSource};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Searching {
        query: String,
    },
    Ready,
    Failed {
        message: String,
    },
}

/// Handle for one in-flight search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

impl SearchTicket {
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// What [`Session::complete`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer search was started; the outcome was dropped.
    Stale,
}

#[derive(Debug, Default)]
pub struct Session {
    state: SearchState,
    /// Last successful result. Survives failed searches.
    dashboard: Option<Dashboard>,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a search. Blank input is ignored and returns `None`.
    ///
    /// Starting a search supersedes any search still in flight.
    pub fn begin(&mut self, query: &str) -> Option<SearchTicket> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        self.generation += 1;
        self.state = SearchState::Searching {
            query: query.to_string(),
        };

        Some(SearchTicket {
            generation: self.generation,
            query: query.to_string(),
        })
    }

    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Dashboard, LookupError>,
    ) -> Completion {
        if ticket.generation != self.generation {
            tracing::warn!(
                query = %ticket.query,
                generation = ticket.generation,
                latest = self.generation,
                "dropping superseded search result"
            );
            return Completion::Stale;
        }

        match outcome {
            Ok(dashboard) => {
                self.dashboard = Some(dashboard);
                self.state = SearchState::Ready;
            }
            Err(err) => {
                self.state = SearchState::Failed {
                    message: err.to_string(),
                };
            }
        }

        Completion::Applied
    }

    /// `begin`, run the pipeline, `complete`. `None` when the query was blank.
    pub async fn run(&mut self, source: &dyn WeatherSource, query: &str) -> Option<Completion> {
        let ticket = self.begin(query)?;
        let outcome = search(source, ticket.query()).await;
        Some(self.complete(ticket, outcome))
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SearchState::Searching { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SearchState::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        self.dashboard.as_ref()
    }
}
