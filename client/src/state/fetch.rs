//! Generation-ticketed load state for page fetches.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages keep one `RwSignal<FetchState<T>>` per data slice. Each fetch takes
//! a [`Ticket`] from [`FetchState::begin`]; when the response lands, it is
//! applied only if no newer fetch started and the page did not cancel in
//! between. Browsers cannot abort a `fetch` through `gloo-net` futures, so
//! stale responses are dropped on arrival instead.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

/// Identifies one fetch attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Progress of the current fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Load<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    generation: u64,
    pub load: Load<T>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            load: Load::Idle,
        }
    }
}

impl<T> FetchState<T> {
    /// Start a fetch, invalidating any in flight.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.load = Load::Loading;
        Ticket(self.generation)
    }

    /// Apply a finished fetch. Returns `false` (and changes nothing) if
    /// `ticket` is stale.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<T, String>) -> bool {
        if !self.is_current(ticket) {
            log::debug!("discarding stale response for generation {}", ticket.0);
            return false;
        }
        self.load = match result {
            Ok(value) => Load::Ready(value),
            Err(message) => Load::Failed(message),
        };
        true
    }

    /// Fail immediately without fetching, discarding anything in flight.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.generation += 1;
        self.load = Load::Failed(message.into());
    }

    /// Invalidate any in-flight fetch, keeping the current display.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, Load::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match &self.load {
            Load::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.load {
            Load::Failed(message) => Some(message),
            _ => None,
        }
    }
}
