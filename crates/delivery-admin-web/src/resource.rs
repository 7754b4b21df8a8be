//! Load state of one screen's collection
//!
//! Every request carries a ticket. Only the ticket of the latest request is
//! honoured, so a slow response can never overwrite a newer one.

use delivery_admin_core::Error;

/// Tri-state of a collection fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// First request in flight, nothing to show yet
    Loading,
    /// Last request succeeded
    Ready,
    /// Last request failed; holds the notification text
    Failed(String),
}

/// Proof that a load was started; hand it back with the response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Records of one screen plus everything needed to apply responses safely
#[derive(Debug, Clone)]
pub struct CollectionState<T> {
    records: Vec<T>,
    state: LoadState,
    generation: u64,
    in_flight: Option<u64>,
    loaded_once: bool,
    mutating: bool,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            state: LoadState::Idle,
            generation: 0,
            in_flight: None,
            loaded_once: false,
            mutating: false,
        }
    }
}

impl<T> CollectionState<T> {
    /// Current load state
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    /// Last successfully loaded records
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// At least one load succeeded, so there is a table to show
    pub const fn has_data(&self) -> bool {
        self.loaded_once
    }

    /// A reload is running behind already visible data
    pub const fn is_refreshing(&self) -> bool {
        self.loaded_once && self.in_flight.is_some()
    }

    /// A mutating request is in flight
    pub const fn is_mutating(&self) -> bool {
        self.mutating
    }

    /// Start a load.
    ///
    /// Returns `None` while a mutation is in flight; the mutation reloads the
    /// collection itself once it succeeds.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.mutating {
            return None;
        }

        self.generation = self.generation.wrapping_add(1);
        self.in_flight = Some(self.generation);
        if !self.loaded_once {
            self.state = LoadState::Loading;
        }
        Some(LoadTicket(self.generation))
    }

    /// Apply a response. Returns `false` when the ticket is stale and the
    /// response was dropped.
    ///
    /// A failure keeps whatever records were loaded before.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<T>, Error>) -> bool {
        if self.in_flight != Some(ticket.0) {
            return false;
        }
        self.in_flight = None;

        match result {
            Ok(records) => {
                self.records = records;
                self.loaded_once = true;
                self.state = LoadState::Ready;
            }
            Err(error) => {
                self.state = LoadState::Failed(error.user_message());
            }
        }
        true
    }

    /// Start a mutation. Returns `false` if one is already running.
    pub fn begin_mutation(&mut self) -> bool {
        if self.mutating {
            return false;
        }
        self.mutating = true;
        true
    }

    /// Mark the running mutation as resolved
    pub fn finish_mutation(&mut self) {
        self.mutating = false;
    }
}

/// Latest detail fetch of a screen.
///
/// Opening a record, closing the dialog or opening another record makes
/// every earlier response stale, so a slow response can never reopen or
/// replace a dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailRequests {
    generation: u64,
    pending: Option<u64>,
}

impl DetailRequests {
    /// Start a fetch, superseding any pending one
    pub fn begin(&mut self) -> LoadTicket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(self.generation);
        LoadTicket(self.generation)
    }

    /// Forget the pending fetch, e.g. because its dialog was closed
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Claim a response. Returns `false` when it is stale and must be dropped.
    pub fn finish(&mut self, ticket: LoadTicket) -> bool {
        if self.pending != Some(ticket.0) {
            return false;
        }
        self.pending = None;
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn offline() -> Error {
        Error::transport("/orders", "connection refused")
    }

    #[test]
    fn test_first_load_goes_idle_loading_ready() {
        let mut state = CollectionState::<u32>::default();
        assert_eq!(state.state(), &LoadState::Idle);

        let ticket = state.begin_load().unwrap();
        assert_eq!(state.state(), &LoadState::Loading);
        assert!(!state.is_refreshing());

        assert!(state.finish_load(ticket, Ok(vec![1, 2, 3])));
        assert_eq!(state.state(), &LoadState::Ready);
        assert_eq!(state.records(), &[1, 2, 3]);
    }

    #[test]
    fn test_first_load_failure_is_distinct_from_empty() {
        let mut state = CollectionState::<u32>::default();
        let ticket = state.begin_load().unwrap();

        assert!(state.finish_load(ticket, Err(offline())));
        assert!(matches!(state.state(), LoadState::Failed(_)));
        assert!(state.records().is_empty());
        assert!(!state.has_data());
    }

    #[test]
    fn test_failed_refresh_keeps_previous_records() {
        let mut state = CollectionState::<u32>::default();
        let ticket = state.begin_load().unwrap();
        state.finish_load(ticket, Ok(vec![7]));

        let ticket = state.begin_load().unwrap();
        assert!(state.is_refreshing());
        assert_eq!(state.state(), &LoadState::Ready);

        state.finish_load(ticket, Err(offline()));
        assert_eq!(state.records(), &[7]);
        assert!(state.has_data());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = CollectionState::<u32>::default();
        let old = state.begin_load().unwrap();
        let new = state.begin_load().unwrap();

        assert!(state.finish_load(new, Ok(vec![2])));
        assert!(!state.finish_load(old, Ok(vec![1])));
        assert_eq!(state.records(), &[2]);
    }

    #[test]
    fn test_refresh_is_blocked_while_mutating() {
        let mut state = CollectionState::<u32>::default();
        assert!(state.begin_mutation());
        assert!(!state.begin_mutation());
        assert!(state.begin_load().is_none());

        state.finish_mutation();
        assert!(state.begin_load().is_some());
    }

    #[test]
    fn test_only_latest_detail_response_is_applied() {
        let mut requests = DetailRequests::default();
        let first = requests.begin();
        let second = requests.begin();

        assert!(!requests.finish(first));
        assert!(requests.finish(second));
        assert!(!requests.finish(second));
    }

    #[test]
    fn test_closed_dialog_drops_late_detail() {
        let mut requests = DetailRequests::default();
        let ticket = requests.begin();
        requests.cancel();

        assert!(!requests.finish(ticket));

        let retry = requests.begin();
        assert!(requests.finish(retry));
    }
}
