//! Request lifecycle state shared by every screen.
//!
//! A screen owns one [`ScreenState`]: the fetched data, the
//! `Idle → Loading → Success | Error` phase, an action banner for failed
//! mutations, and the set of rows with a mutation in flight.

use shared_types::{ListResponse, Pagination};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Identifies one fetch. Only the most recently issued ticket may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState<T> {
    phase: Phase,
    data: T,
    error: Option<String>,
    action_error: Option<String>,
    busy: BTreeSet<String>,
    issued: u64,
}

impl<T: Default> Default for ScreenState<T> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            data: T::default(),
            error: None,
            action_error: None,
            busy: BTreeSet::new(),
            issued: 0,
        }
    }
}

impl<T: Default> ScreenState<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> ScreenState<T> {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    /// Message from the last failed fetch.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Message from the last failed mutation.
    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    /// Enter `Loading` and hand out the ticket the completion must present.
    /// Previously loaded data stays visible until the new result lands.
    pub fn begin_fetch(&mut self) -> Ticket {
        self.issued += 1;
        self.phase = Phase::Loading;
        self.error = None;
        Ticket(self.issued)
    }

    /// Apply a fetch result. Returns `false`, leaving state untouched, when
    /// a newer fetch has been issued since `ticket`.
    pub fn finish_fetch(&mut self, ticket: Ticket, result: Result<T, String>) -> bool {
        if ticket.0 != self.issued {
            tracing::debug!(ticket = ticket.0, latest = self.issued, "dropping superseded response");
            return false;
        }
        match result {
            Ok(data) => {
                self.data = data;
                self.phase = Phase::Success;
            }
            Err(message) => {
                self.error = Some(message);
                self.phase = Phase::Error;
            }
        }
        true
    }

    /// Mark `id` busy. Returns `false` if a mutation on it is already running.
    pub fn begin_action(&mut self, id: &str) -> bool {
        if self.busy.contains(id) {
            return false;
        }
        self.action_error = None;
        self.busy.insert(id.to_string());
        true
    }

    /// Clear the busy mark for `id`, recording the failure message if any.
    /// The caller refetches afterwards whatever the outcome.
    pub fn finish_action(&mut self, id: &str, outcome: Result<(), String>) {
        self.busy.remove(id);
        if let Err(message) = outcome {
            self.action_error = Some(message);
        }
    }

    pub fn is_busy(&self, id: &str) -> bool {
        self.busy.contains(id)
    }

    /// Every id with a mutation in flight, in sorted order.
    pub fn busy_keys(&self) -> Vec<String> {
        self.busy.iter().cloned().collect()
    }

    pub fn any_busy(&self) -> bool {
        !self.busy.is_empty()
    }

    pub fn set_action_error(&mut self, message: impl Into<String>) {
        self.action_error = Some(message.into());
    }

    pub fn dismiss_action_error(&mut self) {
        self.action_error = None;
    }
}

/// A paginated list screen.
pub type ListState<T> = ScreenState<ListResponse<T>>;

/// A single-record screen. `None` until the first successful fetch.
pub type DetailState<T> = ScreenState<Option<T>>;

impl<T> ScreenState<ListResponse<T>> {
    pub fn items(&self) -> &[T] {
        &self.data.items
    }

    pub fn pagination(&self) -> Pagination {
        self.data.pagination
    }

    pub fn current_page(&self) -> u32 {
        self.data.pagination.current_page
    }

    /// The page to fetch for a navigation request; `None` means ignore it.
    pub fn request_page(&self, new_page: u32) -> Option<u32> {
        self.data.pagination.target(new_page)
    }
}

impl<T> ScreenState<Option<T>> {
    pub fn record(&self) -> Option<&T> {
        self.data.as_ref()
    }
}
