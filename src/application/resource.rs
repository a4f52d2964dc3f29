/// Identifies one issued request. Only the most recent ticket may settle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourcePhase {
    Idle,
    Loading,
    Success,
    Failed,
}

/// What `complete` did with a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request was issued after this one; the response was dropped
    Stale,
}

/// What a view should draw, in priority order: error, then data, then nothing.
#[derive(Debug, PartialEq)]
pub enum ResourceView<'a, T> {
    Error(&'a str),
    Ready(&'a T),
    Empty,
}

/// Request-scoped state of one remote resource.
///
/// Invariants: `data` and `error` are never both set; `loading` is true only
/// while the latest issued request is outstanding.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    data: Option<T>,
    error: Option<String>,
    loading: bool,
    latest: u64,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResourceState<T> {
    pub fn new() -> Self {
        Self { data: None, error: None, loading: false, latest: 0 }
    }

    /// Enter loading from any phase. Previous data stays visible until the
    /// response lands; the previous error is cleared.
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        self.loading = true;
        self.error = None;
        RequestTicket(self.latest)
    }

    pub fn complete(&mut self, ticket: RequestTicket, outcome: Result<T, String>) -> Completion {
        if ticket.0 != self.latest {
            return Completion::Stale;
        }

        self.loading = false;
        match outcome {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(message) => {
                self.data = None;
                self.error = Some(message);
            }
        }
        Completion::Applied
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn latest_ticket(&self) -> Option<RequestTicket> {
        (self.latest > 0).then_some(RequestTicket(self.latest))
    }

    pub fn phase(&self) -> ResourcePhase {
        if self.loading {
            ResourcePhase::Loading
        } else if self.error.is_some() {
            ResourcePhase::Failed
        } else if self.data.is_some() {
            ResourcePhase::Success
        } else {
            ResourcePhase::Idle
        }
    }

    pub fn view(&self) -> ResourceView<'_, T> {
        match (&self.error, &self.data) {
            (Some(error), _) => ResourceView::Error(error),
            (None, Some(data)) => ResourceView::Ready(data),
            (None, None) => ResourceView::Empty,
        }
    }
}

/// Submit is allowed only for non-blank input and while nothing is in flight
pub fn submit_enabled(input: &str, loading: bool) -> bool {
    !input.trim().is_empty() && !loading
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_keeps_previous_data_but_drops_error() {
        let mut state = ResourceState::new();
        let first = state.begin();
        state.complete(first, Err::<u32, _>("boom".to_string()));
        assert_eq!(state.phase(), ResourcePhase::Failed);

        state.begin();
        assert_eq!(state.error(), None);
        assert_eq!(state.phase(), ResourcePhase::Loading);
    }

    #[test]
    fn empty_state_renders_nothing() {
        let state = ResourceState::<u32>::new();
        assert_eq!(state.view(), ResourceView::Empty);
        assert_eq!(state.latest_ticket(), None);
    }
}
