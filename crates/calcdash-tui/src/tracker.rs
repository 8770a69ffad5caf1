//! Per-panel request state: `{data, error, loading}` plus a sequence token.
//!
//! Each interactive panel owns one `Tracker`. A request cycle replaces the
//! whole record: `begin()` clears the previous result and enters loading,
//! `settle()` stores data XOR error and leaves it. The token returned by
//! `begin()` must travel with the spawned request; a completion carrying a
//! stale token is discarded, so a slow earlier response can never overwrite
//! the result of a newer request.

/// Status record for one in-flight-or-settled request.
#[derive(Debug)]
pub struct Tracker<T> {
    data: Option<T>,
    error: Option<String>,
    loading: bool,
    seq: u64,
}

impl<T> Default for Tracker<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            loading: false,
            seq: 0,
        }
    }
}

impl<T> Tracker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request cycle: wholesale reset to `{None, None, loading}`.
    /// Returns the sequence token the completion must carry.
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.data = None;
        self.error = None;
        self.loading = true;
        self.seq
    }

    /// Complete a request cycle. Returns `false` (and changes nothing) when
    /// `seq` is stale, i.e. a newer `begin()` has happened since.
    pub fn settle(&mut self, seq: u64, outcome: Result<T, String>) -> bool {
        if seq != self.seq {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(data) => self.data = Some(data),
            Err(error) => self.error = Some(error),
        }
        true
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
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Tracker;

    #[test]
    fn starts_idle_and_empty() {
        let t: Tracker<String> = Tracker::new();
        assert!(t.data().is_none());
        assert!(t.error().is_none());
        assert!(!t.is_loading());
    }

    #[test]
    fn begin_clears_previous_result_wholesale() {
        let mut t = Tracker::new();
        let seq = t.begin();
        assert!(t.settle(seq, Ok("first".to_owned())));
        assert_eq!(t.data(), Some(&"first".to_owned()));

        t.begin();
        assert!(t.data().is_none());
        assert!(t.error().is_none());
        assert!(t.is_loading());
    }

    #[test]
    fn failure_stores_error_and_clears_loading() {
        let mut t: Tracker<String> = Tracker::new();
        let seq = t.begin();
        assert!(t.settle(seq, Err("connection refused".into())));
        assert!(t.data().is_none());
        assert_eq!(t.error(), Some("connection refused"));
        assert!(!t.is_loading());
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut t: Tracker<String> = Tracker::new();
        let first = t.begin();
        let second = t.begin();

        // The first request resolves late — after a newer cycle started.
        assert!(!t.settle(first, Ok("stale".to_owned())));
        assert!(t.data().is_none());
        assert!(t.is_loading());

        assert!(t.settle(second, Ok("fresh".to_owned())));
        assert_eq!(t.data(), Some(&"fresh".to_owned()));
    }

    #[test]
    fn sequential_identical_cycles_are_idempotent() {
        let mut t: Tracker<i64> = Tracker::new();

        let seq = t.begin();
        assert!(t.settle(seq, Ok(55)));
        let first_state = (t.data().copied(), t.error().map(str::to_owned), t.is_loading());

        let seq = t.begin();
        assert!(t.settle(seq, Ok(55)));
        let second_state = (t.data().copied(), t.error().map(str::to_owned), t.is_loading());

        assert_eq!(first_state, second_state);
    }

    #[test]
    fn error_then_success_replaces_the_error() {
        let mut t: Tracker<i64> = Tracker::new();
        let seq = t.begin();
        assert!(t.settle(seq, Err("boom".into())));

        let seq = t.begin();
        assert!(t.settle(seq, Ok(7)));
        assert_eq!(t.data(), Some(&7));
        assert!(t.error().is_none());
    }
}
