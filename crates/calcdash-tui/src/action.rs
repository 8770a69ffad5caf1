//! All possible UI actions. Actions are the sole mechanism for state mutation.

use std::sync::Arc;

use calcdash_api::{FibonacciReply, GreetReply, Overview, StatsReply};

use crate::screen::ScreenId;

/// Every state transition in the TUI is expressed as an Action.
///
/// Request completions carry the sequence token handed out by the owning
/// panel's [`Tracker`](crate::tracker::Tracker) when the request started;
/// the tracker uses it to discard stale completions.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Navigation ────────────────────────────────────────────────
    SwitchScreen(ScreenId),
    ToggleHelp,

    // ── Overview batch ────────────────────────────────────────────
    /// The whole batch succeeded.
    OverviewLoaded(Arc<Overview>),
    /// Any single endpoint failed; the message names the URL and status.
    OverviewFailed(String),

    // ── Interactive request completions ───────────────────────────
    GreetSettled {
        seq: u64,
        outcome: Result<GreetReply, String>,
    },
    FibonacciSettled {
        seq: u64,
        outcome: Result<FibonacciReply, String>,
    },
    StatsSettled {
        seq: u64,
        outcome: Result<StatsReply, String>,
    },
}
