// Response types for the demo calculation service.
//
// Discrimination between success and business-level failure happens HERE,
// once, at deserialization -- callers branch on enum variants instead of
// probing for optional fields.

use serde::{Deserialize, Serialize};

// ── Bubble sort ─────────────────────────────────────────────────────

/// Backend-sorted snapshot from `GET /bubblesort`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SortResult {
    pub original: Vec<i64>,
    pub sorted: Vec<i64>,
}

// ── Fibonacci ───────────────────────────────────────────────────────

/// Raw wire shape of the fibonacci endpoints: `{n, result, error}`.
///
/// Exactly one of `result` / `error` is meaningful per response; the
/// ambiguity is resolved into [`FibonacciReply`] immediately after decode.
#[derive(Debug, Deserialize)]
pub(crate) struct FibonacciWire {
    pub n: i64,
    pub result: Option<i64>,
    pub error: Option<String>,
}

/// Decoded reply from `GET /fibonacci` and `GET /fibonacci-param`.
///
/// The service may reject a request at the application level even on
/// HTTP 200 (e.g. an index outside its supported range); that surfaces
/// as [`FibonacciReply::Rejected`], not as a request error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FibonacciReply {
    Computed { n: i64, value: i64 },
    Rejected { n: i64, reason: String },
}

impl FibonacciReply {
    /// Resolve the wire shape into a tagged reply.
    ///
    /// `error` wins when both fields are present; a body carrying neither
    /// is malformed and rejected with a decode message.
    pub(crate) fn from_wire(wire: FibonacciWire) -> Result<Self, String> {
        match (wire.result, wire.error) {
            (_, Some(reason)) => Ok(Self::Rejected { n: wire.n, reason }),
            (Some(value), None) => Ok(Self::Computed { n: wire.n, value }),
            (None, None) => Err("fibonacci response carried neither result nor error".into()),
        }
    }
}

// ── Greeting ────────────────────────────────────────────────────────

/// Decoded reply from `GET /greet/{name}`.
///
/// The wire discriminates by field presence (`{message}` vs `{error}`);
/// serde's untagged matching turns that into a real discriminant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum GreetReply {
    Greeting {
        message: String,
    },
    Refused {
        #[serde(rename = "error")]
        reason: String,
    },
}

// ── Statistics ──────────────────────────────────────────────────────

/// Descriptive statistics computed by `POST /calculate-stats`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StatsSummary {
    pub count: u64,
    pub sum: f64,
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

/// Decoded reply from `POST /calculate-stats`.
///
/// Discriminated by the presence of `average` (summary) vs `error`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum StatsReply {
    Summary(StatsSummary),
    Refused {
        #[serde(rename = "error")]
        reason: String,
    },
}

// ── Overview ────────────────────────────────────────────────────────

/// Aggregate of the five fixed read-only endpoints, fetched as one batch.
///
/// Produced only when all five requests succeed -- a single failure aborts
/// the whole batch (see [`crate::CalcClient::overview`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub home: String,
    pub hello: String,
    pub sum: String,
    pub bubblesort: SortResult,
    pub fibonacci: FibonacciReply,
}
