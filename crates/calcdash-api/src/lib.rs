// calcdash-api: Async Rust client for the numeric demo calculation service

pub mod client;
pub mod error;
pub mod input;
pub mod transport;
pub mod types;

mod endpoints;

pub use client::CalcClient;
pub use error::Error;
pub use transport::TransportConfig;
pub use types::{FibonacciReply, GreetReply, Overview, SortResult, StatsReply, StatsSummary};
