// Endpoint methods for the demo calculation service, one per route.

use tracing::debug;

use crate::client::CalcClient;
use crate::error::Error;
use crate::types::{FibonacciReply, FibonacciWire, GreetReply, Overview, SortResult, StatsReply};

impl CalcClient {
    /// Service banner text.
    ///
    /// `GET /`
    pub async fn home(&self) -> Result<String, Error> {
        self.get_text(self.endpoint_url(&[])).await
    }

    /// Hello text.
    ///
    /// `GET /hello`
    pub async fn hello(&self) -> Result<String, Error> {
        self.get_text(self.endpoint_url(&["hello"])).await
    }

    /// Demo sum text.
    ///
    /// `GET /sum`
    pub async fn sum(&self) -> Result<String, Error> {
        self.get_text(self.endpoint_url(&["sum"])).await
    }

    /// Bubble-sort demo: the service's fixed input sequence and its
    /// sorted counterpart.
    ///
    /// `GET /bubblesort`
    pub async fn bubblesort(&self) -> Result<SortResult, Error> {
        self.get_json(self.endpoint_url(&["bubblesort"])).await
    }

    /// Fibonacci demo for the service's fixed sample index.
    ///
    /// `GET /fibonacci`
    pub async fn fibonacci_sample(&self) -> Result<FibonacciReply, Error> {
        let url = self.endpoint_url(&["fibonacci"]);
        let wire: FibonacciWire = self.get_json(url.clone()).await?;
        FibonacciReply::from_wire(wire).map_err(|message| Error::Deserialization {
            message,
            body: url.to_string(),
        })
    }

    /// Greet `name`. The name travels as a path segment and is
    /// percent-encoded by the URL builder.
    ///
    /// `GET /greet/{name}`
    pub async fn greet(&self, name: &str) -> Result<GreetReply, Error> {
        self.get_json(self.endpoint_url(&["greet", name])).await
    }

    /// Fibonacci for a caller-chosen index.
    ///
    /// `GET /fibonacci-param?n={n}`
    ///
    /// The service may reject an in-range-but-unsupported index on HTTP 200;
    /// that comes back as [`FibonacciReply::Rejected`].
    pub async fn fibonacci(&self, n: u32) -> Result<FibonacciReply, Error> {
        let mut url = self.endpoint_url(&["fibonacci-param"]);
        url.query_pairs_mut().append_pair("n", &n.to_string());
        let wire: FibonacciWire = self.get_json(url.clone()).await?;
        FibonacciReply::from_wire(wire).map_err(|message| Error::Deserialization {
            message,
            body: url.to_string(),
        })
    }

    /// Descriptive statistics over `values`, submitted as a JSON array.
    ///
    /// `POST /calculate-stats`
    pub async fn calculate_stats(&self, values: &[f64]) -> Result<StatsReply, Error> {
        let url = self.endpoint_url(&["calculate-stats"]);
        self.post_json(url, &values).await
    }

    /// Fetch the five fixed read-only endpoints as one concurrent batch.
    ///
    /// Fan-out/fan-in: all five requests are issued at once and the first
    /// failure aborts the batch -- the remaining futures are dropped and no
    /// partial result is returned. The surfaced [`Error::Api`] names the
    /// failing URL and status.
    pub async fn overview(&self) -> Result<Overview, Error> {
        debug!("fetching overview batch");

        let (home, hello, sum, bubblesort, fibonacci) = tokio::try_join!(
            self.home(),
            self.hello(),
            self.sum(),
            self.bubblesort(),
            self.fibonacci_sample(),
        )?;

        Ok(Overview {
            home,
            hello,
            sum,
            bubblesort,
            fibonacci,
        })
    }
}
