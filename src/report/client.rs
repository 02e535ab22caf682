use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::{ReportError, Reporter};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Reports over HTTP GET with a single shared client.
pub struct HttpReporter {
    client: Client,
}

impl HttpReporter {
    /// Build the reporter. Without a timeout the client's default applies.
    pub fn new(timeout: Option<Duration>) -> Result<Self, ReportError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Reporter for HttpReporter {
    async fn send(&self, url: &str) -> Result<u16, ReportError> {
        let url = Url::parse(url)?;

        // The response is dropped before returning, which releases the
        // connection; the body is never read.
        let response = self.client.get(url).send().await?;
        Ok(response.status().as_u16())
    }
}
