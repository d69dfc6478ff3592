//! HTTP Gateway Implementation
//!
//! Delivers submissions to the upstream endpoint as a JSON POST.

use platform::http_client::JsonHttpClient;

use crate::application::config::CustomerConfig;
use crate::domain::entity::{CustomerSubmission, SubmissionReceipt};
use crate::domain::gateway::CustomerGateway;
use crate::error::{CustomerError, CustomerResult};

/// Upstream gateway over HTTP
#[derive(Debug, Clone)]
pub struct HttpCustomerGateway {
    client: JsonHttpClient,
    url: String,
}

impl HttpCustomerGateway {
    pub fn new(url: impl Into<String>, client: JsonHttpClient) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Build from config; `None` when no upstream URL is configured
    pub fn from_config(config: &CustomerConfig) -> CustomerResult<Option<Self>> {
        let Some(url) = config.upstream_url.as_deref() else {
            return Ok(None);
        };
        let client = JsonHttpClient::new(config.upstream_timeout)?;
        Ok(Some(Self::new(url, client)))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CustomerGateway for HttpCustomerGateway {
    async fn submit(&self, submission: &CustomerSubmission) -> CustomerResult<SubmissionReceipt> {
        let response = self.client.post_json(&self.url, submission).await?;

        if !response.is_success() {
            return Err(CustomerError::UpstreamRejected {
                status: response.status,
            });
        }

        Ok(SubmissionReceipt {
            upstream_status: response.status,
            upstream_body: response.body,
        })
    }
}
