//! HTTP client for the external prediction service

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use super::{PredictionBackend, PredictionError, PredictionRequest, PredictionResponse};

/// reqwest-backed prediction client. One POST per prediction, no retry.
#[derive(Clone)]
pub struct HttpPredictionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpPredictionClient {
    /// Build a client for `endpoint` with a per-request timeout.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, PredictionError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
        })
    }
}

#[async_trait]
impl PredictionBackend for HttpPredictionClient {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, PredictionError> {
        debug!(
            endpoint = %self.endpoint,
            blades = request.blades,
            diameter = request.diameter,
            pitch = request.pitch,
            advance_ratio = request.advance_ratio,
            "Requesting prediction"
        );

        let resp = self.http.post(&self.endpoint).json(request).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PredictionError::Status(status));
        }

        resp.json::<PredictionResponse>()
            .await
            .map_err(PredictionError::Decode)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
