use std::time::Duration;

use crate::redirect::ResultParameters;
use crate::types::WireStatus;
use crate::{Endpoints, StatusError, StatusSnapshot, TransportFailureKind};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The monitor's view of the backend: one status read, one reset, one
/// results submission.
#[async_trait::async_trait]
pub trait StatusApi: Send + Sync {
    async fn fetch_status(&self) -> Result<StatusSnapshot, StatusError>;
    async fn reset_progress(&self) -> Result<(), StatusError>;
    async fn submit_results(&self, params: &ResultParameters) -> Result<(), StatusError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestStatusApi {
    settings: ClientSettings,
    endpoints: Endpoints,
}

impl ReqwestStatusApi {
    pub fn new(settings: ClientSettings, endpoints: Endpoints) -> Self {
        Self {
            settings,
            endpoints,
        }
    }

    fn build_client(&self) -> Result<reqwest::Client, StatusError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| StatusError::new(TransportFailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl StatusApi for ReqwestStatusApi {
    async fn fetch_status(&self) -> Result<StatusSnapshot, StatusError> {
        let client = self.build_client()?;

        let response = client
            .get(self.endpoints.status.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatusError::new(
                TransportFailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        // Decode by hand so a non-JSON body is classified distinctly from
        // a network-level failure.
        let body = response.text().await.map_err(map_reqwest_error)?;
        let wire: WireStatus = serde_json::from_str(&body)
            .map_err(|err| StatusError::new(TransportFailureKind::InvalidBody, err.to_string()))?;
        Ok(wire.into())
    }

    async fn reset_progress(&self) -> Result<(), StatusError> {
        let client = self.build_client()?;

        let response = client
            .post(self.endpoints.reset.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatusError::new(
                TransportFailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        // The response body is irrelevant; only success matters before the
        // navigation back to the start page.
        Ok(())
    }

    async fn submit_results(&self, params: &ResultParameters) -> Result<(), StatusError> {
        let client = self.build_client()?;

        let response = client
            .post(self.endpoints.results.clone())
            .form(&params.form_fields())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatusError::new(
                TransportFailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        Ok(())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> StatusError {
    if err.is_timeout() {
        return StatusError::new(TransportFailureKind::Timeout, err.to_string());
    }
    StatusError::new(TransportFailureKind::Network, err.to_string())
}
