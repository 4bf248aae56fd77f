use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::{
    InOutRequest, LadderError, LadderGateway, ModeSelection, NicknameReceipt, NicknameRequest,
    QueueDetails,
};

/// HTTP client for the ladder service.
#[derive(Clone)]
pub struct LadderClient {
    http: reqwest::Client,
    base_url: String,
}

// Error envelope the service uses for non-success responses.
#[derive(Deserialize)]
struct UpstreamErrorBody {
    message: String,
}

impl LadderClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn upstream_error(response: reqwest::Response) -> LadderError {
        let status = response.status().as_u16();
        let message = response
            .json::<UpstreamErrorBody>()
            .await
            .ok()
            .map(|body| body.message);
        LadderError::Upstream { status, message }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, LadderError> {
        if !response.status().is_success() {
            return Err(Self::upstream_error(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|err| LadderError::Decode(err.to_string()))
    }
}

#[async_trait]
impl LadderGateway for LadderClient {
    async fn select_nickname(&self, nickname: &str) -> Result<NicknameReceipt, LadderError> {
        let response = self
            .http
            .post(self.url("/api/nickname/select"))
            .json(&NicknameRequest {
                nickname: nickname.to_string(),
            })
            .send()
            .await
            .map_err(|err| LadderError::Transport(err.to_string()))?;

        Self::decode(response).await
    }

    async fn queue_details(&self) -> Result<QueueDetails, LadderError> {
        let response = self
            .http
            .get(self.url("/api/ladder/queue/details"))
            .send()
            .await
            .map_err(|err| LadderError::Transport(err.to_string()))?;

        Self::decode(response).await
    }

    async fn change_queue(&self, open: bool) -> Result<QueueDetails, LadderError> {
        let response = self
            .http
            .get(self.url("/api/ladder/queue/change"))
            .query(&[("open", open)])
            .send()
            .await
            .map_err(|err| LadderError::Transport(err.to_string()))?;

        Self::decode(response).await
    }

    async fn queue_in_out(
        &self,
        joining: bool,
        modes: ModeSelection,
    ) -> Result<QueueDetails, LadderError> {
        let response = self
            .http
            .post(self.url("/api/ladder/queue/in_out"))
            .json(&InOutRequest { joining, modes })
            .send()
            .await
            .map_err(|err| LadderError::Transport(err.to_string()))?;

        Self::decode(response).await
    }
}
