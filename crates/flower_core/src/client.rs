//! Blocking HTTP client for the prediction endpoint.

use crate::{ApiConfig, Prediction};
use reqwest::StatusCode;
use reqwest::blocking::{Client, multipart};
use thiserror::Error;

/// Why a submission failed. Shown to the user only as a generic message; the
/// concrete variant is logged.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("cannot read selected image: {0}")]
    Io(#[from] std::io::Error),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server answered {0}")]
    Status(StatusCode),
    #[error("response body is not a prediction: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

/// Client for `POST {base_url}/predict`.
///
/// Built without a timeout: a hung request stays in flight until the
/// transport gives up, and the UI guard prevents a second submission.
pub struct PredictClient {
    http: Client,
    base_url: String,
}

impl PredictClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url,
        }
    }

    /// Uploads one image as the multipart field `image` and parses the JSON
    /// prediction out of a 2xx response. No retries.
    pub fn predict(
        &self,
        bytes: Vec<u8>,
        filename: String,
        mime: &str,
    ) -> Result<Prediction, PredictError> {
        let url = format!("{}/predict", self.base_url);
        tracing::debug!(url = %url, size = bytes.len(), "submitting image for classification");

        let part = multipart::Part::bytes(bytes)
            .file_name(filename)
            .mime_str(mime)?;
        let form = multipart::Form::new().part("image", part);

        let response = self.http.post(&url).multipart(form).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::Status(status));
        }

        let body = response.text()?;
        let prediction: Prediction = serde_json::from_str(&body)?;
        tracing::debug!(class = %prediction.class, confidence = prediction.confidence, "prediction received");
        Ok(prediction)
    }
}
