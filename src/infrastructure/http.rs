use gloo_net::http::Request;
use serde_json::Value;

use crate::application::endpoints::{ApiEnvelope, Endpoint};
use crate::config::ApiConfig;
use crate::domain::{
    errors::{FetchError, FetchResult},
    logging::LogComponent,
};
use crate::{log_debug, log_warn};

/// Something that can GET a URL and hand back its JSON body.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get_json(&self, url: &str) -> FetchResult<Value>;
}

/// Browser `fetch` through gloo-net. No timeout, no retries.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn get_json(&self, url: &str) -> FetchResult<Value> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        let ok = response.ok();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        // Error statuses often still carry a JSON `{error}` body worth showing
        match serde_json::from_str::<Value>(&body) {
            Ok(value) => Ok(value),
            Err(_) if !ok => Err(FetchError::Http(status)),
            Err(e) => Err(FetchError::Decode(e.to_string())),
        }
    }
}

/// Backend client shared by every view. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient<T = GlooTransport> {
    config: ApiConfig,
    transport: T,
}

impl ApiClient<GlooTransport> {
    pub fn browser(config: ApiConfig) -> Self {
        Self::new(config, GlooTransport)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// One GET, decoded through the `{data, error}` envelope.
    pub async fn fetch<E: Endpoint>(&self, request: &E) -> FetchResult<E::Output> {
        let url = request.url(&self.config);
        log_debug!(LogComponent::Infrastructure("ApiClient"), "GET {}", url);

        let outcome = match self.transport.get_json(&url).await {
            Ok(value) => ApiEnvelope::<E::Output>::decode(value).and_then(ApiEnvelope::into_result),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(output) => {
                log_debug!(LogComponent::Infrastructure("ApiClient"), "{} succeeded", E::PATH);
                Ok(E::prepare(output))
            }
            Err(e) => {
                log_warn!(LogComponent::Infrastructure("ApiClient"), "{} failed: {}", E::PATH, e);
                Err(e)
            }
        }
    }
}
