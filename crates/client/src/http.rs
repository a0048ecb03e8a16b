//! Shared HTTP plumbing for both protocol generations.

use reqwest::{Client, Method, RequestBuilder, Response, Url, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::trace;

use bpms_auth_core::{Error, Result};
use bpms_auth_observability::Confidential;

/// Header carrying the access token on every request.
pub const ACCESS_TOKEN_HEADER: &str = "X-Access-Token";

/// Base URL, credential and connection pool shared by the protocol clients.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    token: Confidential<String>,
}

impl HttpTransport {
    pub fn new(base_url: &str, token: Confidential<String>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::configuration(format!("invalid bpms url '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::configuration(format!(
                "bpms url '{base_url}' cannot be used as a base url"
            )));
        }

        let client = Client::builder()
            .build()
            .map_err(|e| Error::configuration(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL extended with the given path segments (each one percent-encoded).
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::configuration(format!("bpms url '{}' cannot be a base", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Request with the JSON content type and the access token attached.
    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(ACCESS_TOKEN_HEADER, self.token.expose().as_str())
    }

    /// Attach `body` as JSON; encoding failures are serialization errors.
    pub fn with_json<T: Serialize + ?Sized>(
        builder: RequestBuilder,
        body: &T,
    ) -> Result<RequestBuilder> {
        let bytes = serde_json::to_vec(body).map_err(|e| Error::serialization(e.to_string()))?;
        Ok(builder.body(bytes))
    }

    /// Send and fail on transport errors and non-2xx statuses.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        trace!(status = status.as_u16(), url = %response.url(), "bpms response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    /// Decode a successful response body.
    pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        serde_json::from_str(&body)
            .map_err(|e| Error::serialization(format!("couldn't deserialize response: {e}")))
    }
}
