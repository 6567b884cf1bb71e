//! HTTP plumbing shared by the API services.
//!
//! Every request goes through [`ClientInner`]: public endpoints are plain
//! GETs, private endpoints get a `recvWindow`/`timestamp` pair appended and
//! the whole query string signed with HMAC-SHA256. Responses are decoded
//! into typed models here; non-2xx bodies are converted into the error
//! taxonomy in one place.

use chrono::Utc;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::config::{ClientConfig, Credentials};
use super::sign::signature;
use crate::{Error, Result};

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) credentials: Credentials,
    pub(crate) config: ClientConfig,
}

impl ClientInner {
    fn base_url(&self) -> &'static str {
        self.config.environment.api_base_url()
    }

    fn encode_params(params: &[(&str, String)]) -> String {
        params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// GET a public (unsigned) endpoint.
    pub(crate) async fn get_public<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let mut url = format!("{}{}", self.base_url(), path);
        if !params.is_empty() {
            url.push('?');
            url.push_str(&Self::encode_params(params));
        }

        debug!(%url, "GET (public)");
        let response = self.http.get(&url).send().await?;
        self.handle_response(response).await
    }

    /// GET a signed endpoint.
    pub(crate) async fn get_signed<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Vec<(&str, String)>,
    ) -> Result<T> {
        self.send_signed(Method::GET, path, params).await
    }

    /// POST to a signed endpoint.
    pub(crate) async fn post_signed<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Vec<(&str, String)>,
    ) -> Result<T> {
        self.send_signed(Method::POST, path, params).await
    }

    /// DELETE against a signed endpoint.
    pub(crate) async fn delete_signed<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Vec<(&str, String)>,
    ) -> Result<T> {
        self.send_signed(Method::DELETE, path, params).await
    }

    async fn send_signed<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        mut params: Vec<(&str, String)>,
    ) -> Result<T> {
        params.push(("recvWindow", self.config.recv_window_ms.to_string()));
        params.push(("timestamp", Utc::now().timestamp_millis().to_string()));

        let query = Self::encode_params(&params);
        let sig = signature(self.credentials.secret_bytes(), &query);
        let url = format!("{}{}?{}&signature={}", self.base_url(), path, query, sig);

        debug!(%path, %method, "signed request");
        let response = self
            .http
            .request(method, &url)
            .header("X-MBX-APIKEY", &self.credentials.api_key)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Decode a response, converting error bodies into typed errors.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let text = response.text().await?;
            return Ok(serde_json::from_str(&text)?);
        }

        let status_code = status.as_u16();
        let text = response.text().await.unwrap_or_default();

        match serde_json::from_str::<Value>(&text) {
            Ok(body) => Err(Error::from_api_response(status_code, body)),
            Err(_) => Err(Error::Api {
                status: status_code,
                code: None,
                message: text,
            }),
        }
    }
}
