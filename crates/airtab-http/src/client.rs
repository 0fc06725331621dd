//! Airtable HTTP client implementation.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, trace};
use url::Url;

use airtab_core::error::{Error, InvalidInputError, QueryError, TransportError};
use airtab_core::ApiKey;

use crate::endpoints::ErrorResponse;

/// HTTP client for Airtable REST requests.
///
/// The API key is baked into the default headers (marked sensitive) at
/// construction, so it never has to be threaded through call sites.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a new client authenticating with `api_key`.
    pub fn new(api_key: &ApiKey) -> Result<Self, Error> {
        if api_key.is_blank() {
            return Err(InvalidInputError::ApiKey {
                reason: "must be non-empty".to_string(),
            }
            .into());
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("airtab/", env!("CARGO_PKG_VERSION")))
            .default_headers(Self::auth_headers(api_key)?)
            .build()
            .map_err(transport)?;

        Ok(Self { client })
    }

    /// Make a GET request with query parameters.
    pub async fn get<Q, R>(&self, url: Url, query: &Q) -> Result<R, Error>
    where
        Q: Serialize + std::fmt::Debug + ?Sized,
        R: DeserializeOwned,
    {
        debug!(%url, "GET");
        trace!(?query, "query parameters");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(transport)?;

        self.handle_response(response).await
    }

    /// Make a request with a JSON body (POST, PATCH or PUT).
    pub async fn send<B, R>(&self, method: Method, url: Url, body: &B) -> Result<R, Error>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!(%method, %url, "JSON request");
        trace!(?body, "request body");

        let response = self
            .client
            .request(method, url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;

        self.handle_response(response).await
    }

    /// Make a DELETE request with query parameters.
    pub async fn delete<Q, R>(&self, url: Url, query: &Q) -> Result<R, Error>
    where
        Q: Serialize + std::fmt::Debug + ?Sized,
        R: DeserializeOwned,
    {
        debug!(%url, "DELETE");
        trace!(?query, "query parameters");

        let response = self
            .client
            .delete(url)
            .query(query)
            .send()
            .await
            .map_err(transport)?;

        self.handle_response(response).await
    }

    /// Create authorization headers sent with every request.
    fn auth_headers(api_key: &ApiKey) -> Result<HeaderMap, Error> {
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", api_key.as_str()))
            .map_err(|_| InvalidInputError::ApiKey {
                reason: "contains characters not allowed in a header".to_string(),
            })?;
        auth_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Handle a response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            let body = response.json::<R>().await.map_err(transport)?;
            Ok(body)
        } else {
            let error = self.parse_error_response(response).await;
            debug!(%error, "request rejected");
            Err(Error::Query(error))
        }
    }

    /// Parse an Airtable error response.
    async fn parse_error_response(&self, response: reqwest::Response) -> QueryError {
        let status = response.status().as_u16();

        match response.json::<ErrorResponse>().await {
            Ok(body) => {
                let (kind, message) = body.error.into_parts();
                QueryError::new(status, kind, message)
            }
            Err(_) => QueryError::new(status, None, None),
        }
    }
}

/// Classify a reqwest failure.
pub(crate) fn transport(err: reqwest::Error) -> Error {
    let message = err.to_string();
    let error = if err.is_timeout() {
        TransportError::Timeout { message }
    } else if err.is_connect() {
        TransportError::Connection { message }
    } else if err.is_decode() || err.is_body() {
        TransportError::Body { message }
    } else {
        TransportError::Http { message }
    };
    Error::Transport(error)
}
