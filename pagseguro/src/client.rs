//! HTTP client for the PagSeguro Orders API.
//!
//! [`PagSeguroClient`] sends `POST /orders` requests and translates the
//! gateway's answer:
//!
//! - `201 Created` is success; the body is ignored
//! - any other status is decoded into [`ApiErrors`](crate::ApiErrors) when the
//!   body matches a known error envelope, or into [`Error::NonStandard`]
//!   otherwise
//! - transport failures are returned unchanged as [`Error::Http`]
//!
//! Each call issues exactly one request. Dropping the returned future cancels
//! it; [`PagSeguroClient::with_timeout`] bounds its duration.

use std::fmt;
use std::fmt::Display;
use std::time::Duration;

use http::StatusCode;
use http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use pagseguro_proto::Order;
use reqwest::Client;
use url::Url;

#[cfg(feature = "telemetry")]
use tracing::{Span, instrument};

use crate::config::ClientConfig;
use crate::constants::ORDERS_PATH;
use crate::error::Error;

/// A client for the PagSeguro Orders API.
///
/// Holds only immutable configuration and a shared connection pool, so it
/// is cheap to clone and safe to use from concurrent tasks.
///
/// # Example
///
/// ```no_run
/// use pagseguro::PagSeguroClient;
/// use pagseguro::proto::Order;
///
/// # async fn run() -> Result<(), pagseguro::Error> {
/// let client = PagSeguroClient::try_new("https://sandbox.api.pagseguro.com", "my-token")?;
/// client.create_order(&Order::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PagSeguroClient {
    /// Base URL of the API, always ending with `/`
    base_url: Url,
    /// Full URL to `POST /orders` requests
    orders_url: Url,
    /// Value of the `Authorization` header
    authorization: HeaderValue,
    /// Shared Reqwest HTTP client
    client: Client,
    /// Optional request timeout
    timeout: Option<Duration>,
}

impl PagSeguroClient {
    /// Constructs a client from a base URL and an API token.
    ///
    /// Trailing slashes of `base_url` are normalized and `./orders` is
    /// resolved against it. The token is sent verbatim as the
    /// `Authorization` header. No network I/O is performed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UrlParse`] if the URL is invalid, or
    /// [`Error::InvalidToken`] if the token is not a legal header value.
    pub fn try_new(base_url: &str, token: &str) -> Result<Self, Error> {
        let mut normalized = base_url.trim_end_matches('/').to_owned();
        normalized.push('/');
        let base_url = Url::parse(&normalized).map_err(|e| Error::UrlParse {
            context: "Failed to parse base url",
            source: e,
        })?;
        let orders_url = base_url.join(ORDERS_PATH).map_err(|e| Error::UrlParse {
            context: "Failed to construct ./orders URL",
            source: e,
        })?;

        let mut authorization = HeaderValue::from_str(token).map_err(Error::InvalidToken)?;
        authorization.set_sensitive(true);

        Ok(Self {
            base_url,
            orders_url,
            authorization,
            client: Client::new(),
            timeout: None,
        })
    }

    /// Constructs a client from a [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Same as [`PagSeguroClient::try_new`].
    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        let client = Self::try_new(&config.base_url, &config.token)?;
        Ok(match config.timeout() {
            Some(timeout) => client.with_timeout(timeout),
            None => client,
        })
    }

    /// Sets a timeout for all future requests.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Uses a pre-configured reqwest client (proxies, TLS roots, pooling).
    #[must_use]
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Returns the base URL used by this client.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the computed `./orders` URL relative to [`PagSeguroClient::base_url`].
    #[must_use]
    pub const fn orders_url(&self) -> &Url {
        &self.orders_url
    }

    /// Returns the configured timeout, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Creates an order, with its embedded charges, via `POST /orders`.
    ///
    /// The order is serialized verbatim; the gateway performs all validation.
    ///
    /// # Errors
    ///
    /// - [`Error::Api`] when the gateway reports structured validation errors
    /// - [`Error::NonStandard`] for any other non-`201` response
    /// - [`Error::Http`] on transport failure or timeout
    /// - [`Error::Serialize`] if the order cannot be encoded
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "pagseguro.client.create_order",
            skip_all,
            fields(
                reference_id = %order.reference_id,
                timeout = ?self.timeout,
                otel.status_code = tracing::field::Empty,
                error.message = tracing::field::Empty,
            )
        )
    )]
    pub async fn create_order(&self, order: &Order) -> Result<(), Error> {
        let result = self.post_order(order).await;
        record_result_on_span(&result);
        result
    }

    async fn post_order(&self, order: &Order) -> Result<(), Error> {
        let body = serde_json::to_vec(order)?;

        let mut req = self
            .client
            .post(self.orders_url.clone())
            .header(AUTHORIZATION, self.authorization.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body);
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }
        let http_response = req.send().await?;

        let status = http_response.status();
        #[cfg(feature = "telemetry")]
        tracing::debug!(status = status.as_u16(), "pagseguro responded");

        if status == StatusCode::CREATED {
            return Ok(());
        }
        let body = http_response.bytes().await?;
        Err(Error::from_response(status, &body))
    }
}

impl fmt::Debug for PagSeguroClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagSeguroClient")
            .field("base_url", &self.base_url.as_str())
            .field("orders_url", &self.orders_url.as_str())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Records the outcome of a request on the current span.
#[cfg(feature = "telemetry")]
fn record_result_on_span<R, E: Display>(result: &Result<R, E>) {
    let span = Span::current();
    match result {
        Ok(_) => {
            span.record("otel.status_code", "OK");
        }
        Err(err) => {
            span.record("otel.status_code", "ERROR");
            span.record("error.message", tracing::field::display(err));
        }
    }
}

/// Noop if telemetry feature is off.
#[cfg(not(feature = "telemetry"))]
const fn record_result_on_span<R, E: Display>(_result: &Result<R, E>) {}
