//! The client module for sending requests and parsing responses

use crate::error::Error;
use crate::error::Error::ResponseError;
use crate::response::Response;
use tokio::time::timeout;

use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::StatusCode;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client as HttpClient;
use hyper_util::rt::TokioExecutor;
use serde::Serialize;
use serde_json::{Map, Value};
use std::convert::Infallible;
use std::time::Duration;

/// Where the Appboy REST API lives unless configured otherwise.
pub const DEFAULT_BASE_URI: &str = "https://api.appboy.com";

const SEND_ENDPOINT: &str = "messages/send";
const SCHEDULE_ENDPOINT: &str = "messages/schedule/create";

type HyperConnector = HttpsConnector<HttpConnector>;

/// Handles requests to and responses from the Appboy REST API.
///
/// Every request carries the app group identifier the client was created
/// with. A request is successful when Appboy answers with a 2xx status; in
/// any other case the returned `Err` holds the response for handling. Nothing
/// is retried.
#[derive(Debug, Clone)]
pub struct Client {
    options: ConnectionOptions,
    app_group_id: String,
    http_client: HttpClient<HyperConnector, BoxBody<Bytes, Infallible>>,
}

/// Uses [`DEFAULT_BASE_URI`] and no request timeout by default.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// The URI the endpoints are appended to
    pub base_uri: String,
    /// The timeout of the HTTP requests, `None` to wait for the transport
    pub request_timeout_secs: Option<u64>,
    /// The timeout for idle sockets being kept alive
    pub pool_idle_timeout_secs: Option<u64>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_uri: String::from(DEFAULT_BASE_URI),
            request_timeout_secs: None,
            pool_idle_timeout_secs: Some(600),
        }
    }
}

impl ClientOptions {
    pub fn new<S>(base_uri: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            base_uri: base_uri.into(),
            ..Default::default()
        }
    }

    pub fn with_request_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = Some(seconds);
        self
    }

    pub fn with_pool_idle_timeout(mut self, seconds: u64) -> Self {
        self.pool_idle_timeout_secs = Some(seconds);
        self
    }
}

#[derive(Debug, Clone)]
struct ConnectionOptions {
    base_uri: String,
    request_timeout: Option<Duration>,
}

impl From<ClientOptions> for ConnectionOptions {
    fn from(value: ClientOptions) -> Self {
        let ClientOptions {
            base_uri,
            request_timeout_secs,
            pool_idle_timeout_secs: _,
        } = value;

        Self {
            base_uri,
            request_timeout: request_timeout_secs.map(Duration::from_secs),
        }
    }
}

impl Client {
    /// A client talking to [`DEFAULT_BASE_URI`] on behalf of the given app
    /// group.
    pub fn new<S>(app_group_id: S) -> Client
    where
        S: Into<String>,
    {
        Self::with_options(app_group_id, ClientOptions::default())
    }

    pub fn with_options<S>(app_group_id: S, options: ClientOptions) -> Client
    where
        S: Into<String>,
    {
        let http_client = HttpClient::builder(TokioExecutor::new())
            .pool_idle_timeout(options.pool_idle_timeout_secs.map(Duration::from_secs))
            .build(default_connector());

        Client {
            options: options.into(),
            app_group_id: app_group_id.into(),
            http_client,
        }
    }

    pub fn base_uri(&self) -> &str {
        &self.options.base_uri
    }

    pub fn set_base_uri<S>(&mut self, base_uri: S)
    where
        S: Into<String>,
    {
        self.options.base_uri = base_uri.into();
    }

    pub fn app_group_id(&self) -> &str {
        &self.app_group_id
    }

    pub fn set_app_group_id<S>(&mut self, app_group_id: S)
    where
        S: Into<String>,
    {
        self.app_group_id = app_group_id.into();
    }

    /// The full URI of an endpoint. Surrounding slashes of the endpoint and a
    /// trailing slash of the base URI are ignored.
    ///
    /// ```rust
    /// # use appboy::Client;
    /// # fn main() {
    /// let client = Client::new("app-group");
    ///
    /// assert_eq!("https://api.appboy.com/messages/send", client.make_base_uri("/messages/send/"));
    /// # }
    /// ```
    pub fn make_base_uri(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.options.base_uri.trim_end_matches('/'),
            endpoint.trim_matches('/')
        )
    }

    /// Send a message to the audience described in `params`, usually a
    /// [Notification](../request/notification/struct.Notification.html).
    /// The app group identifier is added to the request.
    #[cfg_attr(feature = "tracing", ::tracing::instrument(skip_all))]
    pub async fn send_message<T>(&self, params: &T) -> Result<Response, Error>
    where
        T: Serialize + ?Sized,
    {
        let params = self.with_app_group_id(params)?;
        self.post(SEND_ENDPOINT, &params).await
    }

    /// Schedule a message, usually a
    /// [ScheduledNotification](../request/notification/struct.ScheduledNotification.html).
    /// The app group identifier is added to the request.
    #[cfg_attr(feature = "tracing", ::tracing::instrument(skip_all))]
    pub async fn schedule_message<T>(&self, params: &T) -> Result<Response, Error>
    where
        T: Serialize + ?Sized,
    {
        let params = self.with_app_group_id(params)?;
        self.post(SCHEDULE_ENDPOINT, &params).await
    }

    /// POST `data` as JSON to the endpoint and decode the JSON object in the
    /// response.
    #[cfg_attr(feature = "tracing", ::tracing::instrument(skip_all, fields(endpoint = %endpoint)))]
    pub async fn post<T>(&self, endpoint: &str, data: &T) -> Result<Response, Error>
    where
        T: Serialize + ?Sized,
    {
        let request = self.build_request(endpoint, serde_json::to_string(data)?)?;

        #[cfg(feature = "tracing")]
        ::tracing::debug!(uri = %request.uri(), "Sending request to Appboy");

        let exchange = self.exchange(request);

        let (code, body) = match self.options.request_timeout {
            Some(request_timeout) => timeout(request_timeout, exchange)
                .await
                .map_err(|_| Error::RequestTimeout(request_timeout.as_secs()))??,
            None => exchange.await?,
        };

        #[cfg(feature = "tracing")]
        ::tracing::debug!(status = code.as_u16(), "Appboy responded");

        match body {
            Some(body) if code.is_success() => Ok(Response {
                code: code.as_u16(),
                body: decode_body(&body)?,
            }),
            body => Err(ResponseError(Response {
                code: code.as_u16(),
                body: body.and_then(|body| decode_body(&body).ok()).unwrap_or_default(),
            })),
        }
    }

    /// Sends the request and reads the whole body. The body of an
    /// unsuccessful response is `None` if it could not be read.
    async fn exchange(
        &self,
        request: hyper::Request<BoxBody<Bytes, Infallible>>,
    ) -> Result<(StatusCode, Option<Bytes>), Error> {
        let response = self.http_client.request(request).await?;
        let code = response.status();
        let body = response.into_body().collect().await.map(|body| body.to_bytes());

        if code.is_success() {
            Ok((code, Some(body?)))
        } else {
            Ok((code, body.ok()))
        }
    }

    fn with_app_group_id<T>(&self, params: &T) -> Result<Map<String, Value>, Error>
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(params)? {
            Value::Object(mut params) => {
                params.insert(
                    String::from("app_group_id"),
                    Value::String(self.app_group_id.clone()),
                );
                Ok(params)
            }
            _ => Err(Error::InvalidPayload),
        }
    }

    fn build_request(&self, endpoint: &str, body: String) -> Result<hyper::Request<BoxBody<Bytes, Infallible>>, Error> {
        hyper::Request::builder()
            .uri(self.make_base_uri(endpoint))
            .method("POST")
            .header(CONTENT_TYPE, "application/json")
            .header(CONTENT_LENGTH, body.len())
            .body(Full::from(body.into_bytes()).boxed())
            .map_err(Error::BuildRequestError)
    }
}

/// An empty body reads as an empty object.
fn decode_body(body: &[u8]) -> Result<Map<String, Value>, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    serde_json::from_slice(body)
}

fn default_connector() -> HyperConnector {
    HttpsConnectorBuilder::new()
        .with_webpki_roots()
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .build()
}
