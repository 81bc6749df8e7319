//! Error and result module

use crate::response::Response;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// User request or Appboy response JSON data was faulty.
    #[error("Error serializing to JSON: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Request parameters given to
    /// [send_message](../client/struct.Client.html#method.send_message) or
    /// [schedule_message](../client/struct.Client.html#method.schedule_message)
    /// did not serialize into a JSON object.
    #[error("Request parameters must serialize into a JSON object")]
    InvalidPayload,

    /// The HTTP request could not be constructed, usually because of an
    /// invalid base URI.
    #[error("Failed to construct HTTP request: {0}")]
    BuildRequestError(#[source] http::Error),

    /// A problem connecting to the Appboy servers.
    #[error("Error connecting to Appboy: {0}")]
    ClientConnectionError(#[from] hyper_util::client::legacy::Error),

    /// Reading the response body failed.
    #[error("Error reading the response body: {0}")]
    ResponseBodyError(#[from] hyper::Error),

    /// Appboy couldn't respond in a timely manner, if a request timeout was
    /// set in [ClientOptions](../client/struct.ClientOptions.html).
    #[error("Timeout in sending a message after {0} seconds")]
    RequestTimeout(u64),

    /// Appboy did not accept the request. Contains the
    /// [Response](../response/struct.Response.html) with the status and the
    /// decoded body.
    #[error("Request was not accepted by Appboy (status: {}, message: {})", .0.code, .0.message().unwrap_or("none"))]
    ResponseError(Response),
}
